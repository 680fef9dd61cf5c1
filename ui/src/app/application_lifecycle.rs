//! Application lifecycle management
//!
//! Startup validation, terminal setup, the main loop and shutdown.

use crate::app::model::Model;
use crate::components::common::{ComponentId, Msg};
use crate::config::{AppConfig, ConfigValidationError};
use crate::error::{AppError, ErrorReporter};
use engine::{Section, Theme};

use log::{debug, error, info, warn};
use std::error::Error as StdError;
use tuirealm::Update;
use tuirealm::application::PollStrategy;
use tuirealm::terminal::CrosstermTerminalAdapter;

/// Shows a fatal configuration error and waits until the user closes it.
pub struct ConfigErrorDisplay {
    model: Model<CrosstermTerminalAdapter>,
}

impl ConfigErrorDisplay {
    pub fn new(
        config: &AppConfig,
        validation_errors: &[ConfigValidationError],
    ) -> Result<Self, Box<dyn StdError>> {
        let mut model = Model::new(config, Theme::default(), Section::default())
            .map_err(|e| format!("Failed to initialize model for error display: {e}"))?;

        for (i, validation_error) in validation_errors.iter().enumerate() {
            error!("Config validation error {}: {validation_error}", i + 1);
        }

        // The first fatal error is the one shown
        if let Some(first) = validation_errors.iter().find(|e| e.is_fatal()) {
            let message = first.user_message();
            if let Err(e) = model.mount_error_popup(&AppError::Config(message)) {
                error!("Failed to mount configuration error popup: {e}");
            }
        }

        Ok(Self { model })
    }

    pub fn show_and_wait_for_acknowledgment(&mut self) -> Result<(), Box<dyn StdError>> {
        info!("Configuration validation failed. Waiting for the user to acknowledge.");

        ApplicationLifecycle::setup_terminal(&mut self.model)?;

        if let Err(e) = self.model.view() {
            error!("Error during error popup rendering: {e}");
        }

        while !self.model.state_manager.should_quit() {
            match self.model.app.tick(PollStrategy::Once) {
                Err(err) => {
                    error!("Application tick error during error display: {err}");
                    break;
                }
                Ok(messages) if !messages.is_empty() => {
                    for msg in messages.into_iter() {
                        let mut msg = Some(msg);
                        while msg.is_some() {
                            msg = self.model.update(msg);
                        }
                    }

                    if !self.model.app.mounted(&ComponentId::ErrorPopup) {
                        info!("Configuration error popup closed by user");
                        self.model.set_quit(true);
                        break;
                    }

                    if let Err(e) = self.model.view() {
                        error!("Error during view rendering: {e}");
                        break;
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }

    pub fn shutdown(self) -> Result<(), Box<dyn StdError>> {
        info!("Terminating application due to configuration errors");
        ApplicationLifecycle::shutdown_application(self.model)
    }
}

/// Start values after command-line overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupOptions {
    pub theme: Theme,
    pub section: Section,
}

impl StartupOptions {
    /// Command-line values win over configuration. An unknown section id
    /// falls back to the dashboard.
    pub fn resolve(config: &AppConfig, theme: Option<Theme>, section: Option<&str>) -> Self {
        Self {
            theme: theme.unwrap_or_else(|| config.theme()),
            section: section
                .map(Section::from_id_or_default)
                .unwrap_or_else(|| config.default_section()),
        }
    }
}

/// Application initialization and lifecycle management
pub struct ApplicationLifecycle;

impl ApplicationLifecycle {
    /// Validate the configuration and build the model.
    ///
    /// Returns `Ok(None)` when a fatal configuration error was shown and the
    /// application should exit.
    pub fn start(
        config: &AppConfig,
        options: StartupOptions,
    ) -> Result<Option<Model<CrosstermTerminalAdapter>>, Box<dyn StdError>> {
        info!("Starting Campaign Orchestrator");

        let warnings = match config.validate() {
            Ok(()) => Vec::new(),
            Err(errors) if errors.iter().any(ConfigValidationError::is_fatal) => {
                error!(
                    "Configuration validation failed with {} errors",
                    errors.len()
                );
                Self::show_config_error_and_exit(config, &errors)?;
                return Ok(None);
            }
            Err(errors) => errors,
        };

        let mut model = Self::initialize(config, options.theme, options.section)?;
        Self::handle_config_warnings(&mut model, &warnings);
        Ok(Some(model))
    }

    /// Create and initialize the application model
    pub fn initialize(
        config: &AppConfig,
        theme: Theme,
        section: Section,
    ) -> Result<Model<CrosstermTerminalAdapter>, Box<dyn StdError>> {
        match Model::new(config, theme, section) {
            Ok(model) => {
                info!("Model initialized successfully");
                Ok(model)
            }
            Err(e) => {
                Self::report_critical_error(
                    e.clone(),
                    "ApplicationModel",
                    "initialize",
                    "Failed to initialize application model. The application cannot start.",
                );
                Err(e.into())
            }
        }
    }

    /// Non-fatal validation errors become a warning popup over the dashboard,
    /// shown once the main loop picks up the queued message.
    fn handle_config_warnings(
        model: &mut Model<CrosstermTerminalAdapter>,
        warnings: &[ConfigValidationError],
    ) {
        let Some(first) = warnings.first() else {
            return;
        };
        warn!("Configuration warning: {first}");
        model
            .error_reporter
            .report_config_warning(&first.user_message());
    }

    /// Setup terminal for application use
    pub fn setup_terminal(
        model: &mut Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        debug!("Entering alternate screen");
        model
            .terminal
            .enter_alternate_screen()
            .map_err(|e| format!("Failed to enter alternate screen: {e}"))?;
        model
            .terminal
            .enable_raw_mode()
            .map_err(|e| format!("Failed to enable raw mode: {e}"))?;
        Ok(())
    }

    /// Run the main application loop
    pub fn run_application_loop(
        model: &mut Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        info!("Entering main application loop");

        while !model.state_manager.should_quit() {
            Self::process_single_iteration(model)?;
        }

        Ok(())
    }

    fn process_single_iteration(
        model: &mut Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        // Generation results arrive here
        model.update_outside_msg();

        match model.app.tick(PollStrategy::Once) {
            Err(err) => {
                Self::handle_tick_error(model, err)?;
            }
            Ok(messages) if !messages.is_empty() => {
                Self::process_messages(model, messages);
            }
            _ => {}
        }

        Self::handle_redraw(model);

        Ok(())
    }

    fn handle_tick_error(
        model: &mut Model<CrosstermTerminalAdapter>,
        err: tuirealm::ApplicationError,
    ) -> Result<(), Box<dyn StdError>> {
        error!("Application tick error: {err:?}");

        if let Err(e) =
            model.mount_error_popup(&AppError::Component(format!("Application error: {err}")))
        {
            error!("Failed to mount error popup: {e}");
            return Err(format!("Failed to display error: {err}").into());
        }
        model.set_redraw(true);
        Ok(())
    }

    fn process_messages(model: &mut Model<CrosstermTerminalAdapter>, messages: Vec<Msg>) {
        model.set_redraw(true);
        for msg in messages.into_iter() {
            let mut msg = Some(msg);
            while msg.is_some() {
                msg = model.update(msg);
            }
        }
    }

    fn handle_redraw(model: &mut Model<CrosstermTerminalAdapter>) {
        if model.state_manager.needs_redraw() {
            if let Err(e) = model.view() {
                error!("Error during view rendering: {e}");
                if let Err(popup_err) = model.mount_error_popup(&e) {
                    model
                        .error_reporter
                        .report_mount_error("ErrorPopup", "mount", popup_err);
                    model
                        .error_reporter
                        .report_simple(e, "ViewRendering", "main_loop");
                }
            }
            model.state_manager.redraw_complete();
        }
    }

    /// Stop background work and restore the terminal
    pub fn shutdown_application(
        mut model: Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        info!("Application shutdown initiated");
        model.shutdown();

        debug!("Leaving alternate screen");
        let _ = model.terminal.leave_alternate_screen();
        let _ = model.terminal.disable_raw_mode();
        let _ = model.terminal.clear_screen();

        info!("Application terminated successfully");
        Ok(())
    }

    fn show_config_error_and_exit(
        config: &AppConfig,
        validation_errors: &[ConfigValidationError],
    ) -> Result<(), Box<dyn StdError>> {
        let mut error_display = ConfigErrorDisplay::new(config, validation_errors)?;
        error_display.show_and_wait_for_acknowledgment()?;
        error_display.shutdown()
    }

    /// Report an error that happens before the main loop exists.
    pub fn report_critical_error(
        error: AppError,
        component: &str,
        operation: &str,
        user_message: &str,
    ) {
        // Nobody drains this channel; the report is only logged
        let (tx, _rx) = std::sync::mpsc::channel();
        let error_reporter = ErrorReporter::new(tx);
        error_reporter.report_critical(error, component, operation, user_message);

        eprintln!("Critical Error: {user_message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_values_override_config() {
        let config = AppConfig::default();
        let options = StartupOptions::resolve(&config, Some(Theme::Neon), Some("agents"));
        assert_eq!(options.theme, Theme::Neon);
        assert_eq!(options.section, Section::Agents);
    }

    #[test]
    fn test_config_values_used_without_cli() {
        let config = AppConfig::default();
        let options = StartupOptions::resolve(&config, None, None);
        assert_eq!(options.theme, Theme::Light);
        assert_eq!(options.section, Section::Dashboard);
    }

    #[test]
    fn test_unknown_cli_section_falls_back() {
        let config = AppConfig::default();
        let options = StartupOptions::resolve(&config, None, Some("billing"));
        assert_eq!(options.section, Section::Dashboard);
    }
}
