use crate::components::common::{Msg, PopupActivityMsg};
use engine::InvalidThemeError;
use std::fmt::Display;
use std::sync::mpsc::Sender;

/// Application-wide error types for the orchestrator terminal interface.
///
/// Each variant carries a human readable message. Errors either bubble up as
/// [`AppResult`] values or are routed through an [`ErrorReporter`], which logs
/// them and turns them into popup messages for the main loop.
///
/// # Error Categories
///
/// - [`AppError::Component`] - tuirealm mount, remount and focus failures
/// - [`AppError::Config`] - configuration loading and validation
/// - [`AppError::Theme`] - rejected theme names
/// - [`AppError::Channel`] - the event channel to the main loop is closed
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Component(String),

    Config(String),

    Theme(String),

    Channel(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Component(msg) => write!(f, "Component Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Theme(msg) => write!(f, "Theme Error: {msg}"),
            AppError::Channel(msg) => write!(f, "Channel Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<InvalidThemeError> for AppError {
    fn from(err: InvalidThemeError) -> Self {
        AppError::Theme(err.to_string())
    }
}

impl From<tuirealm::ApplicationError> for AppError {
    fn from(err: tuirealm::ApplicationError) -> Self {
        AppError::Component(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Queue `msg` for the main loop. Fails only when the loop has shut down and
/// dropped its receiver.
pub fn send_to_main(tx: &Sender<Msg>, msg: Msg) -> AppResult<()> {
    tx.send(msg)
        .map_err(|e| AppError::Channel(format!("main loop is gone: {e}")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

/// Where an error happened and what the user should be told about it.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
    pub user_message: String,
    pub technical_details: Option<String>,
    pub suggestion: Option<String>,
    pub severity: ErrorSeverity,
}

impl ErrorContext {
    pub fn new(component: &str, operation: &str) -> Self {
        Self {
            component: component.to_string(),
            operation: operation.to_string(),
            user_message: format!("An error occurred in {component}. Please try again."),
            technical_details: None,
            suggestion: None,
            severity: ErrorSeverity::Error,
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.user_message = message.to_string();
        self
    }

    pub fn with_technical_details(mut self, details: &str) -> Self {
        self.technical_details = Some(details.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }
}

/// Sends errors to the main loop as popup messages.
///
/// Cheap to clone; background tasks hold their own copy.
#[derive(Clone)]
pub struct ErrorReporter {
    tx: Sender<Msg>,
}

impl ErrorReporter {
    pub fn new(tx: Sender<Msg>) -> Self {
        Self { tx }
    }

    pub fn report_simple(&self, error: AppError, component: &str, operation: &str) {
        let context =
            ErrorContext::new(component, operation).with_technical_details(&error.to_string());
        self.report(error, context);
    }

    pub fn report_critical(
        &self,
        error: AppError,
        component: &str,
        operation: &str,
        user_message: &str,
    ) {
        let context = ErrorContext::new(component, operation)
            .with_message(user_message)
            .with_severity(ErrorSeverity::Critical)
            .with_suggestion("The application will terminate. Please fix the issue and restart.");
        self.report(error, context);
    }

    pub fn report(&self, error: AppError, context: ErrorContext) {
        let details = Self::format_additional_context(&context);
        match context.severity {
            ErrorSeverity::Warning => log::warn!(
                "[{}:{}] {} ({error}){details}",
                context.component,
                context.operation,
                context.user_message
            ),
            ErrorSeverity::Error => log::error!(
                "[{}:{}] {} ({error}){details}",
                context.component,
                context.operation,
                context.user_message
            ),
            ErrorSeverity::Critical => log::error!(
                "[CRITICAL] [{}:{}] {} ({error}){details}",
                context.component,
                context.operation,
                context.user_message
            ),
        }

        let popup_msg = match context.severity {
            ErrorSeverity::Warning => {
                PopupActivityMsg::ShowWarning(Self::format_user_message(&context))
            }
            ErrorSeverity::Error | ErrorSeverity::Critical => {
                PopupActivityMsg::ShowError(Self::create_formatted_error(&error, &context))
            }
        };

        if let Err(e) = send_to_main(&self.tx, Msg::PopupActivity(popup_msg)) {
            handle_error(e);
        }
    }

    pub fn report_mount_error(&self, component: &str, operation: &str, error: impl Display) {
        let app_error = AppError::Component(format!("Failed to {operation} {component}: {error}"));
        self.report_simple(app_error, component, operation);
    }

    pub fn report_config_warning(&self, message: &str) {
        let context = ErrorContext::new("Configuration", "validate")
            .with_message(message)
            .with_severity(ErrorSeverity::Warning);
        self.report(AppError::Config(message.to_string()), context);
    }

    fn format_additional_context(context: &ErrorContext) -> String {
        let mut parts = Vec::new();

        if let Some(ref technical_details) = context.technical_details {
            parts.push(format!("Technical: {technical_details}"));
        }

        if let Some(ref suggestion) = context.suggestion {
            parts.push(format!("Suggestion: {suggestion}"));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!(" | {}", parts.join(" | "))
        }
    }

    fn format_user_message(context: &ErrorContext) -> String {
        let mut message = context.user_message.clone();

        if let Some(ref suggestion) = context.suggestion {
            message.push_str(&format!("\n\nSuggestion: {suggestion}"));
        }

        message
    }

    fn create_formatted_error(error: &AppError, context: &ErrorContext) -> AppError {
        let mut formatted_message = context.user_message.clone();

        if let Some(ref technical) = context.technical_details {
            formatted_message.push_str(&format!("\n\nDetails: {technical}"));
        }

        if let Some(ref suggestion) = context.suggestion {
            formatted_message.push_str(&format!("\n\nSuggestion: {suggestion}"));
        }

        match error {
            AppError::Component(_) => AppError::Component(formatted_message),
            AppError::Config(_) => AppError::Config(formatted_message),
            AppError::Theme(_) => AppError::Theme(formatted_message),
            AppError::Channel(_) => AppError::Channel(formatted_message),
        }
    }
}

/// Last-resort handler when an error cannot be shown in a popup.
pub fn handle_error(error: AppError) {
    log::error!("Unhandled error: {error}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_error_context_creation() {
        let context = ErrorContext::new("Sidebar", "select");
        assert_eq!(context.component, "Sidebar");
        assert_eq!(context.operation, "select");
        assert_eq!(context.severity, ErrorSeverity::Error);
        assert!(context.user_message.contains("Sidebar"));
    }

    #[test]
    fn test_invalid_theme_converts() {
        let error: AppError = InvalidThemeError {
            name: "sepia".to_string(),
        }
        .into();
        assert!(matches!(error, AppError::Theme(ref m) if m.contains("sepia")));
        assert!(error.to_string().starts_with("Theme Error:"));
    }

    #[test]
    fn test_report_error_sends_formatted_popup() {
        let (tx, rx) = mpsc::channel();
        let reporter = ErrorReporter::new(tx);

        reporter.report_simple(
            AppError::Component("boom".to_string()),
            "SectionView",
            "remount",
        );

        match rx.try_recv() {
            Ok(Msg::PopupActivity(PopupActivityMsg::ShowError(AppError::Component(msg)))) => {
                assert!(msg.contains("SectionView"));
                assert!(msg.contains("Details: Component Error: boom"));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_config_warning_sends_warning_popup() {
        let (tx, rx) = mpsc::channel();
        let reporter = ErrorReporter::new(tx);

        reporter.report_config_warning("Unknown theme 'sepia', using light");

        match rx.try_recv() {
            Ok(Msg::PopupActivity(PopupActivityMsg::ShowWarning(msg))) => {
                assert!(msg.contains("sepia"));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_send_to_closed_loop_is_a_channel_error() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let error = send_to_main(&tx, Msg::ForceRedraw).unwrap_err();
        assert!(matches!(error, AppError::Channel(_)));
        assert!(error.to_string().starts_with("Channel Error:"));
    }

    #[test]
    fn test_report_with_closed_channel_does_not_panic() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let reporter = ErrorReporter::new(tx);
        reporter.report_config_warning("ignored");
    }
}
