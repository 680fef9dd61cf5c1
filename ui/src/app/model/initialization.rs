use super::Model;
use crate::app::managers::StateManager;
use crate::app::state::DashboardState;
use crate::components::common::{ComponentId, Msg};
use crate::components::global_key_watcher::GlobalKeyWatcher;
use crate::components::section_view::SectionView;
use crate::components::sidebar::Sidebar;
use crate::components::state::ComponentStateMount;
use crate::config::{AppConfig, KeyBindingsConfig};
use crate::error::{AppError, AppResult, ErrorReporter};
use engine::taskpool::TaskPool;
use engine::{Section, Theme};
use std::sync::mpsc;
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{CrosstermTerminalAdapter, TerminalBridge};
use tuirealm::{Application, EventListenerCfg, Sub, SubClause, SubEventClause};

const TASK_POOL_SIZE: usize = 4;

/// Global shortcuts are muted while a popup owns the keyboard.
pub fn global_key_watcher_subscriptions() -> Vec<Sub<ComponentId, NoUserEvent>> {
    vec![Sub::new(
        SubEventClause::Any,
        SubClause::Not(Box::new(SubClause::Or(
            Box::new(SubClause::IsMounted(ComponentId::ThemePicker)),
            Box::new(SubClause::IsMounted(ComponentId::ErrorPopup)),
        ))),
    )]
}

/// Terminal input listener tuned from configuration.
pub fn event_listener(config: &AppConfig) -> EventListenerCfg<NoUserEvent> {
    EventListenerCfg::default()
        .crossterm_input_listener(
            config.crossterm_input_listener_interval(),
            config.crossterm_input_listener_retries(),
        )
        .poll_timeout(config.poll_timeout())
        .tick_interval(config.tick_interval())
}

/// Build the application with the sidebar, the section view and the global
/// key watcher mounted. The sidebar has focus.
pub fn init_app(
    listener: EventListenerCfg<NoUserEvent>,
    state: &DashboardState,
    keys: &KeyBindingsConfig,
) -> AppResult<Application<ComponentId, Msg, NoUserEvent>> {
    let mut app: Application<ComponentId, Msg, NoUserEvent> = Application::init(listener);

    app.mount_with_state(
        ComponentId::Sidebar,
        Sidebar::new(state.active_section(), state.palette(), keys.clone()),
        Vec::default(),
    )?;

    app.mount_with_state(
        ComponentId::SectionView,
        SectionView::new(
            state.active_section(),
            state.creator_snapshot(),
            state.controls(),
            state.palette(),
        ),
        Vec::default(),
    )?;

    app.mount(
        ComponentId::GlobalKeyWatcher,
        Box::new(GlobalKeyWatcher::new(keys.clone())),
        global_key_watcher_subscriptions(),
    )
    .map_err(|e| AppError::Component(e.to_string()))?;

    app.active(&ComponentId::Sidebar)
        .map_err(|e| AppError::Component(e.to_string()))?;

    Ok(app)
}

impl Model<CrosstermTerminalAdapter> {
    /// `theme` and `section` are the resolved start values, after command-line
    /// overrides.
    pub fn new(config: &AppConfig, theme: Theme, section: Section) -> AppResult<Self> {
        let (tx_to_main, rx_to_main) = mpsc::channel();
        let error_reporter = ErrorReporter::new(tx_to_main.clone());

        let state = DashboardState::new(theme, section);
        let keys = config.keys().clone();

        let app = init_app(event_listener(config), &state, &keys)?;
        let terminal =
            TerminalBridge::init_crossterm().map_err(|e| AppError::Component(e.to_string()))?;

        log::info!(
            "Model initialized: theme '{}', section '{}'",
            state.theme(),
            state.active_section()
        );

        Ok(Self {
            app,
            terminal,
            state,
            state_manager: StateManager::new(),
            taskpool: TaskPool::new(TASK_POOL_SIZE),
            tx_to_main,
            rx_to_main,
            error_reporter,
            keys,
            generation_delay: config.generation_delay(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_ok;

    #[test]
    fn test_init_app_mounts_shell() {
        let state = DashboardState::new(Theme::Dark, Section::Agents);
        let keys = KeyBindingsConfig::default();
        let app = assert_ok!(init_app(EventListenerCfg::default(), &state, &keys));

        assert!(app.mounted(&ComponentId::Sidebar));
        assert!(app.mounted(&ComponentId::SectionView));
        assert!(app.mounted(&ComponentId::GlobalKeyWatcher));
        assert!(!app.mounted(&ComponentId::ThemePicker));
        assert!(!app.mounted(&ComponentId::ErrorPopup));
        assert_eq!(app.focus(), Some(&ComponentId::Sidebar));
    }
}
