use claims::{assert_matches, assert_some_eq};
use engine::controls::AdminTab;
use engine::generation::GenerationRejected;
use engine::{Section, Theme, ViewAction};
use orchestrator::app::state::{CreatorOutcome, DashboardState};
use orchestrator::components::common::{
    CreatorActivityMsg, Msg, NavigationActivityMsg, ThemeActivityMsg,
};
use orchestrator::components::global_key_watcher::GlobalKeyWatcher;
use orchestrator::components::sidebar::Sidebar;
use orchestrator::config::KeyBindingsConfig;
use orchestrator::theme::Palette;
use tuirealm::Component;
use tuirealm::event::{Event, Key, KeyEvent, KeyModifiers, NoUserEvent};

fn press(c: char) -> Event<NoUserEvent> {
    Event::Keyboard(KeyEvent {
        code: Key::Char(c),
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_initial_state() {
    let state = DashboardState::new(Theme::default(), Section::default());
    assert_eq!(state.theme(), Theme::Light);
    assert_eq!(state.active_section(), Section::Dashboard);
    assert_eq!(state.palette().current(), Palette::for_theme(Theme::Light));
}

#[test]
fn test_sidebar_digit_selects_section() {
    let state = DashboardState::new(Theme::Dark, Section::Dashboard);
    let mut sidebar = Sidebar::new(
        state.active_section(),
        state.palette(),
        KeyBindingsConfig::default(),
    );

    assert_some_eq!(
        sidebar.on(press('3')),
        Msg::NavigationActivity(NavigationActivityMsg::SectionSelected(Section::Creator))
    );
    assert_eq!(sidebar.active(), Section::Creator);
}

#[test]
fn test_global_keys_map_to_messages() {
    let mut watcher = GlobalKeyWatcher::new(KeyBindingsConfig::default());

    assert_some_eq!(watcher.on(press('q')), Msg::AppClose);
    assert_some_eq!(
        watcher.on(press('t')),
        Msg::ThemeActivity(ThemeActivityMsg::TogglePicker)
    );
    assert_some_eq!(
        watcher.on(press('T')),
        Msg::ThemeActivity(ThemeActivityMsg::CycleTheme)
    );
    assert_some_eq!(
        watcher.on(press('g')),
        Msg::CreatorActivity(CreatorActivityMsg::Generate)
    );
}

#[test]
fn test_theme_switch_reaches_every_palette_clone() {
    let mut state = DashboardState::new(Theme::Light, Section::Dashboard);
    let sidebar_palette = state.palette();

    state.apply_theme(Theme::Neon);
    assert_eq!(sidebar_palette.current().theme, Theme::Neon);
    assert_ne!(
        sidebar_palette.current(),
        Palette::for_theme(Theme::Light)
    );

    assert_eq!(state.cycle_theme(), Theme::Minimal);
    assert_eq!(sidebar_palette.current().theme, Theme::Minimal);
}

#[test]
fn test_generation_round_trip_through_state() {
    let mut state = DashboardState::new(Theme::Light, Section::Creator);

    let prompt = match state.apply_creator(&CreatorActivityMsg::NextPreset) {
        CreatorOutcome::PromptChanged(prompt) => prompt,
        other => panic!("expected a prompt, got {other:?}"),
    };
    assert!(!prompt.is_empty());
    assert_eq!(
        state.apply_creator(&CreatorActivityMsg::Generate),
        CreatorOutcome::Started(prompt)
    );
    assert!(state.creator_snapshot().generating);
    assert_eq!(
        state.apply_creator(&CreatorActivityMsg::Generate),
        CreatorOutcome::Rejected(GenerationRejected::AlreadyRunning)
    );

    assert_eq!(
        state.apply_creator(&CreatorActivityMsg::GenerationFinished),
        CreatorOutcome::Finished { visible: true }
    );
    let snapshot = state.creator_snapshot();
    assert!(!snapshot.generating);
    assert_eq!(snapshot.completed, 1);
}

#[test]
fn test_creator_keys_do_nothing_outside_creator_studio() {
    let mut state = DashboardState::new(Theme::Light, Section::Dashboard);
    let before = state.creator_snapshot();

    assert_eq!(
        state.apply_creator(&CreatorActivityMsg::NextPreset),
        CreatorOutcome::Ignored
    );
    assert_eq!(
        state.apply_creator(&CreatorActivityMsg::Generate),
        CreatorOutcome::Ignored
    );
    assert_eq!(state.creator_snapshot(), before);
    assert!(state.creator_snapshot().prompt.is_empty());
    assert!(!state.generation().is_generating());
}

#[test]
fn test_generation_finished_after_navigating_away_still_counts() {
    let mut state = DashboardState::new(Theme::Light, Section::Creator);
    assert_matches!(
        state.apply_creator(&CreatorActivityMsg::NextPreset),
        CreatorOutcome::PromptChanged(_)
    );
    assert_matches!(
        state.apply_creator(&CreatorActivityMsg::Generate),
        CreatorOutcome::Started(_)
    );

    assert!(state.select_section(Section::Performance));
    assert_eq!(
        state.apply_creator(&CreatorActivityMsg::GenerationFinished),
        CreatorOutcome::Finished { visible: false }
    );

    let snapshot = state.creator_snapshot();
    assert_eq!(snapshot.completed, 1);
    assert!(!snapshot.generating);
    assert!(snapshot.prompt.is_empty());

    // Back in the studio the next generation needs a fresh prompt
    state.select_section(Section::Creator);
    assert_eq!(
        state.apply_creator(&CreatorActivityMsg::Generate),
        CreatorOutcome::Rejected(GenerationRejected::EmptyPrompt)
    );
}

#[test]
fn test_view_keys_drive_the_active_section() {
    let mut watcher = GlobalKeyWatcher::new(KeyBindingsConfig::default());
    let mut state = DashboardState::new(Theme::Light, Section::Performance);

    for c in ['n', 'm', 'm'] {
        let Some(Msg::ViewActivity(action)) = watcher.on(press(c)) else {
            panic!("'{c}' should be a view key");
        };
        assert!(state.apply_view_action(action));
    }
    assert_eq!(
        state.controls().performance.chart_caption(),
        "Displaying conversions for 90d"
    );

    state.select_section(Section::Admin);
    assert!(state.apply_view_action(ViewAction::Next));
    assert!(!state.apply_view_action(ViewAction::NextAlt));
    assert_eq!(state.controls().admin_tab, AdminTab::Users);
}
