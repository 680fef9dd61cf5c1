use engine::{Section, Theme, ViewAction};

use crate::error::AppError;

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub enum ComponentId {
    Sidebar,
    SectionView,
    ThemePicker,
    ErrorPopup,
    GlobalKeyWatcher,
}

#[derive(Debug, PartialEq)]
pub enum Msg {
    AppClose,
    ForceRedraw,
    NavigationActivity(NavigationActivityMsg),
    ThemeActivity(ThemeActivityMsg),
    CreatorActivity(CreatorActivityMsg),
    ViewActivity(ViewAction),
    PopupActivity(PopupActivityMsg),
    Error(AppError),
}

#[derive(Debug, PartialEq)]
pub enum NavigationActivityMsg {
    SectionSelected(Section),
}

#[derive(Debug, PartialEq)]
pub enum ThemeActivityMsg {
    TogglePicker,
    ThemeSelected(Theme),
    CycleTheme,
    ThemePickerClosed,
}

#[derive(Debug, PartialEq)]
pub enum CreatorActivityMsg {
    NextPreset,
    Generate,
    GenerationFinished,
}

#[derive(Debug, PartialEq)]
pub enum PopupActivityMsg {
    ShowError(AppError),
    ShowWarning(String),
    CloseError,
}

impl Default for Msg {
    fn default() -> Self {
        Self::AppClose
    }
}
