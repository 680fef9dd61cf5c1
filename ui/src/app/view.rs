use crate::components::base_popup::PopupLayout;
use crate::components::common::{ComponentId, Msg};
use crate::components::help_bar::HelpBar;
use crate::components::sidebar::SIDEBAR_WIDTH;
use crate::config::KeyBindingsConfig;
use crate::error::AppError;
use crate::theme::Palette;
use engine::Section;
use tuirealm::ratatui::layout::{Constraint, Layout, Rect};
use tuirealm::{Application, Frame, NoUserEvent};

const ERROR_POPUP_WIDTH: u16 = 60;
const ERROR_POPUP_HEIGHT: u16 = 10;
const THEME_PICKER_WIDTH: u16 = 44;
const THEME_PICKER_HEIGHT: u16 = 10;

/// Split the frame into navigation rail, content area and help bar.
pub fn dashboard_layout(area: Rect) -> (Rect, Rect, Rect) {
    let [main, help] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    let [rail, content] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(main);
    (rail, content, help)
}

// Render the error popup centered on the screen
pub fn view_error_popup(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    f: &mut Frame,
) -> Result<(), AppError> {
    let popup_area = PopupLayout::fixed(f.area(), ERROR_POPUP_WIDTH, ERROR_POPUP_HEIGHT);
    app.view(&ComponentId::ErrorPopup, f, popup_area);

    // Make sure the popup has focus
    app.active(&ComponentId::ErrorPopup)
        .map_err(|e| AppError::Component(e.to_string()))?;
    Ok(())
}

pub fn view_theme_picker(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    f: &mut Frame,
) -> Result<(), AppError> {
    let popup_area = PopupLayout::fixed(f.area(), THEME_PICKER_WIDTH, THEME_PICKER_HEIGHT);
    app.view(&ComponentId::ThemePicker, f, popup_area);
    app.active(&ComponentId::ThemePicker)
        .map_err(|e| AppError::Component(e.to_string()))?;
    Ok(())
}

pub fn view_help_bar(
    f: &mut Frame,
    area: Rect,
    active_component: &ComponentId,
    section: Section,
    keys: &KeyBindingsConfig,
    palette: &Palette,
) {
    HelpBar::new(keys, *palette).view_with_active(f, area, active_component, section);
}

/// Draw the whole dashboard: rail, content, help bar, then whichever popup is
/// open on top.
pub fn render_dashboard(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    f: &mut Frame,
    active_component: &ComponentId,
    section: Section,
    keys: &KeyBindingsConfig,
    palette: &Palette,
) -> Result<(), AppError> {
    let (rail, content, help) = dashboard_layout(f.area());

    app.view(&ComponentId::Sidebar, f, rail);
    app.view(&ComponentId::SectionView, f, content);
    view_help_bar(f, help, active_component, section, keys, palette);

    if app.mounted(&ComponentId::ErrorPopup) {
        return view_error_popup(app, f);
    }
    if app.mounted(&ComponentId::ThemePicker) {
        return view_theme_picker(app, f);
    }
    Ok(())
}
