use crate::app::model::Model;
use crate::components::common::{ComponentId, Msg, ThemeActivityMsg};
use engine::Theme;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_theme(&mut self, msg: ThemeActivityMsg) -> Option<Msg> {
        match msg {
            ThemeActivityMsg::TogglePicker => self.handle_toggle_picker(),
            ThemeActivityMsg::ThemeSelected(theme) => self.handle_theme_selected(theme),
            ThemeActivityMsg::CycleTheme => {
                let theme = self.state.cycle_theme();
                log::info!("Cycled to theme: {theme}");
                None
            }
            ThemeActivityMsg::ThemePickerClosed => self.handle_theme_picker_closed(),
        }
    }

    fn handle_toggle_picker(&mut self) -> Option<Msg> {
        if self.app.mounted(&ComponentId::ThemePicker) {
            return self.handle_theme_picker_closed();
        }
        if let Err(e) = self.mount_theme_picker() {
            log::error!("Failed to mount theme picker: {e}");
            self.error_reporter.report_simple(e, "ThemePicker", "mount");
        }
        None
    }

    fn handle_theme_selected(&mut self, theme: Theme) -> Option<Msg> {
        // Palette handles are updated before this returns
        self.state.apply_theme(theme);

        if let Err(e) = self.unmount_theme_picker() {
            log::error!("Failed to unmount theme picker: {e}");
            self.error_reporter
                .report_simple(e, "ThemePicker", "unmount");
            return None;
        }

        log::info!("Switched to theme: {theme}");
        None
    }

    fn handle_theme_picker_closed(&mut self) -> Option<Msg> {
        log::debug!("Theme picker closed");
        if let Err(e) = self.unmount_theme_picker() {
            log::error!("Failed to unmount theme picker: {e}");
            self.error_reporter
                .report_simple(e, "ThemePicker", "picker_closed");
        }
        None
    }
}
