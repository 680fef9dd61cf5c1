use super::Model;
use crate::components::common::ComponentId;
use crate::components::error_popup::ErrorPopup;
use crate::components::state::ComponentStateMount;
use crate::components::theme_picker::ThemePicker;
use crate::error::{AppError, AppResult};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    /// Mount error popup and give focus to it
    pub fn mount_error_popup(&mut self, error: &AppError) -> AppResult<()> {
        log::error!("Displaying error popup: {error}");
        self.show_message_popup(ErrorPopup::new(error, self.state.palette()))
    }

    pub fn mount_warning_popup(&mut self, message: &str) -> AppResult<()> {
        log::warn!("Displaying warning popup: {message}");
        self.show_message_popup(ErrorPopup::warning(message, self.state.palette()))
    }

    fn show_message_popup(&mut self, popup: ErrorPopup) -> AppResult<()> {
        // The theme picker would otherwise sit under the popup without focus
        if self.app.mounted(&ComponentId::ThemePicker) {
            self.app
                .umount(&ComponentId::ThemePicker)
                .map_err(|e| AppError::Component(e.to_string()))?;
        }

        self.app
            .remount_with_state(ComponentId::ErrorPopup, popup, Vec::default())?;
        self.app
            .active(&ComponentId::ErrorPopup)
            .map_err(|e| AppError::Component(e.to_string()))?;

        self.state_manager.push_popup(ComponentId::ErrorPopup);
        Ok(())
    }

    /// Unmount error popup and return focus to previous component
    pub fn unmount_error_popup(&mut self) -> AppResult<()> {
        if !self.app.mounted(&ComponentId::ErrorPopup) {
            log::debug!("Error popup already closed");
            return Ok(());
        }
        self.app
            .umount(&ComponentId::ErrorPopup)
            .map_err(|e| AppError::Component(e.to_string()))?;
        self.restore_focus()
    }

    pub fn mount_theme_picker(&mut self) -> AppResult<()> {
        self.app.remount_with_state(
            ComponentId::ThemePicker,
            ThemePicker::new(self.state.theme(), self.state.palette(), self.keys.clone()),
            Vec::default(),
        )?;
        self.app
            .active(&ComponentId::ThemePicker)
            .map_err(|e| AppError::Component(e.to_string()))?;

        self.state_manager.push_popup(ComponentId::ThemePicker);
        Ok(())
    }

    pub fn unmount_theme_picker(&mut self) -> AppResult<()> {
        if !self.app.mounted(&ComponentId::ThemePicker) {
            return Ok(());
        }
        self.app
            .umount(&ComponentId::ThemePicker)
            .map_err(|e| AppError::Component(e.to_string()))?;
        self.restore_focus()
    }

    fn restore_focus(&mut self) -> AppResult<()> {
        let target = self.state_manager.pop_popup();
        self.app
            .active(&target)
            .map_err(|e| AppError::Component(e.to_string()))
    }
}
