use crate::components::base_popup::{PopupBuilder, PopupStyle};
use crate::components::common::{Msg, PopupActivityMsg};
use crate::components::state::ComponentState;
use crate::error::{AppError, AppResult};
use crate::theme::PaletteHandle;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent};
use tuirealm::ratatui::layout::Rect;
use tuirealm::{AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    Error,
    Warning,
}

/// Modal popup for errors and warnings. Closes on Enter or Esc.
pub struct ErrorPopup {
    kind: PopupKind,
    message: String,
    palette: PaletteHandle,
    is_mounted: bool,
}

impl ErrorPopup {
    pub fn new(error: &AppError, palette: PaletteHandle) -> Self {
        // ErrorReporter already formats the message
        Self {
            kind: PopupKind::Error,
            message: error.to_string(),
            palette,
            is_mounted: false,
        }
    }

    pub fn warning(message: impl Into<String>, palette: PaletteHandle) -> Self {
        Self {
            kind: PopupKind::Warning,
            message: message.into(),
            palette,
            is_mounted: false,
        }
    }

    pub fn kind(&self) -> PopupKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl MockComponent for ErrorPopup {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let palette = self.palette.current();
        let (title, style) = match self.kind {
            PopupKind::Error => ("❌ Error", PopupStyle::error(&palette)),
            PopupKind::Warning => ("⚠ Warning", PopupStyle::warning(&palette)),
        };

        PopupBuilder::new(title, style)
            .add_multiline_text(self.message.as_str())
            .add_empty_line()
            .with_instructions("Press Enter or Esc to close")
            .render(frame, area);
    }

    fn query(&self, _attr: Attribute) -> Option<AttrValue> {
        None
    }

    fn attr(&mut self, _attr: Attribute, _value: AttrValue) {}

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for ErrorPopup {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Enter | Key::Esc,
                ..
            }) => Some(Msg::PopupActivity(PopupActivityMsg::CloseError)),
            _ => None,
        }
    }
}

impl ComponentState for ErrorPopup {
    fn mount(&mut self) -> AppResult<()> {
        if self.is_mounted {
            log::warn!("ErrorPopup is already mounted");
            return Ok(());
        }
        log::debug!("Mounting {:?} popup", self.kind);
        self.is_mounted = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::Theme;
    use tuirealm::event::KeyModifiers;

    fn press(code: Key) -> Event<NoUserEvent> {
        Event::Keyboard(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_closes_on_enter_and_esc_only() {
        let error = AppError::Config("bad value".to_string());
        let mut popup = ErrorPopup::new(&error, PaletteHandle::new(Theme::Light));
        assert_eq!(popup.kind(), PopupKind::Error);
        assert_eq!(popup.message(), "Configuration Error: bad value");

        assert_eq!(popup.on(press(Key::Char('x'))), None);
        assert_eq!(
            popup.on(press(Key::Enter)),
            Some(Msg::PopupActivity(PopupActivityMsg::CloseError))
        );
        assert_eq!(
            popup.on(press(Key::Esc)),
            Some(Msg::PopupActivity(PopupActivityMsg::CloseError))
        );
    }

    #[test]
    fn test_warning_keeps_message_verbatim() {
        let mut popup = ErrorPopup::warning("Unknown theme", PaletteHandle::new(Theme::Dark));
        assert!(popup.mount().is_ok());
        assert_eq!(popup.kind(), PopupKind::Warning);
        assert_eq!(popup.message(), "Unknown theme");
    }
}
