use crate::components::base_popup::{PopupBuilder, PopupStyle};
use crate::components::common::{Msg, ThemeActivityMsg};
use crate::components::state::ComponentState;
use crate::config::KeyBindingsConfig;
use crate::error::AppResult;
use crate::theme::PaletteHandle;
use engine::Theme;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent};
use tuirealm::props::{Alignment, Style, TextModifiers};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::widgets::{List, ListItem, ListState, Paragraph};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

const CMD_RESULT_THEME_SELECTED: &str = "ThemeSelected";
const CMD_RESULT_CLOSE_PICKER: &str = "ClosePicker";

/// Popup listing the four themes.
///
/// # Navigation
///
/// - **↑/↓** and the configured up/down keys move the cursor
/// - **Enter** applies the highlighted theme
/// - **Esc** closes without changes
pub struct ThemePicker {
    selected: usize,
    current: Theme,
    palette: PaletteHandle,
    keys: KeyBindingsConfig,
}

impl ThemePicker {
    pub fn new(current: Theme, palette: PaletteHandle, keys: KeyBindingsConfig) -> Self {
        Self {
            selected: 0,
            current,
            palette,
            keys,
        }
    }

    pub fn highlighted(&self) -> Theme {
        Theme::ALL[self.selected.min(Theme::ALL.len() - 1)]
    }

    fn move_up(&mut self) -> CmdResult {
        self.selected = self.selected.saturating_sub(1);
        CmdResult::Changed(State::One(StateValue::Usize(self.selected)))
    }

    fn move_down(&mut self) -> CmdResult {
        if self.selected + 1 < Theme::ALL.len() {
            self.selected += 1;
        }
        CmdResult::Changed(State::One(StateValue::Usize(self.selected)))
    }
}

impl MockComponent for ThemePicker {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let palette = self.palette.current();

        let items: Vec<ListItem> = Theme::ALL
            .iter()
            .map(|theme| {
                let marker = if *theme == self.current { " (active)" } else { "" };
                ListItem::new(format!("{} {}{marker}", theme.icon(), theme.label()))
                    .style(Style::default().fg(palette.text))
            })
            .collect();

        let block = PopupBuilder::new("🎨 Select Theme", PopupStyle::from_palette(&palette))
            .create_block();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(palette.text)
                    .bg(palette.hover)
                    .add_modifier(TextModifiers::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut list_state);

        if area.height > 2 {
            let instruction_area = Rect {
                x: area.x + 1,
                y: area.y + area.height - 2,
                width: area.width.saturating_sub(2),
                height: 1,
            };
            let instructions = format!(
                "↑/↓/{}/{}: Navigate, Enter: Apply, Esc: Close",
                self.keys.down(),
                self.keys.up()
            );
            frame.render_widget(
                Paragraph::new(instructions)
                    .style(Style::default().fg(palette.text_secondary))
                    .alignment(Alignment::Center),
                instruction_area,
            );
        }
    }

    fn query(&self, _attr: Attribute) -> Option<AttrValue> {
        None
    }

    fn attr(&mut self, _attr: Attribute, _value: AttrValue) {}

    fn state(&self) -> State {
        State::One(StateValue::String(self.highlighted().id().to_string()))
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for ThemePicker {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let cmd_result = match ev {
            Event::Keyboard(KeyEvent { code: Key::Up, .. }) => self.move_up(),
            Event::Keyboard(KeyEvent {
                code: Key::Down, ..
            }) => self.move_down(),
            Event::Keyboard(KeyEvent {
                code: Key::Enter, ..
            }) => CmdResult::Custom(CMD_RESULT_THEME_SELECTED, self.state()),
            Event::Keyboard(KeyEvent { code: Key::Esc, .. }) => {
                CmdResult::Custom(CMD_RESULT_CLOSE_PICKER, State::None)
            }
            Event::Keyboard(KeyEvent {
                code: Key::Char(c), ..
            }) => {
                if c == self.keys.up() {
                    self.move_up()
                } else if c == self.keys.down() {
                    self.move_down()
                } else {
                    CmdResult::None
                }
            }
            _ => return None,
        };

        match cmd_result {
            CmdResult::Custom(CMD_RESULT_THEME_SELECTED, _) => Some(Msg::ThemeActivity(
                ThemeActivityMsg::ThemeSelected(self.highlighted()),
            )),
            CmdResult::Custom(CMD_RESULT_CLOSE_PICKER, _) => {
                Some(Msg::ThemeActivity(ThemeActivityMsg::ThemePickerClosed))
            }
            CmdResult::None => None,
            _ => Some(Msg::ForceRedraw),
        }
    }
}

impl ComponentState for ThemePicker {
    fn mount(&mut self) -> AppResult<()> {
        // Start on the active theme
        self.selected = Theme::ALL
            .iter()
            .position(|theme| *theme == self.current)
            .unwrap_or(0);
        Ok(())
    }
}
