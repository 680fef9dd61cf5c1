use crate::components::common::{Msg, NavigationActivityMsg};
use crate::components::state::ComponentState;
use crate::config::KeyBindingsConfig;
use crate::error::AppResult;
use crate::theme::{Palette, PaletteHandle};
use engine::{Section, Theme};
use tuirealm::command::{Cmd, CmdResult, Direction};
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::props::{Alignment, Style, TextModifiers};
use tuirealm::ratatui::layout::{Constraint, Layout, Rect};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

/// Fixed width of the navigation rail.
pub const SIDEBAR_WIDTH: u16 = 30;

const CMD_RESULT_SECTION_SELECTED: &str = "SectionSelected";

/// Left navigation rail: module header, the eight sections, the theme row and
/// the brand profile card.
pub struct Sidebar {
    cursor: usize,
    active: Section,
    palette: PaletteHandle,
    keys: KeyBindingsConfig,
}

impl Sidebar {
    pub fn new(active: Section, palette: PaletteHandle, keys: KeyBindingsConfig) -> Self {
        Self {
            cursor: active.index(),
            active,
            palette,
            keys,
        }
    }

    pub fn cursor(&self) -> Section {
        Section::from_index(self.cursor).unwrap_or_default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    fn select(&mut self, section: Section) -> CmdResult {
        self.cursor = section.index();
        self.active = section;
        CmdResult::Custom(
            CMD_RESULT_SECTION_SELECTED,
            State::One(StateValue::String(section.id().to_string())),
        )
    }

    fn header_lines(palette: &Palette) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                "Builder Module",
                Style::default().fg(palette.text_secondary),
            )),
            Line::from(Span::styled(
                "Campaign Orchestrator",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(TextModifiers::BOLD),
            )),
        ]
    }

    fn section_lines(&self, palette: &Palette) -> Vec<Line<'static>> {
        Section::ALL
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let pointer = if i == self.cursor { "›" } else { " " };
                let text = format!("{pointer} {} {}. {}", section.icon(), i + 1, section.label());
                let style = if *section == self.active {
                    Style::default()
                        .fg(palette.text)
                        .bg(palette.gradient)
                        .add_modifier(TextModifiers::BOLD)
                } else if i == self.cursor {
                    Style::default().fg(palette.text).bg(palette.hover)
                } else {
                    Style::default().fg(palette.text_secondary)
                };
                Line::from(Span::styled(text, style))
            })
            .collect()
    }

    fn theme_lines(palette: &Palette) -> Vec<Line<'static>> {
        let mut spans = Vec::with_capacity(Theme::ALL.len());
        for theme in Theme::ALL {
            let style = if theme == palette.theme {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(TextModifiers::BOLD | TextModifiers::REVERSED)
            } else {
                Style::default().fg(palette.text_secondary)
            };
            spans.push(Span::styled(format!(" {} ", theme.icon()), style));
        }
        vec![
            Line::from(Span::styled(
                format!("Theme: {}", palette.theme.label()),
                Style::default().fg(palette.text_secondary),
            )),
            Line::from(spans),
        ]
    }

    fn brand_lines(palette: &Palette) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                "Brand Profile",
                Style::default().fg(palette.text_secondary),
            )),
            Line::from(Span::styled(
                "Premium",
                Style::default()
                    .fg(palette.text)
                    .add_modifier(TextModifiers::BOLD),
            )),
        ]
    }
}

impl MockComponent for Sidebar {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let palette = self.palette.current();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.card_background));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(Section::ALL.len() as u16 + 1),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(inner);

        frame.render_widget(Paragraph::new(Self::header_lines(&palette)), chunks[0]);
        frame.render_widget(Paragraph::new(self.section_lines(&palette)), chunks[1]);
        frame.render_widget(
            Paragraph::new(Self::theme_lines(&palette)).alignment(Alignment::Left),
            chunks[3],
        );

        let card = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.shadow));
        frame.render_widget(
            Paragraph::new(Self::brand_lines(&palette)).block(card),
            chunks[4],
        );
    }

    fn query(&self, _attr: Attribute) -> Option<AttrValue> {
        None
    }

    fn attr(&mut self, _attr: Attribute, _value: AttrValue) {}

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.cursor))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                CmdResult::Changed(self.state())
            }
            Cmd::Move(Direction::Down) => {
                if self.cursor + 1 < Section::ALL.len() {
                    self.cursor += 1;
                }
                CmdResult::Changed(self.state())
            }
            Cmd::Submit => self.select(self.cursor()),
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, NoUserEvent> for Sidebar {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let cmd_result = match ev {
            Event::Keyboard(KeyEvent { code: Key::Up, .. }) => {
                self.perform(Cmd::Move(Direction::Up))
            }
            Event::Keyboard(KeyEvent {
                code: Key::Down, ..
            }) => self.perform(Cmd::Move(Direction::Down)),
            Event::Keyboard(KeyEvent {
                code: Key::Enter, ..
            }) => self.perform(Cmd::Submit),
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers,
            }) if modifiers == KeyModifiers::NONE => {
                if c == self.keys.up() {
                    self.perform(Cmd::Move(Direction::Up))
                } else if c == self.keys.down() {
                    self.perform(Cmd::Move(Direction::Down))
                } else if let Some(section) = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(Section::from_index)
                {
                    self.select(section)
                } else {
                    CmdResult::None
                }
            }
            _ => CmdResult::None,
        };

        match cmd_result {
            CmdResult::Custom(CMD_RESULT_SECTION_SELECTED, _) => Some(Msg::NavigationActivity(
                NavigationActivityMsg::SectionSelected(self.active),
            )),
            CmdResult::Changed(_) => Some(Msg::ForceRedraw),
            _ => None,
        }
    }
}

impl ComponentState for Sidebar {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!("Mounting sidebar on '{}'", self.active);
        self.cursor = self.active.index();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: Key) -> Event<NoUserEvent> {
        Event::Keyboard(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn sidebar(active: Section) -> Sidebar {
        let mut sidebar = Sidebar::new(
            active,
            PaletteHandle::new(Theme::Light),
            KeyBindingsConfig::default(),
        );
        assert!(sidebar.mount().is_ok());
        sidebar
    }

    #[test]
    fn test_cursor_starts_on_active_section() {
        let sidebar = sidebar(Section::Creator);
        assert_eq!(sidebar.cursor(), Section::Creator);
    }

    #[test]
    fn test_moving_does_not_select() {
        let mut sidebar = sidebar(Section::Dashboard);
        assert_eq!(sidebar.on(press(Key::Down)), Some(Msg::ForceRedraw));
        assert_eq!(sidebar.on(press(Key::Char('j'))), Some(Msg::ForceRedraw));
        assert_eq!(sidebar.cursor(), Section::BrandKit);
        assert_eq!(sidebar.active(), Section::Dashboard);
    }

    #[test]
    fn test_enter_selects_cursor() {
        let mut sidebar = sidebar(Section::Dashboard);
        sidebar.on(press(Key::Char('k')));
        assert_eq!(
            sidebar.on(press(Key::Enter)),
            Some(Msg::NavigationActivity(
                NavigationActivityMsg::SectionSelected(Section::Strategy)
            ))
        );
        assert_eq!(sidebar.active(), Section::Strategy);
    }

    #[test]
    fn test_digits_jump_directly() {
        let mut sidebar = sidebar(Section::Dashboard);
        assert_eq!(
            sidebar.on(press(Key::Char('8'))),
            Some(Msg::NavigationActivity(
                NavigationActivityMsg::SectionSelected(Section::Admin)
            ))
        );
        assert_eq!(sidebar.cursor(), Section::Admin);
        assert_eq!(sidebar.on(press(Key::Char('0'))), None);
        assert_eq!(sidebar.on(press(Key::Char('9'))), None);
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut sidebar = sidebar(Section::Strategy);
        sidebar.on(press(Key::Up));
        assert_eq!(sidebar.cursor(), Section::Strategy);
        for _ in 0..20 {
            sidebar.on(press(Key::Down));
        }
        assert_eq!(sidebar.cursor(), Section::Admin);
    }
}
