use engine::Section;
use tuirealm::props::Alignment;
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::Style;
use tuirealm::ratatui::text::{Line, Span, Text};
use tuirealm::ratatui::widgets::Paragraph;
use tuirealm::Frame;

use crate::components::common::ComponentId;
use crate::config::KeyBindingsConfig;
use crate::theme::Palette;

/// Bottom row listing the shortcuts that apply to the focused component.
pub struct HelpBar<'a> {
    keys: &'a KeyBindingsConfig,
    palette: Palette,
}

impl<'a> HelpBar<'a> {
    pub fn new(keys: &'a KeyBindingsConfig, palette: Palette) -> Self {
        Self { keys, palette }
    }

    fn get_global_shortcuts(&self) -> Vec<(String, bool)> {
        vec![
            (format!("[{}]", self.keys.theme()), true),
            (" Themes ".to_string(), false),
            (format!("[{}]", self.keys.cycle_theme()), true),
            (" Cycle theme ".to_string(), false),
            (format!("[{}]", self.keys.quit()), true),
            (" Quit".to_string(), false),
        ]
    }

    /// Keys that only act in `section`.
    fn section_shortcuts(&self, section: Section) -> Vec<(char, &'static str)> {
        let keys = self.keys;
        match section {
            Section::Performance => vec![
                (keys.next_option(), "Range"),
                (keys.alt_option(), "Metric"),
            ],
            Section::Admin => vec![(keys.next_option(), "Next tab")],
            Section::Agents => vec![
                (keys.next_option(), "Next agent"),
                (keys.toggle(), "Expand"),
            ],
            Section::Creator => vec![
                (keys.next_prompt(), "Next prompt"),
                (keys.generate(), "Generate"),
                (keys.next_option(), "Type"),
                (keys.alt_option(), "Tool"),
                (keys.toggle(), "Brand kit"),
            ],
            Section::Strategy | Section::Dashboard | Section::BrandKit | Section::Simulations => {
                vec![]
            }
        }
    }

    fn get_context_shortcuts(
        &self,
        active_component: &ComponentId,
        section: Section,
    ) -> Vec<(String, bool)> {
        match active_component {
            ComponentId::Sidebar => {
                let mut shortcuts = vec![
                    (format!("[↑/{}]", self.keys.up()), true),
                    (" Up ".to_string(), false),
                    (format!("[↓/{}]", self.keys.down()), true),
                    (" Down ".to_string(), false),
                    ("[Enter]".to_string(), true),
                    (" Open ".to_string(), false),
                    ("[1-8]".to_string(), true),
                    (" Jump ".to_string(), false),
                ];
                for (key, label) in self.section_shortcuts(section) {
                    shortcuts.push((format!("[{key}]"), true));
                    shortcuts.push((format!(" {label} "), false));
                }
                shortcuts
            }
            ComponentId::ThemePicker => vec![
                ("[↑/↓]".to_string(), true),
                (" Navigate ".to_string(), false),
                ("[Enter]".to_string(), true),
                (" Apply ".to_string(), false),
                ("[Esc]".to_string(), true),
                (" Close ".to_string(), false),
            ],
            ComponentId::ErrorPopup => vec![
                ("[Enter/Esc]".to_string(), true),
                (" Close ".to_string(), false),
            ],
            _ => vec![],
        }
    }

    /// Context shortcuts followed by the global ones. Popups swallow global
    /// keys, so they only list their own.
    pub fn get_help_text(
        &self,
        active_component: &ComponentId,
        section: Section,
    ) -> Vec<(String, bool)> {
        let mut shortcuts = self.get_context_shortcuts(active_component, section);
        if !matches!(
            active_component,
            ComponentId::ThemePicker | ComponentId::ErrorPopup
        ) {
            shortcuts.extend(self.get_global_shortcuts());
        }
        shortcuts
    }

    pub fn view_with_active(
        &self,
        frame: &mut Frame,
        area: Rect,
        active_component: &ComponentId,
        section: Section,
    ) {
        let help_text = self.get_help_text(active_component, section);
        let mut spans: Vec<Span> = Vec::new();

        for (i, (text, highlight)) in help_text.into_iter().enumerate() {
            if i > 0 && i % 2 == 0 {
                spans.push(Span::styled(
                    " | ",
                    Style::default().fg(self.palette.border),
                ));
            }

            if highlight {
                spans.push(Span::styled(text, Style::default().fg(self.palette.accent)));
            } else {
                spans.push(Span::raw(text));
            }
        }

        let paragraph = Paragraph::new(Text::from(Line::from(spans)))
            .style(
                Style::default()
                    .fg(self.palette.text_secondary)
                    .bg(self.palette.card_background),
            )
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::Theme;

    fn labels(text: &[(String, bool)]) -> Vec<&str> {
        text.iter().map(|(label, _)| label.as_str()).collect()
    }

    #[test]
    fn test_creator_adds_generation_shortcuts() {
        let keys = KeyBindingsConfig::default();
        let bar = HelpBar::new(&keys, Palette::for_theme(Theme::Light));

        let creator = bar.get_help_text(&ComponentId::Sidebar, Section::Creator);
        assert!(labels(&creator).contains(&"[g]"));
        assert!(labels(&creator).contains(&"[p]"));

        let dashboard = bar.get_help_text(&ComponentId::Sidebar, Section::Dashboard);
        assert!(!labels(&dashboard).contains(&"[g]"));
        assert!(labels(&dashboard).contains(&"[q]"));
    }

    #[test]
    fn test_view_control_keys_follow_the_section() {
        let keys = KeyBindingsConfig::default();
        let bar = HelpBar::new(&keys, Palette::for_theme(Theme::Light));

        let performance = bar.get_help_text(&ComponentId::Sidebar, Section::Performance);
        assert!(labels(&performance).contains(&"[n]"));
        assert!(labels(&performance).contains(&" Range "));
        assert!(labels(&performance).contains(&"[m]"));
        assert!(labels(&performance).contains(&" Metric "));

        let admin = bar.get_help_text(&ComponentId::Sidebar, Section::Admin);
        assert!(labels(&admin).contains(&" Next tab "));
        assert!(!labels(&admin).contains(&"[m]"));

        let strategy = bar.get_help_text(&ComponentId::Sidebar, Section::Strategy);
        assert!(!labels(&strategy).contains(&"[n]"));
    }

    #[test]
    fn test_popups_hide_global_shortcuts() {
        let keys = KeyBindingsConfig::default();
        let bar = HelpBar::new(&keys, Palette::for_theme(Theme::Dark));
        let text = bar.get_help_text(&ComponentId::ErrorPopup, Section::Dashboard);
        assert_eq!(labels(&text), vec!["[Enter/Esc]", " Close "]);
    }

    #[test]
    fn test_shortcuts_come_in_pairs() {
        let keys = KeyBindingsConfig::default();
        let bar = HelpBar::new(&keys, Palette::for_theme(Theme::Neon));
        for section in Section::ALL {
            let text = bar.get_help_text(&ComponentId::Sidebar, section);
            assert_eq!(text.len() % 2, 0);
            assert!(text.iter().step_by(2).all(|(_, highlight)| *highlight));
        }
    }
}
