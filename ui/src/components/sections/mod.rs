//! Renderers for the eight content sections.
//!
//! Each submodule exposes a `render` function drawing static catalog data
//! into the content area. Status fields carry a [`Tone`] and are coloured
//! through [`Palette::tone`].

pub mod admin;
pub mod agents;
pub mod brand_kit;
pub mod creator;
pub mod dashboard;
pub mod performance;
pub mod simulations;
pub mod strategy;

use crate::theme::Palette;
use engine::catalog::{Metric, Tone};
use tuirealm::props::{Style, TextModifiers};
use tuirealm::ratatui::Frame;
use tuirealm::ratatui::layout::{Constraint, Layout, Rect};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

/// Rounded card with a bold title.
pub(crate) fn card(title: &str, palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.card_background))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(palette.text)
                .add_modifier(TextModifiers::BOLD),
        ))
}

/// Coloured status label, e.g. `[running]`.
pub(crate) fn badge(label: &str, tone: Tone, palette: &Palette) -> Span<'static> {
    Span::styled(
        format!("[{label}]"),
        Style::default()
            .fg(palette.tone(tone))
            .add_modifier(TextModifiers::BOLD),
    )
}

pub(crate) fn muted(text: impl Into<String>, palette: &Palette) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(palette.text_secondary))
}

pub(crate) fn plain(text: impl Into<String>, palette: &Palette) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(palette.text))
}

/// Row of options with the selected one highlighted.
pub(crate) fn selector<'a>(
    options: impl IntoIterator<Item = &'a str>,
    selected: &str,
    palette: &Palette,
) -> Vec<Span<'static>> {
    options
        .into_iter()
        .map(|option| {
            if option == selected {
                Span::styled(
                    format!(" {option} "),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(TextModifiers::BOLD | TextModifiers::REVERSED),
                )
            } else {
                muted(format!(" {option} "), palette)
            }
        })
        .collect()
}

/// Text bar of `width` cells filled to `percent`.
pub(crate) fn progress_bar(percent: u16, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Section title and subtitle; returns the remaining area below them.
pub(crate) fn header(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    subtitle: &str,
    palette: &Palette,
) -> Rect {
    let [top, rest] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(TextModifiers::BOLD),
        )),
        Line::from(muted(subtitle, palette)),
    ];
    frame.render_widget(Paragraph::new(lines), top);
    rest
}

/// Row of equal-width metric cards.
pub(crate) fn metric_cards(frame: &mut Frame, area: Rect, metrics: &[Metric], palette: &Palette) {
    if metrics.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, metrics.len() as u32); metrics.len()];
    let cells = Layout::horizontal(constraints).split(area);
    for (metric, cell) in metrics.iter().zip(cells.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                metric.value,
                Style::default()
                    .fg(palette.text)
                    .add_modifier(TextModifiers::BOLD),
            )),
            Line::from(Span::styled(
                metric.change,
                Style::default().fg(palette.tone(metric.tone())),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(card(metric.title, palette)),
            *cell,
        );
    }
}

/// Card holding a list of pre-built lines.
pub(crate) fn list_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    palette: &Palette,
) {
    frame.render_widget(
        Paragraph::new(lines)
            .block(card(title, palette))
            .wrap(Wrap { trim: false }),
        area,
    );
}

#[cfg(test)]
pub(crate) mod test_support {
    use tuirealm::ratatui::Terminal;
    use tuirealm::ratatui::backend::TestBackend;
    use tuirealm::ratatui::Frame;

    /// Draw into an off-screen buffer and return its text, one row per line.
    pub fn render_to_text<F>(width: u16, height: u16, draw: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        let mut terminal = Terminal::new(TestBackend::new(width, height))
            .expect("test backend never fails");
        terminal.draw(draw).expect("drawing to test backend");
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }
}
