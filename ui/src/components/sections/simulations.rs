use super::{badge, card, header, list_card, muted, plain};
use crate::theme::Palette;
use engine::catalog::simulations::{ASSUMPTIONS, SCENARIOS};
use tuirealm::props::{Style, TextModifiers};
use tuirealm::ratatui::Frame;
use tuirealm::ratatui::layout::{Constraint, Layout, Rect};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Cell, Row, Table};

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette) {
    let body = header(
        frame,
        area,
        "Simulations",
        "Compare budget scenarios before committing spend",
        palette,
    );

    let [scenarios, assumptions] =
        Layout::vertical([Constraint::Length(8), Constraint::Min(5)]).areas(body);

    let heading = Row::new(["Scenario", "Budget", "Reach", "ROAS", "Confidence"]).style(
        Style::default()
            .fg(palette.text_secondary)
            .add_modifier(TextModifiers::BOLD),
    );
    let rows = SCENARIOS.iter().map(|scenario| {
        Row::new(vec![
            Cell::from(plain(scenario.name, palette)),
            Cell::from(plain(scenario.budget, palette)),
            Cell::from(plain(scenario.projected_reach, palette)),
            Cell::from(plain(scenario.projected_roas, palette)),
            Cell::from(badge(
                scenario.confidence.label(),
                scenario.confidence.tone(),
                palette,
            )),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Min(18),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(12),
        ],
    )
    .header(heading)
    .block(card("Scenarios", palette));
    frame.render_widget(table, scenarios);

    let lines = ASSUMPTIONS
        .iter()
        .map(|assumption| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(palette.info)),
                muted(*assumption, palette),
            ])
        })
        .collect();
    list_card(frame, assumptions, "Assumptions", lines, palette);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sections::test_support::render_to_text;
    use engine::Theme;

    #[test]
    fn test_renders_scenarios() {
        let palette = Palette::for_theme(Theme::Dark);
        let text = render_to_text(100, 25, |f| render(f, f.area(), &palette));
        assert!(text.contains("Aggressive scale"));
        assert!(text.contains("4.1x"));
        assert!(text.contains("[medium]"));
        assert!(text.contains("Creative fatigue"));
    }
}
