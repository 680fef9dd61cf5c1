use super::{badge, header, list_card, metric_cards, muted, plain};
use crate::theme::Palette;
use engine::catalog::dashboard::{
    CHART_RANGES, DEFAULT_CHART_RANGE, INSIGHTS, METRICS, RECENT_CAMPAIGNS,
};
use tuirealm::props::{Style, TextModifiers};
use tuirealm::ratatui::Frame;
use tuirealm::ratatui::layout::{Constraint, Layout, Rect};
use tuirealm::ratatui::text::{Line, Span};

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette) {
    let body = header(
        frame,
        area,
        "Campaign Dashboard",
        "Monitor and optimize your marketing campaigns",
        palette,
    );

    let [metrics, middle, insights] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(8),
        Constraint::Length(5),
    ])
    .areas(body);

    metric_cards(frame, metrics, &METRICS, palette);

    let [overview, recent] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(middle);
    list_card(
        frame,
        overview,
        "Performance Overview",
        overview_lines(palette),
        palette,
    );
    list_card(
        frame,
        recent,
        "Recent Campaigns",
        recent_campaign_lines(palette),
        palette,
    );
    list_card(
        frame,
        insights,
        "Knowledge Graph Insights",
        insight_lines(palette),
        palette,
    );
}

fn overview_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut ranges = Vec::with_capacity(CHART_RANGES.len() * 2);
    for range in CHART_RANGES {
        let style = if range == DEFAULT_CHART_RANGE {
            Style::default()
                .fg(palette.accent)
                .add_modifier(TextModifiers::BOLD | TextModifiers::REVERSED)
        } else {
            Style::default().fg(palette.text_secondary)
        };
        ranges.push(Span::styled(format!(" {range} "), style));
        ranges.push(Span::raw(" "));
    }
    vec![
        Line::from(ranges),
        Line::from(""),
        Line::from(muted("Chart visualization would go here", palette)),
    ]
}

fn recent_campaign_lines(palette: &Palette) -> Vec<Line<'static>> {
    RECENT_CAMPAIGNS
        .iter()
        .flat_map(|campaign| {
            [
                Line::from(vec![
                    plain(campaign.name, palette),
                    Span::raw(" "),
                    badge(campaign.status.label(), campaign.status.tone(), palette),
                ]),
                Line::from(vec![
                    muted(format!("  {} spend  ", campaign.spend), palette),
                    badge(
                        campaign.performance.label(),
                        campaign.performance.tone(),
                        palette,
                    ),
                ]),
            ]
        })
        .collect()
}

fn insight_lines(palette: &Palette) -> Vec<Line<'static>> {
    INSIGHTS
        .iter()
        .map(|insight| {
            Line::from(vec![
                Span::styled("● ", Style::default().fg(palette.info)),
                plain(insight.title, palette),
                muted(format!(" · {}", insight.detail), palette),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sections::test_support::render_to_text;
    use engine::Theme;

    #[test]
    fn test_renders_cards_and_campaigns() {
        let palette = Palette::for_theme(Theme::Light);
        let text = render_to_text(140, 40, |f| render(f, f.area(), &palette));
        assert!(text.contains("Campaign Dashboard"));
        assert!(text.contains("Active Campaigns"));
        assert!(text.contains("Holiday Sale 2024"));
        assert!(text.contains("[running]"));
        assert!(text.contains("Knowledge Graph Insights"));
    }
}
