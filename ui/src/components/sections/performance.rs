use super::{badge, card, header, list_card, metric_cards, muted, plain, selector};
use crate::theme::Palette;
use engine::catalog::performance::{CAMPAIGNS, KEY_METRICS};
use engine::controls::{ChartMetric, PerformanceControls, TimeRange};
use tuirealm::props::{Style, TextModifiers};
use tuirealm::ratatui::Frame;
use tuirealm::ratatui::layout::{Constraint, Layout, Rect};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Cell, Row, Table};

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette, controls: &PerformanceControls) {
    let body = header(
        frame,
        area,
        "Performance Cockpit",
        "Real-time results across every running campaign",
        palette,
    );

    let [first_row, second_row, chart, table] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(5),
        Constraint::Min(6),
    ])
    .areas(body);

    let (first, second) = KEY_METRICS.split_at(3);
    metric_cards(frame, first_row, first, palette);
    metric_cards(frame, second_row, second, palette);

    list_card(frame, chart, "Trend", chart_lines(controls, palette), palette);
    render_campaign_table(frame, table, palette);
}

fn chart_lines(controls: &PerformanceControls, palette: &Palette) -> Vec<Line<'static>> {
    let mut range = vec![muted("Range:  ", palette)];
    range.extend(selector(
        TimeRange::ALL.map(TimeRange::label),
        controls.range.label(),
        palette,
    ));

    let mut metric = vec![muted("Metric: ", palette)];
    metric.extend(selector(
        ChartMetric::ALL.map(ChartMetric::label),
        controls.metric.label(),
        palette,
    ));

    vec![
        Line::from(range),
        Line::from(metric),
        Line::from(Span::styled(
            controls.chart_caption(),
            Style::default().fg(palette.text),
        )),
    ]
}

fn render_campaign_table(frame: &mut Frame, area: Rect, palette: &Palette) {
    let heading = Row::new([
        "Campaign",
        "Status",
        "Impr.",
        "Clicks",
        "Conv.",
        "Spend",
        "ROAS",
        "Grade",
    ])
    .style(
        Style::default()
            .fg(palette.text_secondary)
            .add_modifier(TextModifiers::BOLD),
    );

    let rows = CAMPAIGNS.iter().map(|row| {
        Row::new(vec![
            Cell::from(plain(row.name, palette)),
            Cell::from(badge(row.state.label(), row.state.tone(), palette)),
            Cell::from(plain(row.impressions, palette)),
            Cell::from(plain(row.clicks, palette)),
            Cell::from(plain(row.conversions, palette)),
            Cell::from(plain(row.spend, palette)),
            Cell::from(plain(row.roas, palette)),
            Cell::from(badge(row.performance.label(), row.performance.tone(), palette)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(8),
            Constraint::Length(5),
            Constraint::Length(12),
        ],
    )
    .header(heading)
    .block(card("Campaigns", palette));
    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sections::test_support::render_to_text;
    use engine::Theme;

    #[test]
    fn test_renders_all_six_metrics() {
        let palette = Palette::for_theme(Theme::Neon);
        let controls = PerformanceControls::default();
        let text = render_to_text(140, 32, |f| render(f, f.area(), &palette, &controls));
        for metric in KEY_METRICS {
            assert!(text.contains(metric.title), "missing {}", metric.title);
        }
        assert!(text.contains("-$0.08"));
        assert!(text.contains("Product Launch"));
        assert!(text.contains("[completed]"));
        assert!(text.contains("Displaying impressions for 30d"));
    }

    #[test]
    fn test_caption_follows_range_and_metric() {
        let palette = Palette::for_theme(Theme::Light);
        let controls = PerformanceControls {
            range: TimeRange::Quarter,
            metric: ChartMetric::Spend,
        };
        let text = render_to_text(140, 32, |f| render(f, f.area(), &palette, &controls));
        assert!(text.contains("Displaying spend for 90d"));
        assert!(!text.contains("Displaying impressions"));
    }
}
