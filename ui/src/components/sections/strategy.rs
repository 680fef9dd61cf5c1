use super::{badge, header, list_card, muted, plain, progress_bar};
use crate::theme::Palette;
use engine::catalog::strategy::{CHANNEL_MIX, OBJECTIVES, SEGMENTS};
use tuirealm::props::Style;
use tuirealm::ratatui::Frame;
use tuirealm::ratatui::layout::{Constraint, Layout, Rect};
use tuirealm::ratatui::text::{Line, Span};

const BAR_WIDTH: usize = 16;

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette) {
    let body = header(
        frame,
        area,
        "Strategy Studio",
        "Plan objectives, audiences and channel budgets",
        palette,
    );

    let [objectives, lower] =
        Layout::vertical([Constraint::Length(11), Constraint::Min(6)]).areas(body);
    let [segments, channels] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(lower);

    list_card(frame, objectives, "Objectives", objective_lines(palette), palette);
    list_card(
        frame,
        segments,
        "Audience Segments",
        segment_lines(palette),
        palette,
    );
    list_card(frame, channels, "Channel Mix", channel_lines(palette), palette);
}

fn objective_lines(palette: &Palette) -> Vec<Line<'static>> {
    OBJECTIVES
        .iter()
        .flat_map(|objective| {
            [
                Line::from(vec![
                    plain(objective.name, palette),
                    Span::raw(" "),
                    badge(objective.status.label(), objective.status.tone(), palette),
                ]),
                Line::from(muted(format!("  Target: {}", objective.target), palette)),
                Line::from(vec![
                    Span::styled(
                        format!("  {}", progress_bar(objective.progress_percent, BAR_WIDTH)),
                        Style::default().fg(palette.tone(objective.status.tone())),
                    ),
                    muted(format!(" {}%", objective.progress_percent), palette),
                ]),
            ]
        })
        .collect()
}

fn segment_lines(palette: &Palette) -> Vec<Line<'static>> {
    SEGMENTS
        .iter()
        .map(|segment| {
            Line::from(vec![
                plain(format!("{:<22}", segment.name), palette),
                muted(format!("{:>6}  intent: {}", segment.size, segment.intent), palette),
            ])
        })
        .collect()
}

fn channel_lines(palette: &Palette) -> Vec<Line<'static>> {
    CHANNEL_MIX
        .iter()
        .map(|allocation| {
            Line::from(vec![
                plain(format!("{:<9}", allocation.channel), palette),
                Span::styled(
                    progress_bar(allocation.share_percent, BAR_WIDTH),
                    Style::default().fg(palette.accent),
                ),
                muted(format!(" {:>3}%", allocation.share_percent), palette),
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
    fn test_renders_objectives_and_channels() {
        let palette = Palette::for_theme(Theme::Dark);
        let text = render_to_text(120, 30, |f| render(f, f.area(), &palette));
        assert!(text.contains("Strategy Studio"));
        assert!(text.contains("Grow Q1 revenue"));
        assert!(text.contains("[at risk]"));
        assert!(text.contains("Outdoor Enthusiasts"));
        assert!(text.contains("40%"));
    }
}
