use super::{header, list_card, muted, plain};
use crate::theme::{Palette, hex_to_color};
use engine::catalog::brand_kit::{KIT_NAME, SWATCHES, TYPOGRAPHY, VOICE_GUIDELINES};
use engine::catalog::creator::BRAND_ASSETS;
use tuirealm::props::Style;
use tuirealm::ratatui::Frame;
use tuirealm::ratatui::layout::{Constraint, Layout, Rect};
use tuirealm::ratatui::text::{Line, Span};

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette) {
    let body = header(
        frame,
        area,
        "Brand Kit",
        &format!("{KIT_NAME} · colours, type and voice"),
        palette,
    );

    let [top, bottom] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);
    let [swatches, typography] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(top);
    let [voice, assets] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(bottom);

    list_card(frame, swatches, "Palette", swatch_lines(palette), palette);
    list_card(frame, typography, "Typography", type_lines(palette), palette);
    list_card(frame, voice, "Voice Guidelines", voice_lines(palette), palette);
    list_card(frame, assets, "Assets", asset_lines(palette), palette);
}

fn swatch_lines(palette: &Palette) -> Vec<Line<'static>> {
    SWATCHES
        .iter()
        .map(|swatch| {
            Line::from(vec![
                Span::styled("████ ", Style::default().fg(hex_to_color(swatch.hex))),
                plain(format!("{:<10}", swatch.name), palette),
                muted(swatch.hex, palette),
            ])
        })
        .collect()
}

fn type_lines(palette: &Palette) -> Vec<Line<'static>> {
    TYPOGRAPHY
        .iter()
        .map(|style| {
            Line::from(vec![
                plain(format!("{:<9}", style.role), palette),
                muted(format!("{} {}", style.family, style.weight), palette),
            ])
        })
        .collect()
}

fn voice_lines(palette: &Palette) -> Vec<Line<'static>> {
    VOICE_GUIDELINES
        .iter()
        .map(|rule| Line::from(vec![muted("• ", palette), plain(*rule, palette)]))
        .collect()
}

fn asset_lines(palette: &Palette) -> Vec<Line<'static>> {
    BRAND_ASSETS
        .iter()
        .map(|asset| {
            Line::from(vec![
                plain(format!("{:<16}", asset.name), palette),
                muted(asset.kind, palette),
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
    fn test_renders_kit() {
        let palette = Palette::for_theme(Theme::Minimal);
        let text = render_to_text(120, 30, |f| render(f, f.area(), &palette));
        assert!(text.contains("Premium Collection"));
        assert!(text.contains("#8b5cf6"));
        assert!(text.contains("JetBrains Mono"));
        assert!(text.contains("Primary Logo"));
    }
}
