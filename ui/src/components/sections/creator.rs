use super::{badge, header, list_card, muted, plain, selector};
use crate::theme::Palette;
use engine::catalog::creator::{
    BRAND_ASSETS, BRAND_KITS, CreativeKind, FORMAT_STYLES, GENERATED, LOGO_PLACEMENTS, TEMPLATES,
    TOOLS,
};
use engine::controls::CreatorControls;
use engine::generation::GenerationFlow;
use tuirealm::props::{Style, TextModifiers};
use tuirealm::ratatui::Frame;
use tuirealm::ratatui::layout::{Constraint, Layout, Rect};
use tuirealm::ratatui::text::{Line, Span};

/// What the creator view needs from the generation flow at mount time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatorSnapshot {
    pub prompt: String,
    pub generating: bool,
    pub completed: u32,
}

impl CreatorSnapshot {
    pub fn from_flow(flow: &GenerationFlow) -> Self {
        Self {
            prompt: flow.prompt().to_string(),
            generating: flow.is_generating(),
            completed: flow.completed(),
        }
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    snapshot: &CreatorSnapshot,
    controls: &CreatorControls,
) {
    let body = header(
        frame,
        area,
        "Creator Studio",
        "Generate ads, video and copy with your brand kit",
        palette,
    );

    let [prompt, kinds, lower] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Length(3),
        Constraint::Min(8),
    ])
    .areas(body);

    list_card(
        frame,
        prompt,
        "Prompt",
        prompt_lines(snapshot, controls, palette),
        palette,
    );
    list_card(
        frame,
        kinds,
        "Creative Types",
        kind_lines(controls.kind, palette),
        palette,
    );

    let [templates, generated, assets] = Layout::horizontal([
        Constraint::Percentage(36),
        Constraint::Percentage(32),
        Constraint::Percentage(32),
    ])
    .areas(lower);

    list_card(frame, templates, "Templates", template_lines(palette), palette);
    list_card(
        frame,
        generated,
        "Generated Creatives",
        generated_lines(snapshot, palette),
        palette,
    );
    if controls.show_brand_kit {
        list_card(frame, assets, "Brand Kit", brand_kit_lines(palette), palette);
    } else {
        list_card(frame, assets, "Brand Assets", asset_lines(palette), palette);
    }
}

fn prompt_lines(
    snapshot: &CreatorSnapshot,
    controls: &CreatorControls,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let prompt = if snapshot.prompt.is_empty() {
        muted("(empty, press p for a preset)", palette)
    } else {
        plain(snapshot.prompt.clone(), palette)
    };

    let status = if snapshot.generating {
        Span::styled(
            "⟳ Generating...",
            Style::default()
                .fg(palette.caution)
                .add_modifier(TextModifiers::BOLD),
        )
    } else if snapshot.prompt.is_empty() {
        muted("Generate (needs a prompt)", palette)
    } else {
        Span::styled(
            "✦ Generate (g)",
            Style::default()
                .fg(palette.accent)
                .add_modifier(TextModifiers::BOLD),
        )
    };

    vec![
        Line::from(vec![muted("› ", palette), prompt]),
        Line::from(""),
        Line::from(vec![
            status,
            muted(format!("   Completed this session: {}", snapshot.completed), palette),
        ]),
        Line::from(muted(
            format!(
                "Tool: {} ({} of {})  ·  Kit: {}  ·  Logo: {}  ·  Style: {}",
                controls.tool(),
                controls.tool_index() + 1,
                TOOLS.len(),
                BRAND_KITS[0],
                LOGO_PLACEMENTS[0],
                FORMAT_STYLES[0],
            ),
            palette,
        )),
    ]
}

fn kind_lines(kind: CreativeKind, palette: &Palette) -> Vec<Line<'static>> {
    vec![Line::from(selector(
        CreativeKind::ALL.map(CreativeKind::label),
        kind.label(),
        palette,
    ))]
}

fn template_lines(palette: &Palette) -> Vec<Line<'static>> {
    TEMPLATES
        .iter()
        .flat_map(|template| {
            [
                Line::from(plain(template.name, palette)),
                Line::from(vec![
                    muted(format!("  {} ", template.kind.label()), palette),
                    badge(template.rating.label(), template.rating.tone(), palette),
                ]),
            ]
        })
        .collect()
}

fn generated_lines(snapshot: &CreatorSnapshot, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = GENERATED
        .iter()
        .map(|creative| {
            Line::from(vec![
                plain(creative.name, palette),
                Span::raw(" "),
                badge(creative.status.label(), creative.status.tone(), palette),
                muted(format!(" ×{}", creative.variations), palette),
            ])
        })
        .collect();
    if snapshot.completed > 0 {
        lines.push(Line::from(muted(
            format!("+{} new this session", snapshot.completed),
            palette,
        )));
    }
    lines
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

fn brand_kit_lines(palette: &Palette) -> Vec<Line<'static>> {
    let groups: [(&str, &[&str]); 3] = [
        ("Kits", &BRAND_KITS),
        ("Logo placement", &LOGO_PLACEMENTS),
        ("Format style", &FORMAT_STYLES),
    ];
    let mut lines = Vec::new();
    for (label, options) in groups {
        lines.push(Line::from(plain(label, palette)));
        lines.extend(
            options
                .iter()
                .map(|option| Line::from(muted(format!("  {option}"), palette))),
        );
    }
    lines
}
