use crate::theme::Palette;
use tuirealm::ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

/// Common popup styling
#[derive(Debug, Clone, Copy)]
pub struct PopupStyle {
    pub border_color: Color,
    pub title_color: Color,
    pub text_color: Color,
    pub muted_color: Color,
    pub background: Color,
}

impl PopupStyle {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            border_color: palette.accent,
            title_color: palette.accent,
            text_color: palette.text,
            muted_color: palette.text_secondary,
            background: palette.card_background,
        }
    }

    pub fn error(palette: &Palette) -> Self {
        Self {
            border_color: palette.negative,
            title_color: palette.negative,
            ..Self::from_palette(palette)
        }
    }

    pub fn warning(palette: &Palette) -> Self {
        Self {
            border_color: palette.caution,
            title_color: palette.caution,
            ..Self::from_palette(palette)
        }
    }
}

/// Base popup builder for consistent popup creation
pub struct PopupBuilder {
    title: String,
    style: PopupStyle,
    content_lines: Vec<Line<'static>>,
    instructions: Option<String>,
}

impl PopupBuilder {
    pub fn new(title: impl Into<String>, style: PopupStyle) -> Self {
        Self {
            title: title.into(),
            style,
            content_lines: Vec::new(),
            instructions: None,
        }
    }

    pub fn add_empty_line(mut self) -> Self {
        self.content_lines.push(Line::from(""));
        self
    }

    pub fn add_multiline_text(mut self, text: impl Into<String>) -> Self {
        for line in text.into().lines() {
            self.content_lines.push(Line::from(line.to_string()));
        }
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Create a block widget with the popup styling and no content
    pub fn create_block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.style.border_color))
            .style(Style::default().bg(self.style.background))
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center)
            .title_style(
                Style::default()
                    .fg(self.style.title_color)
                    .add_modifier(Modifier::BOLD),
            )
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let block = self.create_block();

        let mut all_lines = vec![Line::from("")];
        all_lines.extend(self.content_lines);

        if let Some(instructions) = self.instructions {
            all_lines.push(Line::from(""));
            all_lines.push(Line::from(Span::styled(
                instructions,
                Style::default().fg(self.style.muted_color),
            )));
        }

        let paragraph = Paragraph::new(all_lines)
            .block(block)
            .style(Style::default().fg(self.style.text_color))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }
}

/// Common popup sizing utilities
pub struct PopupLayout;

impl PopupLayout {
    /// Centered popup with a fixed size, clamped to the available area
    pub fn fixed(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    /// Calculate centered popup area with given percentage of screen
    pub fn centered(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
        let popup_width = (area.width * width_percent) / 100;
        let popup_height = (area.height * height_percent) / 100;
        Self::fixed(area, popup_width, popup_height)
    }
}
