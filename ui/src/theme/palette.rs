use engine::catalog::Tone;
use engine::theme::ThemeSubscriber;
use engine::{StyleSlotMap, Theme};
use std::sync::{Arc, RwLock};
use tuirealm::props::Color;

// Fallback colors for when the shared palette cannot be read
mod fallback_colors {
    use tuirealm::props::Color;

    pub const BACKGROUND: Color = Color::Reset;
    pub const CARD_BACKGROUND: Color = Color::Reset;
    pub const BORDER: Color = Color::Gray;
    pub const TEXT: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const ACCENT: Color = Color::Cyan;
    pub const HOVER: Color = Color::DarkGray;
    pub const GRADIENT: Color = Color::Blue;
    pub const SHADOW: Color = Color::Black;
    pub const POSITIVE: Color = Color::Green;
    pub const CAUTION: Color = Color::Yellow;
    pub const INFO: Color = Color::Blue;
    pub const NEGATIVE: Color = Color::Red;
}

/// Status colours per theme. The slot tables carry no status colours, so they
/// live next to the renderer.
struct ToneColors {
    positive: &'static str,
    caution: &'static str,
    info: &'static str,
    negative: &'static str,
}

const fn tone_colors(theme: Theme) -> ToneColors {
    match theme {
        Theme::Light => ToneColors {
            positive: "#16a34a",
            caution: "#d97706",
            info: "#2563eb",
            negative: "#dc2626",
        },
        Theme::Dark => ToneColors {
            positive: "#4ade80",
            caution: "#fbbf24",
            info: "#60a5fa",
            negative: "#f87171",
        },
        Theme::Neon => ToneColors {
            positive: "#4ade80",
            caution: "#facc15",
            info: "#22d3ee",
            negative: "#f472b6",
        },
        Theme::Minimal => ToneColors {
            positive: "#15803d",
            caution: "#a16207",
            info: "#1d4ed8",
            negative: "#b91c1c",
        },
    }
}

/// Convert a `#rrggbb` hex string or a named ANSI colour to a tuirealm Color.
/// Unparseable values become [`Color::Reset`].
pub fn hex_to_color(hex: &str) -> Color {
    if hex.is_empty() {
        return Color::Reset;
    }

    match hex.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "reset" => Color::Reset,
        _ => match parse_hex_color(hex) {
            Ok((r, g, b)) => Color::Rgb(r, g, b),
            Err(e) => {
                log::debug!("Unparseable colour '{hex}': {e}");
                Color::Reset
            }
        },
    }
}

fn parse_hex_color(hex: &str) -> Result<(u8, u8, u8), &'static str> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err("Invalid hex color format");
    }

    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid red component")?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid green component")?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid blue component")?;

    Ok((r, g, b))
}

/// Resolved colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub theme: Theme,
    pub background: Color,
    pub card_background: Color,
    pub border: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub accent: Color,
    pub hover: Color,
    pub gradient: Color,
    pub shadow: Color,
    pub positive: Color,
    pub caution: Color,
    pub info: Color,
    pub negative: Color,
}

impl Palette {
    pub fn from_slots(theme: Theme, slots: &StyleSlotMap) -> Self {
        let tones = tone_colors(theme);
        Self {
            theme,
            background: hex_to_color(slots.background),
            card_background: hex_to_color(slots.card_background),
            border: hex_to_color(slots.border),
            text: hex_to_color(slots.text),
            text_secondary: hex_to_color(slots.text_secondary),
            accent: hex_to_color(slots.accent),
            hover: hex_to_color(slots.hover),
            gradient: hex_to_color(slots.gradient),
            shadow: hex_to_color(slots.shadow),
            positive: hex_to_color(tones.positive),
            caution: hex_to_color(tones.caution),
            info: hex_to_color(tones.info),
            negative: hex_to_color(tones.negative),
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        Self::from_slots(theme, theme.slots())
    }

    /// Terminal defaults, used when the shared palette is unavailable.
    pub fn fallback() -> Self {
        Self {
            theme: Theme::default(),
            background: fallback_colors::BACKGROUND,
            card_background: fallback_colors::CARD_BACKGROUND,
            border: fallback_colors::BORDER,
            text: fallback_colors::TEXT,
            text_secondary: fallback_colors::TEXT_SECONDARY,
            accent: fallback_colors::ACCENT,
            hover: fallback_colors::HOVER,
            gradient: fallback_colors::GRADIENT,
            shadow: fallback_colors::SHADOW,
            positive: fallback_colors::POSITIVE,
            caution: fallback_colors::CAUTION,
            info: fallback_colors::INFO,
            negative: fallback_colors::NEGATIVE,
        }
    }

    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Positive => self.positive,
            Tone::Caution => self.caution,
            Tone::Info => self.info,
            Tone::Negative => self.negative,
            Tone::Neutral => self.text_secondary,
        }
    }
}

/// Shared, subscribable palette.
///
/// Register a clone with [`engine::ThemeStore::subscribe`]; every other clone
/// observes the update.
#[derive(Debug, Clone)]
pub struct PaletteHandle {
    inner: Arc<RwLock<Palette>>,
}

impl PaletteHandle {
    pub fn new(theme: Theme) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Palette::for_theme(theme))),
        }
    }

    /// Snapshot of the current palette.
    pub fn current(&self) -> Palette {
        match self.inner.read() {
            Ok(palette) => *palette,
            Err(e) => {
                log::warn!("Palette lock poisoned, using fallback: {e}");
                Palette::fallback()
            }
        }
    }
}

impl ThemeSubscriber for PaletteHandle {
    fn theme_changed(&mut self, theme: Theme, slots: &'static StyleSlotMap) {
        let next = Palette::from_slots(theme, slots);
        match self.inner.write() {
            Ok(mut palette) => *palette = next,
            Err(poisoned) => {
                log::warn!("Palette lock poisoned, overwriting");
                *poisoned.into_inner() = next;
            }
        }
    }
}
