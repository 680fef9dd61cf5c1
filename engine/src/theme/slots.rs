use super::Theme;
use serde::Serialize;

/// Semantic style slot. Every theme table carries a value for each slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleSlot {
    Background,
    CardBackground,
    Border,
    Text,
    TextSecondary,
    Accent,
    Hover,
    Gradient,
    Shadow,
}

impl StyleSlot {
    pub const ALL: [StyleSlot; 9] = [
        StyleSlot::Background,
        StyleSlot::CardBackground,
        StyleSlot::Border,
        StyleSlot::Text,
        StyleSlot::TextSecondary,
        StyleSlot::Accent,
        StyleSlot::Hover,
        StyleSlot::Gradient,
        StyleSlot::Shadow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StyleSlot::Background => "background",
            StyleSlot::CardBackground => "card_background",
            StyleSlot::Border => "border",
            StyleSlot::Text => "text",
            StyleSlot::TextSecondary => "text_secondary",
            StyleSlot::Accent => "accent",
            StyleSlot::Hover => "hover",
            StyleSlot::Gradient => "gradient",
            StyleSlot::Shadow => "shadow",
        }
    }
}

/// Slot → style value table for one theme.
///
/// One field per [`StyleSlot`], so a table missing a slot does not compile.
/// Values are opaque to the engine; the terminal renderer reads them as
/// `#rrggbb` hex or named ANSI colours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleSlotMap {
    pub background: &'static str,
    pub card_background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub accent: &'static str,
    pub hover: &'static str,
    pub gradient: &'static str,
    pub shadow: &'static str,
}

impl StyleSlotMap {
    pub fn get(&self, slot: StyleSlot) -> &'static str {
        match slot {
            StyleSlot::Background => self.background,
            StyleSlot::CardBackground => self.card_background,
            StyleSlot::Border => self.border,
            StyleSlot::Text => self.text,
            StyleSlot::TextSecondary => self.text_secondary,
            StyleSlot::Accent => self.accent,
            StyleSlot::Hover => self.hover,
            StyleSlot::Gradient => self.gradient,
            StyleSlot::Shadow => self.shadow,
        }
    }

    /// Iterate `(slot, value)` pairs in [`StyleSlot::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleSlot, &'static str)> + '_ {
        StyleSlot::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }
}

static LIGHT: StyleSlotMap = StyleSlotMap {
    background: "#f9fafb",
    card_background: "#ffffff",
    border: "#e5e7eb",
    text: "#111827",
    text_secondary: "#6b7280",
    accent: "#8b5cf6",
    hover: "#f3f4f6",
    gradient: "#f5f3ff",
    shadow: "#d1d5db",
};

static DARK: StyleSlotMap = StyleSlotMap {
    background: "#111827",
    card_background: "#1f2937",
    border: "#374151",
    text: "#f9fafb",
    text_secondary: "#9ca3af",
    accent: "#7c3aed",
    hover: "#374151",
    gradient: "#312e81",
    shadow: "#000000",
};

static NEON: StyleSlotMap = StyleSlotMap {
    background: "#000000",
    card_background: "#0f172a",
    border: "#22d3ee",
    text: "#22d3ee",
    text_secondary: "#e879f9",
    accent: "#06b6d4",
    hover: "#1e293b",
    gradient: "#4c1d95",
    shadow: "#ec4899",
};

static MINIMAL: StyleSlotMap = StyleSlotMap {
    background: "#ffffff",
    card_background: "#ffffff",
    border: "#d1d5db",
    text: "#000000",
    text_secondary: "#4b5563",
    accent: "#000000",
    hover: "#f9fafb",
    gradient: "#f3f4f6",
    shadow: "#e5e7eb",
};

/// Fixed style table for `theme`. Pure and total; the returned reference is the
/// same static for every call with the same theme.
pub fn style_slots_for(theme: Theme) -> &'static StyleSlotMap {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
        Theme::Neon => &NEON,
        Theme::Minimal => &MINIMAL,
    }
}
