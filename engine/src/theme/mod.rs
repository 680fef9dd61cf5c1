//! # Theme Module
//!
//! Theme variants and the machinery that turns a variant into concrete style
//! values. A theme is a closed set of four variants; every variant maps to one
//! fixed [`StyleSlotMap`] table. The active variant is held by a
//! [`ThemeStore`], which broadcasts changes to subscribers synchronously.
//!
//! ## Usage
//!
//! ```no_run
//! use engine::theme::{StyleSlot, Theme, ThemeStore};
//!
//! let mut store = ThemeStore::new();
//! store.subscribe(|theme: Theme, slots: &'static engine::StyleSlotMap| {
//!     log::info!("now {theme}, accent {}", slots.get(StyleSlot::Accent));
//! });
//!
//! store.set_theme(Theme::Neon);
//! assert_eq!(store.theme(), Theme::Neon);
//!
//! // Names coming from config or the command line are validated
//! assert!(store.set_theme_by_name("sepia").is_err());
//! assert_eq!(store.theme(), Theme::Neon);
//! ```

pub mod slots;
pub mod store;

pub use slots::{StyleSlot, StyleSlotMap, style_slots_for};
pub use store::{SubscriptionId, ThemeStore, ThemeSubscriber};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named visual variant controlling the style slot table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Neon,
    Minimal,
}

/// Raised when a theme name outside the four known variants is supplied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{name}' (expected one of: light, dark, neon, minimal)")]
pub struct InvalidThemeError {
    pub name: String,
}

impl Theme {
    /// All variants in selector order.
    pub const ALL: [Theme; 4] = [Theme::Light, Theme::Dark, Theme::Neon, Theme::Minimal];

    pub fn id(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Neon => "neon",
            Theme::Minimal => "minimal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Neon => "Neon",
            Theme::Minimal => "Minimal",
        }
    }

    /// Glyph shown next to the label in the selector.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "☀",
            Theme::Dark => "☾",
            Theme::Neon => "⚡",
            Theme::Minimal => "◻",
        }
    }

    /// Next variant in selector order, wrapping around.
    pub fn next(self) -> Theme {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn slots(self) -> &'static StyleSlotMap {
        style_slots_for(self)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Theme {
    type Err = InvalidThemeError;

    /// Exact, case-insensitive match on the four identifiers. Anything else is
    /// rejected; there is no fallback variant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|theme| theme.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| InvalidThemeError {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok_eq};

    #[test]
    fn test_parse_known_themes() {
        assert_ok_eq!("light".parse::<Theme>(), Theme::Light);
        assert_ok_eq!("DARK".parse::<Theme>(), Theme::Dark);
        assert_ok_eq!(" neon ".parse::<Theme>(), Theme::Neon);
        assert_ok_eq!("minimal".parse::<Theme>(), Theme::Minimal);
    }

    #[test]
    fn test_parse_unknown_theme_is_rejected() {
        let err = assert_err!("solarized".parse::<Theme>());
        assert_eq!(err.name, "solarized");
        assert!(err.to_string().contains("solarized"));
        assert_err!("".parse::<Theme>());
    }

    #[test]
    fn test_display_round_trips_through_id() {
        for theme in Theme::ALL {
            assert_eq!(theme.to_string(), theme.id());
            assert_ok_eq!(theme.to_string().parse::<Theme>(), theme);
        }
    }

    #[test]
    fn test_next_cycles_through_all_variants() {
        assert_eq!(Theme::Light.next(), Theme::Dark);
        assert_eq!(Theme::Dark.next(), Theme::Neon);
        assert_eq!(Theme::Neon.next(), Theme::Minimal);
        assert_eq!(Theme::Minimal.next(), Theme::Light);
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_serde_uses_lowercase_ids() {
        use serde::de::value::{Error, StrDeserializer};

        let parsed = Theme::deserialize(StrDeserializer::<Error>::new("neon"));
        assert_ok_eq!(parsed, Theme::Neon);

        let rejected = Theme::deserialize(StrDeserializer::<Error>::new("Neon"));
        assert_err!(rejected);
    }
}
