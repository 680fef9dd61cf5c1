//! # Terminal Palette
//!
//! Bridges the engine's [`engine::ThemeStore`] to tuirealm colours. The store
//! hands out opaque style strings per slot; this module parses them into
//! [`Color`](tuirealm::props::Color) values once per theme change and keeps
//! the result in a shared [`PaletteHandle`].
//!
//! Components hold a clone of the handle and read it at render time, so a
//! theme change is visible on the very next frame without remounting.
//!
//! ```no_run
//! use engine::{Theme, ThemeStore};
//! use orchestrator::theme::PaletteHandle;
//!
//! let mut store = ThemeStore::new();
//! let palette = PaletteHandle::new(store.theme());
//! store.subscribe(palette.clone());
//!
//! store.set_theme(Theme::Dark);
//! assert_eq!(palette.current().theme, Theme::Dark);
//! ```

pub mod palette;

pub use palette::{Palette, PaletteHandle, hex_to_color};
