//! # Campaign Orchestrator Engine
//!
//! Terminal-agnostic core of the Campaign Orchestrator dashboard. This library
//! owns the only stateful pieces of the application: the theme store with its
//! derived style slots and the section shell that decides which view is shown.
//! It also carries the static mock catalog every view renders and the simulated
//! creative generation flow.
//!
//! ## Modules
//!
//! - [`theme`] - Theme variants, style slot tables and the subscribable [`theme::ThemeStore`]
//! - [`section`] - Section identifiers and the [`section::ViewShell`] dispatcher
//! - [`controls`] - Per-section interactive state: chart range, admin tab, expanded agent
//! - [`generation`] - Simulated creative generation state machine
//! - [`catalog`] - Static mock datasets for the eight dashboard sections
//! - [`taskpool`] - Bounded, cancellable pool for fire-and-forget timers

pub mod catalog;
pub mod controls;
pub mod generation;
pub mod section;
pub mod taskpool;
pub mod theme;

pub use controls::{ViewAction, ViewControls};
pub use section::{Section, ViewShell};
pub use theme::{InvalidThemeError, StyleSlot, StyleSlotMap, Theme, ThemeStore};
