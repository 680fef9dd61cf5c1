//! # Campaign Orchestrator UI Library
//!
//! Terminal dashboard for the Campaign Orchestrator, built with Ratatui and
//! tui-realm on top of the `engine` crate.
//!
//! ## Features
//!
//! - Navigation rail with eight workspace sections
//! - Four switchable themes applied on the next frame
//! - Simulated creative generation in the Creator Studio
//! - Error and warning popups fed by a central error reporter
//!
//! ## Modules
//!
//! - [`app`] - Model, update handlers, view composition and lifecycle
//! - [`cli`] - Command-line arguments
//! - [`components`] - UI components and message types
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types and centralized error reporting
//! - [`logger`] - Logging configuration
//! - [`theme`] - Terminal palettes derived from theme style slots
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod logger;
pub mod theme;

// Re-export commonly used types for easier access in tests
pub use error::AppError;

pub use components::common::Msg;
