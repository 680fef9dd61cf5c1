//! # Application Module
//!
//! Model-view-update loop for the orchestrator dashboard.
//!
//! - [`model`] - the tuirealm application, terminal and dashboard state
//! - [`state`] - theme store, active section and generation flow
//! - [`updates`] - message handlers, one module per activity
//! - [`view`] - frame layout and popup placement
//! - [`application_lifecycle`] - startup, main loop and shutdown
//!
//! ## Usage
//!
//! ```no_run
//! use orchestrator::app::application_lifecycle::{ApplicationLifecycle, StartupOptions};
//! use orchestrator::config::AppConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! let options = StartupOptions::resolve(&config, None, None);
//! if let Some(mut model) = ApplicationLifecycle::start(&config, options)? {
//!     ApplicationLifecycle::setup_terminal(&mut model)?;
//!     ApplicationLifecycle::run_application_loop(&mut model)?;
//!     ApplicationLifecycle::shutdown_application(model)?;
//! }
//! # Ok(())
//! # }
//! ```

/// Application lifecycle management - startup, shutdown, and main loop
pub mod application_lifecycle;
/// Loop flags and focus bookkeeping
pub mod managers;
/// Core application model
pub mod model;
/// Dashboard state owned by the model
pub mod state;
/// Message processing and state update logic
pub mod updates;
/// UI rendering and view composition
pub mod view;
