// Core components
pub mod common;
pub mod state;

// Reusable patterns
pub mod base_popup;

// Navigation and content
pub mod section_view;
pub mod sections;
pub mod sidebar;

// Popups
pub mod error_popup;
pub mod theme_picker;

// Display components
pub mod help_bar;

// System components
pub mod global_key_watcher;
