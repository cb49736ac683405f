//! Labdesk
//!
//! Command-line client for the Realistic Multimedia Lab management site.
//! This library provides the typed REST client, session persistence,
//! calendar-grid generation and inline-attachment parsing that back the
//! `labdesk` binary.

pub mod api;
pub mod attendance;
pub mod calendar;
pub mod commands;
pub mod config;
pub mod content;
pub mod models;
pub mod session;
pub mod utils;

// Re-export commonly used types
pub use api::ApiClient;
pub use config::Settings;
pub use session::SessionStore;
pub use utils::errors::{LabdeskError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
