//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the Labdesk client.

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Guard returned by [`init_logging`]; dropping it flushes the file appender.
pub struct LoggingGuard {
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Initialize logging based on configuration.
///
/// Logs always go to stderr (stdout is reserved for command output); a rolling
/// daily file is added when `file_path` is configured.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard> {
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let file_guard = if let Some(dir) = &config.file_path {
        let file_appender = tracing_appender::rolling::daily(dir, "labdesk.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
            .init();
        Some(guard)
    } else {
        registry.init();
        None
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(LoggingGuard { _file_guard: file_guard })
}

/// Log an API round trip with structured data
pub fn log_api_call(method: &str, path: &str, status: u16, duration_ms: u64) {
    if status < 400 {
        info!(
            method = method,
            path = path,
            status = status,
            duration_ms = duration_ms,
            "API call completed"
        );
    } else {
        warn!(
            method = method,
            path = path,
            status = status,
            duration_ms = duration_ms,
            "API call failed"
        );
    }
}

/// Log session lifecycle events
pub fn log_session_event(username: Option<&str>, event: &str) {
    info!(username = username, event = event, "Session event");
}
