//! Error handling for Labdesk
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the Labdesk client
#[derive(Error, Debug)]
pub enum LabdeskError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Session expired, please log in again")]
    Unauthorized { redirect_to_login: bool },

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration load error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Labdesk operations
pub type Result<T> = std::result::Result<T, LabdeskError>;

impl LabdeskError {
    /// The message a command shows in its result banner.
    ///
    /// Server-provided messages are surfaced verbatim; everything else falls
    /// back to the display form of the error.
    pub fn banner_message(&self) -> String {
        match self {
            LabdeskError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_is_verbatim() {
        let err = LabdeskError::Api {
            status: 400,
            message: "이미 출근 처리되었습니다.".to_string(),
        };
        assert_eq!(err.banner_message(), "이미 출근 처리되었습니다.");
    }

    #[test]
    fn test_unauthorized_banner_message() {
        let err = LabdeskError::Unauthorized { redirect_to_login: true };
        assert_eq!(err.banner_message(), "Session expired, please log in again");
    }
}
