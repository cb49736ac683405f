//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;

use super::Settings;
use crate::utils::errors::{LabdeskError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_session_config(&settings.session)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(LabdeskError::Config("API base URL is required".to_string()));
    }

    let url = Url::parse(&config.base_url)
        .map_err(|e| LabdeskError::Config(format!("Invalid API base URL: {}", e)))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(LabdeskError::Config(
            "API base URL must use http or https".to_string(),
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(LabdeskError::Config(
            "API timeout must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

/// Validate session configuration
fn validate_session_config(config: &super::SessionConfig) -> Result<()> {
    if config.ttl_seconds == 0 {
        return Err(LabdeskError::Config(
            "Session TTL must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(LabdeskError::Config("Log level is required".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let mut settings = Settings::default();
        settings.api.base_url = "ftp://lab.example.com".to_string();
        assert!(validate_settings(&settings).is_err());

        settings.api.base_url = "not a url".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut settings = Settings::default();
        settings.api.timeout_seconds = 0;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_zero_ttl() {
        let mut settings = Settings::default();
        settings.session.ttl_seconds = 0;
        assert!(validate_settings(&settings).is_err());
    }
}
