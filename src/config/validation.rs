//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{HubDeskError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_auth_config(&settings.auth)?;
    validate_pagination_config(&settings.pagination)?;
    validate_search_config(&settings.search)?;
    validate_export_config(&settings.export)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate backend API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(HubDeskError::Config(
            "API base URL is required".to_string()
        ));
    }

    if url::Url::parse(&config.base_url).is_err() {
        return Err(HubDeskError::Config(
            format!("API base URL is not a valid URL: {}", config.base_url)
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(HubDeskError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate authentication configuration
fn validate_auth_config(config: &super::AuthConfig) -> Result<()> {
    if config.token_file.is_empty() && config.token.is_none() {
        return Err(HubDeskError::Config(
            "Either a token file path or an inline token must be configured".to_string()
        ));
    }

    Ok(())
}

/// Validate pagination configuration
fn validate_pagination_config(config: &super::PaginationConfig) -> Result<()> {
    if config.default_limit == 0 {
        return Err(HubDeskError::Config(
            "Default page limit must be greater than 0".to_string()
        ));
    }

    if config.default_limit > config.max_limit {
        return Err(HubDeskError::Config(
            "Default page limit cannot exceed max limit".to_string()
        ));
    }

    Ok(())
}

/// Validate search configuration
fn validate_search_config(config: &super::SearchConfig) -> Result<()> {
    if config.max_suggestions == 0 {
        return Err(HubDeskError::Config(
            "Max suggestions must be greater than 0".to_string()
        ));
    }

    if config.min_query_length == 0 {
        return Err(HubDeskError::Config(
            "Minimum query length must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate export configuration
fn validate_export_config(config: &super::ExportConfig) -> Result<()> {
    if config.output_dir.is_empty() {
        return Err(HubDeskError::Config(
            "Export output directory is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(HubDeskError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(HubDeskError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
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
    fn test_bad_base_url_rejected() {
        let mut settings = Settings::default();
        settings.api.base_url = "not a url".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_zero_suggestions_rejected() {
        let mut settings = Settings::default();
        settings.search.max_suggestions = 0;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_default_limit_above_max_rejected() {
        let mut settings = Settings::default();
        settings.pagination.default_limit = 200;
        assert!(validate_settings(&settings).is_err());
    }
}
