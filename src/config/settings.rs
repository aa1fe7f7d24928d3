//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub auth: AuthConfig,
    pub pagination: PaginationConfig,
    pub search: SearchConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
    pub features: FeaturesConfig,
}

/// Content backend API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Authentication configuration
///
/// The session token lives in a local file, the desktop counterpart of the
/// browser's local storage. `token` overrides the file when set (useful for
/// one-off CLI invocations).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    pub token_file: String,
    pub token: Option<String>,
}

/// List pagination defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaginationConfig {
    pub default_limit: u32,
    pub max_limit: u32,
}

/// Search suggestion configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub min_query_length: usize,
    pub max_suggestions: usize,
}

/// CSV export configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub output_dir: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
    pub max_files: u32,
}

/// Feature flags configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeaturesConfig {
    pub stock_module: bool,
    pub tenders_module: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("HUBDESK"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::HubDeskError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:5000".to_string(),
                timeout_seconds: 10,
                user_agent: "HubDesk-Admin/1.0".to_string(),
            },
            auth: AuthConfig {
                token_file: ".hubdesk-token".to_string(),
                token: None,
            },
            pagination: PaginationConfig {
                default_limit: 10,
                max_limit: 100,
            },
            search: SearchConfig {
                min_query_length: 2,
                max_suggestions: 8,
            },
            export: ExportConfig {
                output_dir: ".".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "./logs".to_string(),
                max_files: 5,
            },
            features: FeaturesConfig {
                stock_module: true,
                tenders_module: true,
            },
        }
    }
}
