//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::i18n::registry::LanguageDescriptor;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// Preference database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_seconds: u64,
    pub busy_timeout_seconds: u64,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub default_language: String,
    pub catalog_path: String,
    /// Supported languages in display order
    pub languages: Vec<LanguageDescriptor>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
    pub json: bool,
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_seconds)
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.busy_timeout_seconds)
    }
}

impl Settings {
    /// Load settings from configuration file and environment variables
    ///
    /// Values missing from both sources keep their built-in defaults.
    pub fn new() -> Result<Self, config::ConfigError> {
        let defaults = config::Config::try_from(&Settings::default())?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("LANGBRIDGE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::LangBridgeError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            i18n: I18nConfig {
                default_language: "en".to_string(),
                catalog_path: "languages.json".to_string(),
                languages: crate::i18n::registry::builtin_languages(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "log/langbridge.log".to_string(),
                json: false,
            },
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://db/language.sqlite".to_string(),
            max_connections: 5,
            min_connections: 1,
            acquire_timeout_seconds: 5,
            busy_timeout_seconds: 5,
        }
    }
}
