//! Configuration validation module
//!
//! This module provides validation functions for configuration
//! to ensure all required settings are properly configured.

use std::collections::HashSet;

use super::Settings;
use crate::i18n::registry::is_well_formed_code;
use crate::utils::errors::{LangBridgeError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_database_config(&settings.database)?;
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(LangBridgeError::Config(
            "Database URL is required".to_string()
        ));
    }

    if !config.url.starts_with("sqlite:") {
        return Err(LangBridgeError::Config(
            format!("Unsupported database URL: {}", config.url)
        ));
    }

    if config.max_connections == 0 {
        return Err(LangBridgeError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(LangBridgeError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    if config.acquire_timeout_seconds == 0 || config.busy_timeout_seconds == 0 {
        return Err(LangBridgeError::Config(
            "Database timeouts must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_language.is_empty() {
        return Err(LangBridgeError::Config(
            "Default language is required".to_string()
        ));
    }

    if config.catalog_path.is_empty() {
        return Err(LangBridgeError::Config(
            "Catalog path is required".to_string()
        ));
    }

    if config.languages.is_empty() {
        return Err(LangBridgeError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    let mut seen = HashSet::new();
    for language in &config.languages {
        if !is_well_formed_code(&language.code) {
            return Err(LangBridgeError::Config(
                format!("Invalid language code: {:?}", language.code)
            ));
        }
        if !seen.insert(language.code.as_str()) {
            return Err(LangBridgeError::Config(
                format!("Duplicate language code: {}", language.code)
            ));
        }
    }

    if !seen.contains(config.default_language.as_str()) {
        return Err(LangBridgeError::Config(
            "Default language must be in supported languages list".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(LangBridgeError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(LangBridgeError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
