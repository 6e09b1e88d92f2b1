//! Configuration management module
//!
//! This module handles loading and validation of configuration
//! from TOML files and environment variables.

pub mod settings;
pub mod validation;

pub use settings::{Settings, DatabaseConfig, I18nConfig, LoggingConfig};
