//! LangBridge
//!
//! Language support for chat bots: a nested translation catalog with fallback
//! resolution and parameter substitution, and a persistent store of per-user
//! and per-group language preferences.

#![allow(non_snake_case)]

pub mod config;
pub mod database;
pub mod i18n;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{LangBridgeError, Result};

// Re-export main components for easy access
pub use i18n::{Catalog, LanguageRegistry, TranslationParams, Translator};
pub use models::{LanguagePreference, Namespace};
pub use services::{LanguageContext, PreferenceStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
