//! Internationalization module
//!
//! This module handles multi-language support: the translation catalog,
//! key resolution with fallback to the default language, message formatting,
//! and the registry of languages users may choose from.

pub mod catalog;
pub mod format;
pub mod registry;
pub mod resolver;
pub mod translator;

// Re-export commonly used i18n components
pub use catalog::{Catalog, CatalogStats, LanguageStats, LoadError, Node};
pub use format::{format_template, FormatError, TranslationParams};
pub use registry::{LanguageDescriptor, LanguageRegistry};
pub use translator::Translator;
