//! Data models module
//!
//! This module contains the data structures persisted by the preference store

pub mod preference;

// Re-export commonly used models
pub use preference::{LanguagePreference, Namespace};
