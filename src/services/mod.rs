//! Services module
//!
//! This module contains the language services built on top of the catalog
//! and the preference database

pub mod context;
pub mod diagnostics;
pub mod preferences;

// Re-export commonly used services
pub use context::LanguageContext;
pub use diagnostics::{run_diagnostics, CheckStatus, DiagnosticCheck, DiagnosticsReport};
pub use preferences::PreferenceStore;
