//! Error handling for LangBridge
//!
//! This module defines the main error type used throughout the crate
//! and provides a unified error handling strategy.

use thiserror::Error;

pub use crate::i18n::catalog::LoadError;
pub use crate::i18n::format::FormatError;

/// Main error type for LangBridge
#[derive(Error, Debug)]
pub enum LangBridgeError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Catalog load error: {0}")]
    Load(#[from] LoadError),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("Unsupported language: {code}")]
    UnsupportedLanguage { code: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for LangBridge operations
pub type Result<T> = std::result::Result<T, LangBridgeError>;

impl LangBridgeError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            LangBridgeError::Database(_) => true,
            LangBridgeError::Migration(_) => false,
            LangBridgeError::Load(_) => true,
            LangBridgeError::Format(_) => false,
            LangBridgeError::UnsupportedLanguage { .. } => true,
            LangBridgeError::Config(_) => false,
            LangBridgeError::Serialization(_) => false,
            LangBridgeError::Io(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LangBridgeError::Migration(_) => ErrorSeverity::Critical,
            LangBridgeError::Config(_) => ErrorSeverity::Critical,
            LangBridgeError::Load(_) => ErrorSeverity::Warning,
            LangBridgeError::UnsupportedLanguage { .. } => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_is_recoverable_info() {
        let err = LangBridgeError::UnsupportedLanguage { code: "fr".to_string() };
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Info);
        assert_eq!(err.to_string(), "Unsupported language: fr");
    }

    #[test]
    fn test_format_error_is_not_recoverable() {
        let err: LangBridgeError = FormatError::MissingParameter {
            name: "name".to_string(),
            template: "Hello {name}".to_string(),
        }
        .into();
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(ErrorSeverity::Critical.to_string(), "CRITICAL");
        assert_eq!(ErrorSeverity::Warning.to_string(), "WARN");
    }
}
