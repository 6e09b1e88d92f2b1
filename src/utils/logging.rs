//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the LangBridge crate.

use std::path::Path;

use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::config::LoggingConfig;
use crate::models::Namespace;
use crate::utils::errors::{LangBridgeError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file appender on drop and must be held for
/// the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let path = Path::new(&config.file_path);
    let directory = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "langbridge.log".to_string());

    std::fs::create_dir_all(directory)?;
    let file_appender = tracing_appender::rolling::daily(directory, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(non_blocking)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(non_blocking)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| LangBridgeError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a preference change with structured data
pub fn log_preference_change(namespace: Namespace, identity: i64, language: &str) {
    info!(
        namespace = %namespace,
        identity = identity,
        language = language,
        "Language preference updated"
    );
}

/// Log a rejected preference write
pub fn log_preference_rejected(namespace: Namespace, identity: i64, language: &str, reason: &str) {
    warn!(
        namespace = %namespace,
        identity = identity,
        language = language,
        reason = reason,
        "Language preference rejected"
    );
}

/// Log catalog load results
pub fn log_catalog_load(source: &str, languages: &[String], success: bool, details: Option<&str>) {
    if success {
        info!(
            source = source,
            languages = %languages.join(", "),
            "Catalog loaded"
        );
    } else {
        error!(
            source = source,
            details = details,
            "Catalog load failed"
        );
    }
}

/// Log database operations
pub fn log_database_operation(operation: &str, table: &str, duration_ms: u64, success: bool) {
    if success {
        debug!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Database operation completed"
        );
    } else {
        error!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Database operation failed"
        );
    }
}
