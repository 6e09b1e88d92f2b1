//! Test helpers module
//!
//! Builds a language context backed by a temporary catalog file and an
//! isolated SQLite database.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Once;

use tempfile::TempDir;
use LangBridge::config::Settings;
use LangBridge::i18n::TranslationParams;
use LangBridge::LanguageContext;

static INIT: Once = Once::new();

/// Catalog used by most tests, shaped like the bot's languages.json
pub const SAMPLE_CATALOG: &str = r#"{
    "en": {
        "language_selector": {
            "title": "🌍 Language Settings",
            "description": "Choose your preferred language",
            "current_language": "Current language",
            "select_placeholder": "Select a language...",
            "success_title": "✅ Language Updated",
            "success_description": "Your language has been changed to {language}"
        },
        "a": { "b": "Hello {name}" }
    },
    "ar": {
        "language_selector": {
            "title": "🌍 إعدادات اللغة",
            "success_description": "تم تغيير لغتك إلى {language}"
        }
    }
}"#;

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

pub fn params(pairs: &[(&str, &str)]) -> TranslationParams {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

/// How the test database is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStorage {
    /// Single-connection in-memory database
    Memory,
    /// On-disk database with a pool of connections
    File { max_connections: u32 },
}

/// Test context holding temporary files alive for the duration of a test
pub struct TestContext {
    pub temp_dir: TempDir,
    pub catalog_path: PathBuf,
    pub settings: Settings,
    pub context: LanguageContext,
}

impl TestContext {
    /// Create a new test context with the sample catalog
    pub async fn new() -> Self {
        Self::with_catalog(Some(SAMPLE_CATALOG), TestStorage::Memory).await
    }

    /// Create a test context; `None` leaves the catalog file absent
    pub async fn with_catalog(catalog: Option<&str>, storage: TestStorage) -> Self {
        init_test_env();

        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let catalog_path = temp_dir.path().join("languages.json");
        if let Some(catalog) = catalog {
            std::fs::write(&catalog_path, catalog).expect("Failed to write catalog");
        }

        let mut settings = Settings::default();
        settings.i18n.catalog_path = catalog_path.display().to_string();
        settings.logging.file_path = temp_dir.path().join("log").join("test.log").display().to_string();
        match storage {
            TestStorage::Memory => {
                settings.database.url = "sqlite::memory:".to_string();
                settings.database.max_connections = 1;
            }
            TestStorage::File { max_connections } => {
                let db_path = temp_dir.path().join("db").join("language.sqlite");
                settings.database.url = format!("sqlite://{}", db_path.display());
                settings.database.max_connections = max_connections;
            }
        }
        settings.validate().expect("Test settings should be valid");

        let context = LanguageContext::initialize(&settings)
            .await
            .expect("Failed to initialize language context");

        Self {
            temp_dir,
            catalog_path,
            settings,
            context,
        }
    }

    /// Overwrite the catalog file without reloading
    pub fn write_catalog(&self, content: &str) {
        std::fs::write(&self.catalog_path, content).expect("Failed to write catalog");
    }
}
