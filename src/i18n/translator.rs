//! Catalog host and translation entry point
//!
//! The translator owns the current catalog generation. Readers take a cheap
//! `Arc` snapshot and resolve without holding the lock, so a reload can never
//! expose a partially built tree.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{error, info};

use super::catalog::{Catalog, CatalogStats, LoadError};
use super::format::{FormatError, TranslationParams};
use crate::utils::logging::log_catalog_load;

/// Main internationalization manager
#[derive(Debug)]
pub struct Translator {
    current: RwLock<Arc<Catalog>>,
    source: PathBuf,
    default_language: String,
}

impl Translator {
    /// Create a translator around an already built catalog
    pub fn new(catalog: Catalog, source: impl Into<PathBuf>, default_language: &str) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
            source: source.into(),
            default_language: default_language.to_string(),
        }
    }

    /// First load at startup
    ///
    /// A source that cannot be loaded leaves the translator with an empty
    /// catalog; every key then resolves to itself.
    pub async fn initialize(source: impl Into<PathBuf>, default_language: &str) -> Self {
        let source = source.into();
        let display = source.display().to_string();
        let catalog = match Catalog::load(&source).await {
            Ok(catalog) => {
                let languages: Vec<String> = catalog.languages().into_iter().collect();
                log_catalog_load(&display, &languages, true, None);
                catalog
            }
            Err(e) => {
                log_catalog_load(&display, &[], false, Some(&e.to_string()));
                error!("Starting with an empty catalog");
                Catalog::empty()
            }
        };

        Self::new(catalog, source, default_language)
    }

    /// Current catalog generation
    pub fn snapshot(&self) -> Arc<Catalog> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Publish a new catalog generation
    pub fn replace(&self, catalog: Catalog) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(catalog);
    }

    /// Reload the catalog from its source
    ///
    /// On failure the previous generation stays in effect.
    pub async fn reload(&self) -> Result<(), LoadError> {
        let display = self.source.display().to_string();
        match Catalog::load(&self.source).await {
            Ok(catalog) => {
                let languages: Vec<String> = catalog.languages().into_iter().collect();
                self.replace(catalog);
                log_catalog_load(&display, &languages, true, None);
                info!("Catalog reloaded");
                Ok(())
            }
            Err(e) => {
                log_catalog_load(&display, &[], false, Some(&e.to_string()));
                Err(e)
            }
        }
    }

    /// Get a translated message
    pub fn t(&self, key: &str, language: &str, params: Option<&TranslationParams>) -> Result<String, FormatError> {
        let empty = TranslationParams::new();
        let params = params.unwrap_or(&empty);
        self.snapshot().resolve(key, language, params, &self.default_language)
    }

    /// Codes present in the current catalog
    pub fn languages(&self) -> BTreeSet<String> {
        self.snapshot().languages()
    }

    pub fn stats(&self) -> CatalogStats {
        self.snapshot().stats(&self.default_language)
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}
