//! Language context
//!
//! Holds the registry, translator and preference store that every request
//! handler needs. Built once at startup and passed explicitly, in this order:
//! registry, catalog, database, preference store.

use std::sync::Arc;

use tracing::info;

use crate::config::Settings;
use crate::database::{create_pool, run_migrations, DatabasePool, PreferenceRepository};
use crate::i18n::{FormatError, LanguageRegistry, TranslationParams, Translator};
use crate::services::preferences::PreferenceStore;
use crate::utils::errors::Result;

#[derive(Clone, Debug)]
pub struct LanguageContext {
    pub registry: Arc<LanguageRegistry>,
    pub translator: Arc<Translator>,
    pub preferences: PreferenceStore,
    pool: DatabasePool,
}

impl LanguageContext {
    /// Build every component from settings
    ///
    /// An unreadable catalog does not fail initialization; the translator
    /// starts empty. Registry and database problems do.
    pub async fn initialize(settings: &Settings) -> Result<Self> {
        let registry = Arc::new(LanguageRegistry::new(settings.i18n.languages.clone())?);
        info!(languages = ?registry.codes(), "Language registry ready");

        info!("Loading translations...");
        let translator = Translator::initialize(&settings.i18n.catalog_path, &settings.i18n.default_language).await;

        info!("Connecting to preference database...");
        let pool = create_pool(&settings.database).await?;
        run_migrations(&pool).await?;

        Ok(Self::from_parts(registry, Arc::new(translator), pool))
    }

    /// Assemble a context from already built components
    pub fn from_parts(registry: Arc<LanguageRegistry>, translator: Arc<Translator>, pool: DatabasePool) -> Self {
        let preferences = PreferenceStore::new(
            PreferenceRepository::new(pool.clone()),
            Arc::clone(&registry),
            translator.default_language(),
        );

        Self {
            registry,
            translator,
            preferences,
            pool,
        }
    }

    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    /// Text for `key` in the language a user prefers
    pub async fn text_for_user(&self, user_id: i64, key: &str, params: Option<&TranslationParams>) -> std::result::Result<String, FormatError> {
        let language = self.preferences.get_user_language(user_id).await;
        self.translator.t(key, &language, params)
    }

    /// Text for `key` in the language a group prefers
    pub async fn text_for_group(&self, group_id: i64, key: &str, params: Option<&TranslationParams>) -> std::result::Result<String, FormatError> {
        let language = self.preferences.get_group_language(group_id).await;
        self.translator.t(key, &language, params)
    }
}
