//! Preference store implementation
//!
//! This service validates and persists language preferences for users and
//! groups. Reads never fail: a missing record or a storage error yields the
//! default language.

use std::sync::Arc;

use tracing::{debug, error};

use crate::database::repositories::PreferenceRepository;
use crate::i18n::LanguageRegistry;
use crate::models::preference::{LanguagePreference, Namespace};
use crate::utils::errors::{LangBridgeError, Result};
use crate::utils::logging::{log_preference_change, log_preference_rejected};

/// Preference store for user and group languages
#[derive(Clone, Debug)]
pub struct PreferenceStore {
    repository: PreferenceRepository,
    registry: Arc<LanguageRegistry>,
    default_language: String,
}

impl PreferenceStore {
    /// Create a new PreferenceStore instance
    pub fn new(repository: PreferenceRepository, registry: Arc<LanguageRegistry>, default_language: &str) -> Self {
        Self {
            repository,
            registry,
            default_language: default_language.to_string(),
        }
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Stored record for an identity, if any
    pub async fn try_get(&self, namespace: Namespace, identity: i64) -> Result<Option<LanguagePreference>> {
        self.repository.find(namespace, identity).await
    }

    /// Language for an identity, or the default language
    pub async fn get(&self, namespace: Namespace, identity: i64) -> String {
        match self.try_get(namespace, identity).await {
            Ok(Some(preference)) => preference.language,
            Ok(None) => {
                debug!(namespace = %namespace, identity = identity, "No stored preference, using default language");
                self.default_language.clone()
            }
            Err(e) => {
                error!(namespace = %namespace, identity = identity, error = %e, "Failed to read language preference");
                self.default_language.clone()
            }
        }
    }

    /// Validate and store a language, returning the written record
    pub async fn try_set(&self, namespace: Namespace, identity: i64, language: &str) -> Result<LanguagePreference> {
        if !self.registry.is_supported(language) {
            log_preference_rejected(namespace, identity, language, "unsupported language");
            return Err(LangBridgeError::UnsupportedLanguage {
                code: language.to_string(),
            });
        }

        let preference = self.repository.upsert(namespace, identity, language).await?;
        log_preference_change(namespace, identity, &preference.language);
        Ok(preference)
    }

    /// Set the language for an identity
    ///
    /// Returns false when the language is not supported or the write failed;
    /// nothing is written in either case.
    pub async fn set(&self, namespace: Namespace, identity: i64, language: &str) -> bool {
        match self.try_set(namespace, identity, language).await {
            Ok(_) => true,
            Err(LangBridgeError::UnsupportedLanguage { .. }) => false,
            Err(e) => {
                error!(namespace = %namespace, identity = identity, error = %e, "Failed to store language preference");
                false
            }
        }
    }

    pub async fn get_user_language(&self, user_id: i64) -> String {
        self.get(Namespace::User, user_id).await
    }

    pub async fn set_user_language(&self, user_id: i64, language: &str) -> bool {
        self.set(Namespace::User, user_id, language).await
    }

    pub async fn get_group_language(&self, group_id: i64) -> String {
        self.get(Namespace::Group, group_id).await
    }

    pub async fn set_group_language(&self, group_id: i64, language: &str) -> bool {
        self.set(Namespace::Group, group_id, language).await
    }

    /// Language for a user acting inside an optional group
    ///
    /// The user's own preference wins, then the group's, then the default.
    pub async fn effective_language(&self, user_id: i64, group_id: Option<i64>) -> String {
        match self.try_get(Namespace::User, user_id).await {
            Ok(Some(preference)) => return preference.language,
            Ok(None) => {}
            Err(e) => {
                error!(user_id = user_id, error = %e, "Failed to read user language preference");
            }
        }

        match group_id {
            Some(group_id) => self.get(Namespace::Group, group_id).await,
            None => self.default_language.clone(),
        }
    }

    /// A page of stored records, most recently updated first
    pub async fn list(&self, namespace: Namespace, limit: i64, offset: i64) -> Result<Vec<LanguagePreference>> {
        self.repository.list(namespace, limit, offset).await
    }

    /// Number of stored records per namespace
    pub async fn counts(&self) -> Result<Vec<(Namespace, i64)>> {
        let mut counts = Vec::with_capacity(Namespace::ALL.len());
        for namespace in Namespace::ALL {
            counts.push((namespace, self.repository.count(namespace).await?));
        }
        Ok(counts)
    }
}
