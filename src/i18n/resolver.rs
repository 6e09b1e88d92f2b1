//! Key resolution with language fallback
//!
//! Resolution order is: requested language, then the default language, then
//! the key itself. Only a hit on a leaf counts; a branch is treated as a miss.

use tracing::{debug, error, warn};

use super::catalog::Catalog;
use super::format::{format_template, FormatError, TranslationParams};

impl Catalog {
    /// Resolve `key` for `language`, falling back to `default_language`
    ///
    /// Never fails on a missing key or language: the key itself is returned.
    /// A placeholder without a matching parameter is an error.
    pub fn resolve(
        &self,
        key: &str,
        language: &str,
        params: &TranslationParams,
        default_language: &str,
    ) -> Result<String, FormatError> {
        let template = match self.lookup(key, language) {
            Some(text) => text,
            None if language != default_language => {
                debug!(key = key, language = language, "Falling back to default language");
                match self.lookup(key, default_language) {
                    Some(text) => text,
                    None => {
                        warn!(key = key, language = language, "Translation key not found in any language");
                        return Ok(key.to_string());
                    }
                }
            }
            None => {
                warn!(key = key, language = language, "Translation key not found in default language");
                return Ok(key.to_string());
            }
        };

        if params.is_empty() {
            return Ok(template.to_string());
        }

        format_template(template, params).map_err(|e| {
            error!(key = key, language = language, error = %e, "Failed to format translation");
            e
        })
    }
}
