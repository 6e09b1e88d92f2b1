//! Supported language registry
//!
//! The registry is the fixed, ordered table of languages a preference may be
//! set to. It is built once at startup and never mutated afterwards; whether
//! the catalog currently has text for a code is a separate question.

use serde::{Deserialize, Serialize};

use crate::utils::errors::{LangBridgeError, Result};

/// Display metadata for one supported language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDescriptor {
    pub code: String,
    pub display_name: String,
    pub symbol: String,
}

impl LanguageDescriptor {
    pub fn new(code: &str, display_name: &str, symbol: &str) -> Self {
        Self {
            code: code.to_string(),
            display_name: display_name.to_string(),
            symbol: symbol.to_string(),
        }
    }

    /// Label used by selection menus, e.g. "🇬🇧 English"
    pub fn label(&self) -> String {
        format!("{} {}", self.symbol, self.display_name)
    }
}

/// Languages shipped with the bot
pub fn builtin_languages() -> Vec<LanguageDescriptor> {
    vec![
        LanguageDescriptor::new("en", "English", "🇬🇧"),
        LanguageDescriptor::new("ar", "العربية", "🇸🇦"),
    ]
}

/// Check that a code looks like `en`, `pt-BR` or `zh-Hant`
pub fn is_well_formed_code(code: &str) -> bool {
    let mut parts = code.split('-');
    let primary = match parts.next() {
        Some(primary) => primary,
        None => return false,
    };

    if !(2..=3).contains(&primary.len()) || !primary.chars().all(|c| c.is_ascii_lowercase()) {
        return false;
    }

    parts.all(|subtag| {
        (2..=8).contains(&subtag.len()) && subtag.chars().all(|c| c.is_ascii_alphanumeric())
    })
}

/// Ordered, immutable set of supported languages
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: Vec<LanguageDescriptor>,
}

impl LanguageRegistry {
    /// Build a registry from a display-ordered table
    pub fn new(languages: Vec<LanguageDescriptor>) -> Result<Self> {
        if languages.is_empty() {
            return Err(LangBridgeError::Config(
                "Language registry cannot be empty".to_string()
            ));
        }

        for (index, language) in languages.iter().enumerate() {
            if !is_well_formed_code(&language.code) {
                return Err(LangBridgeError::Config(
                    format!("Invalid language code: {:?}", language.code)
                ));
            }
            if languages[..index].iter().any(|other| other.code == language.code) {
                return Err(LangBridgeError::Config(
                    format!("Duplicate language code: {}", language.code)
                ));
            }
        }

        Ok(Self { languages })
    }

    pub fn builtin() -> Self {
        Self {
            languages: builtin_languages(),
        }
    }

    /// Supported languages in display order
    pub fn supported(&self) -> &[LanguageDescriptor] {
        &self.languages
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn get(&self, code: &str) -> Option<&LanguageDescriptor> {
        self.languages.iter().find(|language| language.code == code)
    }

    pub fn codes(&self) -> Vec<&str> {
        self.languages.iter().map(|language| language.code.as_str()).collect()
    }

    /// Label for a code, with a globe for codes the registry does not know
    pub fn display_label(&self, code: &str) -> String {
        match self.get(code) {
            Some(language) => language.label(),
            None => format!("🌍 {}", code),
        }
    }

    /// Map a client locale such as "en-US" to a supported code
    pub fn detect(&self, locale: Option<&str>) -> Option<&str> {
        let locale = locale?;
        if let Some(language) = self.get(locale) {
            return Some(language.code.as_str());
        }

        let primary = locale.split(['-', '_']).next().unwrap_or(locale).to_ascii_lowercase();
        self.get(&primary).map(|language| language.code.as_str())
    }
}
