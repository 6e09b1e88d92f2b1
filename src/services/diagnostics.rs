//! Startup self-check
//!
//! Verifies that the catalog covers every supported language and that the
//! preference database answers, and renders the result for operators.

use std::fmt;

use tracing::{info, warn};

use crate::database::health_check;
use crate::services::context::LanguageContext;

/// How many missing keys to list per language
const MISSING_KEYS_SHOWN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticCheck {
    pub name: String,
    pub status: CheckStatus,
    pub detail: String,
}

#[derive(Debug, Clone, Default)]
pub struct DiagnosticsReport {
    pub checks: Vec<DiagnosticCheck>,
}

impl DiagnosticsReport {
    fn push(&mut self, name: impl Into<String>, status: CheckStatus, detail: impl Into<String>) {
        self.checks.push(DiagnosticCheck {
            name: name.into(),
            status,
            detail: detail.into(),
        });
    }

    /// No check failed; warnings are allowed
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|check| check.status != CheckStatus::Fail)
    }

    pub fn check(&self, name: &str) -> Option<&DiagnosticCheck> {
        self.checks.iter().find(|check| check.name == name)
    }
}

impl fmt::Display for DiagnosticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Language system verification")?;
        for check in &self.checks {
            let mark = match check.status {
                CheckStatus::Pass => "✅",
                CheckStatus::Warn => "⚠️",
                CheckStatus::Fail => "❌",
            };
            writeln!(f, "{} {}: {}", mark, check.name, check.detail)?;
        }
        if self.all_passed() {
            write!(f, "All checks passed")
        } else {
            write!(f, "Some checks failed")
        }
    }
}

/// Run every check against a context
pub async fn run_diagnostics(context: &LanguageContext) -> DiagnosticsReport {
    let mut report = DiagnosticsReport::default();
    let catalog = context.translator.snapshot();
    let default_language = context.translator.default_language();

    if catalog.is_empty() {
        report.push(
            "catalog",
            CheckStatus::Fail,
            format!("no translations loaded from {}", context.translator.source().display()),
        );
    } else {
        let languages: Vec<String> = catalog.languages().into_iter().collect();
        report.push("catalog", CheckStatus::Pass, format!("languages: {}", languages.join(", ")));
    }

    if catalog.has_language(default_language) {
        let total = catalog.stats(default_language).total_keys;
        report.push("default_language", CheckStatus::Pass, format!("{} has {} keys", default_language, total));
    } else {
        report.push("default_language", CheckStatus::Fail, format!("{} not found in catalog", default_language));
    }

    for language in context.registry.supported() {
        let name = format!("language:{}", language.code);
        if let Some(reason) = catalog.rejected().get(&language.code) {
            report.push(name, CheckStatus::Fail, format!("{} rejected: {}", language.label(), reason));
            continue;
        }
        if !catalog.has_language(&language.code) {
            report.push(name, CheckStatus::Fail, format!("{} not found in catalog", language.label()));
            continue;
        }

        let missing = if language.code == default_language {
            Vec::new()
        } else {
            catalog.missing_keys(default_language, &language.code)
        };

        if missing.is_empty() {
            report.push(name, CheckStatus::Pass, format!("{} complete", language.label()));
        } else {
            let shown: Vec<&str> = missing.iter().take(MISSING_KEYS_SHOWN).map(String::as_str).collect();
            report.push(
                name,
                CheckStatus::Warn,
                format!(
                    "{} keys fall back to {}: {}{}",
                    missing.len(),
                    default_language,
                    shown.join(", "),
                    if missing.len() > shown.len() { ", ..." } else { "" }
                ),
            );
        }
    }

    match health_check(context.pool()).await {
        Ok(()) => match context.preferences.counts().await {
            Ok(counts) => {
                let detail: Vec<String> = counts
                    .iter()
                    .map(|(namespace, count)| format!("{} {}", count, namespace))
                    .collect();
                report.push("preference_storage", CheckStatus::Pass, format!("reachable ({} preferences)", detail.join(", ")));
            }
            Err(e) => report.push("preference_storage", CheckStatus::Fail, e.to_string()),
        },
        Err(e) => report.push("preference_storage", CheckStatus::Fail, e.to_string()),
    }

    if report.all_passed() {
        info!(checks = report.checks.len(), "Language system verification passed");
    } else {
        warn!(checks = report.checks.len(), "Language system verification failed");
    }

    report
}
