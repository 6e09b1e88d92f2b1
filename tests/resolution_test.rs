//! Integration tests for catalog resolution
//!
//! Covers fallback order, formatting and catalog reload through the
//! translator a running bot would use.

mod helpers;

use assert_matches::assert_matches;
use proptest::prelude::*;
use serde_json::json;

use helpers::*;
use LangBridge::i18n::{Catalog, FormatError, LoadError, TranslationParams};

fn scenario_catalog() -> Catalog {
    Catalog::from_value(json!({"en": {"a": {"b": "Hello {name}"}}, "ar": {}})).unwrap()
}

#[test]
fn test_fallback_then_format_scenario() {
    let catalog = scenario_catalog();
    let result = catalog.resolve("a.b", "ar", &params(&[("name", "Sam")]), "en");
    assert_eq!(result.unwrap(), "Hello Sam");
}

#[test]
fn test_total_miss_scenario() {
    let catalog = scenario_catalog();
    assert_eq!(catalog.resolve("a.c", "en", &TranslationParams::new(), "en").unwrap(), "a.c");
}

#[tokio::test]
async fn test_translator_resolves_requested_language() {
    let ctx = TestContext::new().await;
    let translator = &ctx.context.translator;

    assert_eq!(translator.t("language_selector.title", "ar", None).unwrap(), "🌍 إعدادات اللغة");
    assert_eq!(
        translator
            .t("language_selector.success_description", "ar", Some(&params(&[("language", "English")])))
            .unwrap(),
        "تم تغيير لغتك إلى English"
    );
}

#[tokio::test]
async fn test_translator_falls_back_to_default() {
    let ctx = TestContext::new().await;
    let translator = &ctx.context.translator;

    assert_eq!(
        translator.t("language_selector.description", "ar", None).unwrap(),
        translator.t("language_selector.description", "en", None).unwrap()
    );
    assert_eq!(translator.t("language_selector", "en", None).unwrap(), "language_selector");
}

#[tokio::test]
async fn test_translator_surfaces_missing_parameter() {
    let ctx = TestContext::new().await;
    let result = ctx
        .context
        .translator
        .t("language_selector.success_description", "en", Some(&params(&[("lang", "ar")])));
    assert_matches!(result, Err(FormatError::MissingParameter { ref name, .. }) if name == "language");
}

#[tokio::test]
async fn test_missing_catalog_starts_empty_and_reloads() {
    let ctx = TestContext::with_catalog(None, TestStorage::Memory).await;
    let translator = &ctx.context.translator;

    assert!(translator.languages().is_empty());
    assert_eq!(translator.t("a.b", "en", None).unwrap(), "a.b");

    ctx.write_catalog(SAMPLE_CATALOG);
    translator.reload().await.unwrap();
    assert_eq!(translator.t("a.b", "en", Some(&params(&[("name", "Sam")]))).unwrap(), "Hello Sam");
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_catalog() {
    let ctx = TestContext::new().await;
    let translator = &ctx.context.translator;

    ctx.write_catalog(r#"[{"en": {"a": {"b": "Hello"}}}]"#);
    assert_matches!(translator.reload().await, Err(LoadError::InvalidShape { .. }));

    ctx.write_catalog(r#"{"en": {"language_selector": "#);
    assert_matches!(translator.reload().await, Err(LoadError::Malformed(_)));

    std::fs::remove_file(&ctx.catalog_path).unwrap();
    assert_matches!(translator.reload().await, Err(LoadError::NotFound { .. }));

    assert_eq!(translator.t("language_selector.title", "en", None).unwrap(), "🌍 Language Settings");
}

#[tokio::test]
async fn test_reload_skips_only_the_broken_language() {
    let ctx = TestContext::new().await;
    let translator = &ctx.context.translator;

    ctx.write_catalog(
        r#"{
            "en": {"language_selector": {"title": "Pick a language"}},
            "ar": {"language_selector": {"title": "اختر لغة", "count": 3}}
        }"#,
    );
    translator.reload().await.unwrap();

    assert_eq!(translator.t("language_selector.title", "en", None).unwrap(), "Pick a language");
    // ar was rejected, so it resolves through the default language
    assert_eq!(translator.t("language_selector.title", "ar", None).unwrap(), "Pick a language");
    assert_eq!(translator.languages().into_iter().collect::<Vec<_>>(), vec!["en".to_string()]);
    assert!(translator.snapshot().rejected().contains_key("ar"));
}

#[tokio::test]
async fn test_startup_with_broken_language_keeps_default() {
    let catalog = r#"{"en": {"a": {"b": "Hello {name}"}}, "ar": {"a": {"b": false}}}"#;
    let ctx = TestContext::with_catalog(Some(catalog), TestStorage::Memory).await;
    let translator = &ctx.context.translator;

    assert_eq!(translator.t("a.b", "ar", Some(&params(&[("name", "Sam")]))).unwrap(), "Hello Sam");
    assert!(!translator.snapshot().is_empty());
}

#[tokio::test]
async fn test_concurrent_reads_during_reload() {
    let ctx = TestContext::new().await;
    let translator = ctx.context.translator.clone();

    let mut readers = Vec::new();
    for _ in 0..8 {
        let translator = translator.clone();
        readers.push(tokio::spawn(async move {
            for _ in 0..200 {
                let text = translator.t("language_selector.title", "en", None).unwrap();
                assert!(text == "🌍 Language Settings" || text == "Reloaded", "unexpected text {:?}", text);
            }
        }));
    }

    ctx.write_catalog(r#"{"en": {"language_selector": {"title": "Reloaded"}}}"#);
    translator.reload().await.unwrap();

    for reader in readers {
        reader.await.unwrap();
    }
    assert_eq!(translator.t("language_selector.title", "en", None).unwrap(), "Reloaded");
}

fn segment() -> impl Strategy<Value = String> {
    "[a-z_]{1,8}"
}

proptest! {
    #[test]
    fn prop_existing_leaf_resolves_to_itself(
        path in prop::collection::vec(segment(), 1..4),
        text in "[^{}]{0,20}",
    ) {
        let mut value = json!(text.clone());
        for segment in path.iter().rev() {
            let mut branch = serde_json::Map::new();
            branch.insert(segment.clone(), value);
            value = serde_json::Value::Object(branch);
        }
        let catalog = Catalog::from_value(json!({ "en": value })).unwrap();
        let key = path.join(".");

        prop_assert_eq!(catalog.resolve(&key, "en", &TranslationParams::new(), "en").unwrap(), text);
    }

    #[test]
    fn prop_fallback_matches_default(key in "[a-z]{1,6}(\\.[a-z]{1,6}){0,2}") {
        let catalog = Catalog::from_value(json!({
            "en": { "a": { "b": "Hello" }, "menu": "Menu" },
            "ar": { "menu": "القائمة" }
        })).unwrap();
        let empty = TranslationParams::new();

        if catalog.lookup(&key, "ar").is_none() {
            prop_assert_eq!(
                catalog.resolve(&key, "ar", &empty, "en").unwrap(),
                catalog.resolve(&key, "en", &empty, "en").unwrap()
            );
        }
    }

    #[test]
    fn prop_total_miss_returns_key(key in "[a-z.]{0,20}", language in "[a-z]{2}") {
        let catalog = Catalog::empty();
        prop_assert_eq!(catalog.resolve(&key, &language, &TranslationParams::new(), "en").unwrap(), key);
    }
}
