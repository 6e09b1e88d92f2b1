//! LangBridge administration tool
//!
//! Main application entry point

use std::process::ExitCode;

use anyhow::{anyhow, bail, Context};
use tracing::{error, info};

use LangBridge::{
    config::Settings,
    i18n::TranslationParams,
    models::Namespace,
    services::{run_diagnostics, LanguageContext},
    utils::logging,
};

const USAGE: &str = "usage: langbridge [verify | languages | get <user|group> <id> | set <user|group> <id> <code> | list <user|group> [limit] | text <key> [locale] [name=value...]]";

/// Records shown by `list` when no limit is given
const DEFAULT_LIST_LIMIT: i64 = 20;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    match run().await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "LangBridge failed");
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<ExitCode> {
    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", LangBridge::info());
    let context = LanguageContext::initialize(&settings).await?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        [] | ["verify"] => {
            let report = run_diagnostics(&context).await;
            println!("{}", report);
            Ok(if report.all_passed() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        ["languages"] => {
            for language in context.registry.supported() {
                println!("{}\t{}", language.code, language.label());
            }
            Ok(ExitCode::SUCCESS)
        }
        ["get", namespace, identity] => {
            let namespace: Namespace = namespace.parse().map_err(|e: String| anyhow!(e))?;
            let identity: i64 = identity.parse().context("identity must be an integer")?;
            println!("{}", context.preferences.get(namespace, identity).await);
            Ok(ExitCode::SUCCESS)
        }
        ["set", namespace, identity, code] => {
            let namespace: Namespace = namespace.parse().map_err(|e: String| anyhow!(e))?;
            let identity: i64 = identity.parse().context("identity must be an integer")?;
            if context.preferences.set(namespace, identity, code).await {
                println!("{} {} -> {}", namespace, identity, context.registry.display_label(code));
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!("could not set {} {} to {:?}", namespace, identity, code);
                Ok(ExitCode::FAILURE)
            }
        }
        ["list", namespace, rest @ ..] => {
            let namespace: Namespace = namespace.parse().map_err(|e: String| anyhow!(e))?;
            let limit: i64 = match rest {
                [] => DEFAULT_LIST_LIMIT,
                [limit] => limit.parse().context("limit must be an integer")?,
                _ => bail!(USAGE),
            };

            for preference in context.preferences.list(namespace, limit, 0).await? {
                println!(
                    "{}\t{}\t{}",
                    preference.identity,
                    context.registry.display_label(&preference.language),
                    preference.updated_at.to_rfc3339()
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        ["text", key, rest @ ..] => {
            let default_language = context.translator.default_language();
            // a locale such as "ar-SA" selects its supported base language
            let (language, pairs) = match rest.split_first() {
                Some((first, pairs)) if !first.contains('=') => {
                    (context.registry.detect(Some(*first)).unwrap_or(default_language), pairs)
                }
                _ => (default_language, rest),
            };

            let mut params = TranslationParams::new();
            for pair in pairs {
                let (name, value) = pair
                    .split_once('=')
                    .ok_or_else(|| anyhow!("parameters must look like name=value, got {:?}", pair))?;
                params.insert(name.to_string(), value.to_string());
            }

            println!("{}", context.translator.t(key, language, Some(&params))?);
            Ok(ExitCode::SUCCESS)
        }
        _ => bail!(USAGE),
    }
}
