//! Database connection management

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::config::DatabaseConfig;
use crate::utils::errors::LangBridgeError;

pub type DatabasePool = Pool<Sqlite>;

/// sqlx names in-memory databases with a `file:` URI
fn is_in_memory(options: &SqliteConnectOptions) -> bool {
    let filename = options.clone().get_filename();
    filename
        .to_str()
        .is_some_and(|name| name == ":memory:" || name.starts_with("file:"))
}

/// Directory that has to exist before the database file can be created
fn database_directory(options: &SqliteConnectOptions) -> Option<PathBuf> {
    if is_in_memory(options) {
        return None;
    }
    options
        .clone()
        .get_filename()
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

/// Create a new database connection pool
///
/// File databases are created if missing, along with their parent directory.
pub async fn create_pool(config: &DatabaseConfig) -> Result<DatabasePool, LangBridgeError> {
    let mut options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .busy_timeout(config.busy_timeout());

    if !is_in_memory(&options) {
        if let Some(directory) = database_directory(&options) {
            std::fs::create_dir_all(directory)?;
        }
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(Some(Duration::from_secs(600)))
        .connect_with(options)
        .await?;

    // Test the connection
    sqlx::query("SELECT 1")
        .execute(&pool)
        .await?;

    tracing::info!(url = %config.url, "Database connection pool created successfully");
    Ok(pool)
}

/// Run database migrations
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), LangBridgeError> {
    tracing::info!("Running database migrations...");

    sqlx::migrate!("./migrations")
        .run(pool)
        .await?;

    tracing::info!("Database migrations completed successfully");
    Ok(())
}

/// Check database health
pub async fn health_check(pool: &DatabasePool) -> Result<(), LangBridgeError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await?;

    Ok(())
}
