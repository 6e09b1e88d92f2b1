//! Language preference repository implementation

use std::time::Instant;

use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::preference::{LanguagePreference, Namespace};
use crate::utils::errors::LangBridgeError;
use crate::utils::logging::log_database_operation;

#[derive(Clone, Debug)]
pub struct PreferenceRepository {
    pool: SqlitePool,
}

impl PreferenceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find the preference stored for an identity
    pub async fn find(&self, namespace: Namespace, identity: i64) -> Result<Option<LanguagePreference>, LangBridgeError> {
        let sql = format!(
            "SELECT {id} AS identity, language, updated_at FROM {table} WHERE {id} = ?1",
            id = namespace.id_column(),
            table = namespace.table(),
        );

        let started = Instant::now();
        let result = sqlx::query_as::<_, LanguagePreference>(&sql)
            .bind(identity)
            .fetch_optional(&self.pool)
            .await;
        log_database_operation("find", namespace.table(), elapsed_ms(started), result.is_ok());

        Ok(result?)
    }

    /// Insert or update the preference for an identity in one statement
    pub async fn upsert(&self, namespace: Namespace, identity: i64, language: &str) -> Result<LanguagePreference, LangBridgeError> {
        let sql = format!(
            r#"
            INSERT INTO {table} ({id}, language, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT ({id})
            DO UPDATE SET
                language = excluded.language,
                updated_at = excluded.updated_at
            RETURNING {id} AS identity, language, updated_at
            "#,
            id = namespace.id_column(),
            table = namespace.table(),
        );

        let started = Instant::now();
        let result = sqlx::query_as::<_, LanguagePreference>(&sql)
            .bind(identity)
            .bind(language)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await;
        log_database_operation("upsert", namespace.table(), elapsed_ms(started), result.is_ok());

        Ok(result?)
    }

    /// Count stored preferences
    pub async fn count(&self, namespace: Namespace) -> Result<i64, LangBridgeError> {
        let sql = format!("SELECT COUNT(*) FROM {}", namespace.table());
        let count: (i64,) = sqlx::query_as(&sql)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    /// List preferences, most recently updated first
    pub async fn list(&self, namespace: Namespace, limit: i64, offset: i64) -> Result<Vec<LanguagePreference>, LangBridgeError> {
        let sql = format!(
            "SELECT {id} AS identity, language, updated_at FROM {table} ORDER BY updated_at DESC, {id} ASC LIMIT ?1 OFFSET ?2",
            id = namespace.id_column(),
            table = namespace.table(),
        );

        let preferences = sqlx::query_as::<_, LanguagePreference>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(preferences)
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::database::connection::{create_pool, run_migrations};

    async fn test_repository() -> PreferenceRepository {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            ..DatabaseConfig::default()
        };
        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        PreferenceRepository::new(pool)
    }

    #[tokio::test]
    async fn test_upsert_inserts_then_updates() {
        let repository = test_repository().await;
        assert!(repository.find(Namespace::User, 42).await.unwrap().is_none());

        let first = repository.upsert(Namespace::User, 42, "en").await.unwrap();
        assert_eq!(first.identity, 42);
        assert_eq!(first.language, "en");

        let second = repository.upsert(Namespace::User, 42, "ar").await.unwrap();
        assert_eq!(second.language, "ar");
        assert!(second.updated_at >= first.updated_at);

        let stored = repository.find(Namespace::User, 42).await.unwrap().unwrap();
        assert_eq!(stored, second);
        assert_eq!(repository.count(Namespace::User).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_namespaces_are_independent() {
        let repository = test_repository().await;
        repository.upsert(Namespace::User, 7, "ar").await.unwrap();

        assert!(repository.find(Namespace::Group, 7).await.unwrap().is_none());
        assert_eq!(repository.count(Namespace::Group).await.unwrap(), 0);

        repository.upsert(Namespace::Group, 7, "en").await.unwrap();
        assert_eq!(repository.find(Namespace::User, 7).await.unwrap().unwrap().language, "ar");
        assert_eq!(repository.find(Namespace::Group, 7).await.unwrap().unwrap().language, "en");
    }

    #[tokio::test]
    async fn test_list_paginates() {
        let repository = test_repository().await;
        for identity in 1..=3 {
            repository.upsert(Namespace::Group, identity, "en").await.unwrap();
        }

        let page = repository.list(Namespace::Group, 2, 0).await.unwrap();
        assert_eq!(page.len(), 2);
        let rest = repository.list(Namespace::Group, 2, 2).await.unwrap();
        assert_eq!(rest.len(), 1);
    }
}
