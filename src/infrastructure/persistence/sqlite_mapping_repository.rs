//! SQLite implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// SQLite repository for mapping storage and retrieval.
///
/// Identifier uniqueness is the `urls` primary key; an insert racing another
/// writer surfaces as [`AppError::IdConflict`] rather than silently winning.
pub struct SqliteMappingRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for SqliteMappingRepository {
    async fn insert(&self, mapping: NewMapping) -> Result<(), AppError> {
        sqlx::query("INSERT INTO urls (id, url, auth_token) VALUES (?1, ?2, ?3)")
            .bind(&mapping.id)
            .bind(&mapping.target)
            .bind(&mapping.auth_token)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query("SELECT id, url, auth_token FROM urls WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(|r| UrlMapping::new(r.get("id"), r.get("url"), r.get("auth_token"))))
    }

    async fn exists(&self, id: &str) -> Result<bool, AppError> {
        let row = sqlx::query("SELECT 1 FROM urls WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.is_some())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        // Visit records go first: the stats table references urls(id).
        sqlx::query("DELETE FROM stats WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM urls WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
