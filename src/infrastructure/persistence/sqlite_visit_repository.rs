//! SQLite implementation of the visit repository.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::VisitRecord;
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;

/// SQLite repository for per-client visit counters.
pub struct SqliteVisitRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteVisitRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitRepository for SqliteVisitRepository {
    async fn record_visit(&self, id: &str, client_ip: &str) -> Result<(), AppError> {
        // Single-statement upsert: concurrent visits for the same pair cannot
        // lose increments, and no reader can observe the row at count 0.
        sqlx::query(
            r#"
            INSERT INTO stats (id, ip, count) VALUES (?1, ?2, 1)
            ON CONFLICT (id, ip) DO UPDATE SET count = count + 1
            "#,
        )
        .bind(id)
        .bind(client_ip)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn visits_for(&self, id: &str) -> Result<Vec<VisitRecord>, AppError> {
        let rows = sqlx::query("SELECT ip, count FROM stats WHERE id = ?1 ORDER BY ip")
            .bind(id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| VisitRecord {
                client_ip: r.get("ip"),
                count: r.get("count"),
            })
            .collect())
    }
}
