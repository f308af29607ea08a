//! PostgreSQL implementation of the statistics repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::{GlobalCounts, StatsRepository};
use crate::error::AppError;
use crate::infrastructure::persistence::row::LinkRow;

/// PostgreSQL repository for read-only aggregate queries.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn global_counts(&self) -> Result<GlobalCounts, AppError> {
        // COUNT(DISTINCT owner_id) ignores NULLs, which is exactly the
        // "anonymous records excluded" rule for unique owners.
        let (total_urls, total_clicks, unique_owners): (i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*),
                COALESCE(SUM(clicks), 0)::bigint,
                COUNT(DISTINCT owner_id)
            FROM links
            WHERE expires_at IS NULL OR expires_at > now()
            "#,
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(GlobalCounts {
            total_urls,
            total_clicks,
            unique_owners,
        })
    }

    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<Link>, AppError> {
        let rows: Vec<LinkRow> = sqlx::query_as(
            r#"
            SELECT id, short_code, original_url, owner_id, clicks, created_at, expires_at
            FROM links
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
