//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::row::LinkRow;

/// PostgreSQL repository for link storage and retrieval.
///
/// Short code uniqueness is enforced by the `links_short_code_key`
/// constraint; a raced insert surfaces as [`AppError::Conflict`] so the
/// service layer can pick a new code. Click increments are a single
/// `UPDATE ... SET clicks = clicks + 1`, serialized by the database.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row: LinkRow = sqlx::query_as(
            r#"
            INSERT INTO links (short_code, original_url, owner_id, expires_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, short_code, original_url, owner_id, clicks, created_at, expires_at
            "#,
        )
        .bind(&new_link.short_code)
        .bind(&new_link.original_url)
        .bind(&new_link.owner_id)
        .bind(new_link.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_live_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        let row: Option<LinkRow> = sqlx::query_as(
            r#"
            SELECT id, short_code, original_url, owner_id, clicks, created_at, expires_at
            FROM links
            WHERE short_code = $1
              AND (expires_at IS NULL OR expires_at > now())
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_url_and_owner(
        &self,
        original_url: &str,
        owner_id: Option<String>,
    ) -> Result<Option<Link>, AppError> {
        // IS NOT DISTINCT FROM makes the anonymous lookup match only
        // ownerless rows instead of any owner's row.
        let row: Option<LinkRow> = sqlx::query_as(
            r#"
            SELECT id, short_code, original_url, owner_id, clicks, created_at, expires_at
            FROM links
            WHERE original_url = $1
              AND owner_id IS NOT DISTINCT FROM $2
              AND (expires_at IS NULL OR expires_at > now())
            LIMIT 1
            "#,
        )
        .bind(original_url)
        .bind(owner_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn code_exists(&self, short_code: &str) -> Result<bool, AppError> {
        // Expired rows still hold the unique constraint until purged, so
        // the probe must not filter on expiry.
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM links WHERE short_code = $1)")
                .bind(short_code)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE links
            SET clicks = clicks + 1
            WHERE short_code = $1
              AND (expires_at IS NULL OR expires_at > now())
            "#,
        )
        .bind(short_code)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_expired(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE expires_at <= now()")
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
