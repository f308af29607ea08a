//! Row mapping between the `links` table and the domain entity.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::entities::Link;

/// Raw database row for a link record.
#[derive(Debug, FromRow)]
pub struct LinkRow {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub owner_id: Option<String>,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link {
            id: row.id,
            short_code: row.short_code,
            original_url: row.original_url,
            owner_id: row.owner_id,
            clicks: row.clicks,
            created_at: row.created_at,
            expires_at: row.expires_at,
        }
    }
}
