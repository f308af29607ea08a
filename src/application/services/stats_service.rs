//! Aggregate statistics service.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::repositories::{GlobalCounts, StatsRepository};
use crate::error::AppError;

/// A per-link summary for the owner dashboard.
#[derive(Debug, Clone)]
pub struct LinkSummary {
    pub original_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

/// All links owned by a single caller, with aggregate totals.
#[derive(Debug, Clone)]
pub struct OwnerStats {
    pub urls: Vec<LinkSummary>,
    pub total_urls: i64,
    pub total_clicks: i64,
}

/// Read-only service over the statistics repository.
pub struct StatsService {
    repository: Arc<dyn StatsRepository>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<dyn StatsRepository>) -> Self {
        Self { repository }
    }

    /// Returns totals aggregated over all live records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn global(&self) -> Result<GlobalCounts, AppError> {
        self.repository.global_counts().await
    }

    /// Returns the dashboard listing for one owner, newest link first.
    ///
    /// `total_clicks` is summed over the returned set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn for_owner(&self, owner_id: &str) -> Result<OwnerStats, AppError> {
        let links = self.repository.list_for_owner(owner_id).await?;

        let total_urls = links.len() as i64;
        let total_clicks = links.iter().map(|l| l.clicks).sum();

        let urls = links
            .into_iter()
            .map(|l| LinkSummary {
                original_url: l.original_url,
                short_code: l.short_code,
                clicks: l.clicks,
                created_at: l.created_at,
            })
            .collect();

        Ok(OwnerStats {
            urls,
            total_urls,
            total_clicks,
        })
    }
}
