//! Repository trait for aggregate statistics.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Aggregate counters over all live links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalCounts {
    pub total_urls: i64,
    pub total_clicks: i64,
    /// Distinct non-null owner identities; anonymous records are excluded.
    pub unique_owners: i64,
}

/// Repository interface for read-only statistics queries.
///
/// Both operations reflect a read-committed snapshot of the store at
/// call time; no stronger staleness guarantee is made.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Aggregates totals over all live records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn global_counts(&self) -> Result<GlobalCounts, AppError>;

    /// Lists all records owned by `owner_id`, newest first by creation time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<Link>, AppError>;
}
