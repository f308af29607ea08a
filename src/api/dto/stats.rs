//! DTOs for the global statistics endpoint.

use serde::Serialize;

use crate::domain::repositories::GlobalCounts;

/// Aggregate counters over all live links.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStatsResponse {
    pub total_urls: i64,
    pub total_clicks: i64,
    pub unique_users: i64,
}

impl From<GlobalCounts> for GlobalStatsResponse {
    fn from(counts: GlobalCounts) -> Self {
        Self {
            total_urls: counts.total_urls,
            total_clicks: counts.total_clicks,
            unique_users: counts.unique_owners,
        }
    }
}
