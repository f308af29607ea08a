//! DTOs for the per-owner dashboard endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::{LinkSummary, OwnerStats};

/// One owned link on the dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlSummary {
    pub original_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl From<LinkSummary> for UrlSummary {
    fn from(s: LinkSummary) -> Self {
        Self {
            original_url: s.original_url,
            short_code: s.short_code,
            clicks: s.clicks,
            created_at: s.created_at,
        }
    }
}

/// All links owned by the caller, newest first, with totals.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerUrlsResponse {
    pub urls: Vec<UrlSummary>,
    pub total_urls: i64,
    pub total_clicks: i64,
}

impl From<OwnerStats> for OwnerUrlsResponse {
    fn from(stats: OwnerStats) -> Self {
        Self {
            urls: stats.urls.into_iter().map(Into::into).collect(),
            total_urls: stats.total_urls,
            total_clicks: stats.total_clicks,
        }
    }
}
