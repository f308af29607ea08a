//! Handler for global statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats::GlobalStatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns aggregate counters over all live links.
///
/// # Endpoint
///
/// `GET /stats` (public)
///
/// `uniqueUsers` counts distinct authenticated owners; anonymous links
/// contribute to the totals but not to the owner count.
pub async fn stats_handler(
    State(state): State<AppState>,
) -> Result<Json<GlobalStatsResponse>, AppError> {
    let counts = state.stats_service.global().await?;
    Ok(Json(counts.into()))
}
