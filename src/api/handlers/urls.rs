//! Handler for the per-owner dashboard listing.

use axum::{Json, extract::State};

use crate::api::dto::urls::OwnerUrlsResponse;
use crate::api::middleware::identity::RequireCaller;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all links owned by the authenticated caller, newest first.
///
/// # Endpoint
///
/// `GET /urls`
///
/// # Errors
///
/// Returns `401 Unauthorized` when no caller identity is present.
pub async fn urls_handler(
    State(state): State<AppState>,
    RequireCaller(owner_id): RequireCaller,
) -> Result<Json<OwnerUrlsResponse>, AppError> {
    let stats = state.stats_service.for_owner(&owner_id).await?;
    Ok(Json(stats.into()))
}
