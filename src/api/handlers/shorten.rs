//! Handler for the shorten endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::middleware::identity::Caller;
use crate::application::services::ShortenOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for the submitted URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// Caller identity is optional: authenticated submissions become
/// permanent owned links, anonymous ones expire after the configured TTL.
///
/// # Responses
///
/// - `201 {shortCode, shortUrl, originalUrl}` — new record created
/// - `200 {shortCode, shortUrl, originalUrl}` — the (url, owner) pair was
///   already shortened; the existing record is returned unchanged
/// - `400` — missing or invalid URL
pub async fn shorten_handler(
    State(state): State<AppState>,
    Caller(owner_id): Caller,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    // A body without "url" takes the same validation path as an empty
    // one, so the client gets the structured 400 either way.
    let raw_url = payload.url.as_deref().unwrap_or_default();
    let outcome = state.link_service.shorten(raw_url, owner_id).await?;

    let status = match &outcome {
        ShortenOutcome::Created(_) => StatusCode::CREATED,
        ShortenOutcome::Existing(_) => StatusCode::OK,
    };

    Ok((
        status,
        Json(ShortenResponse::from_link(outcome.link(), &state.base_url)),
    ))
}
