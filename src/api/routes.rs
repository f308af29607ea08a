//! API route table.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{shorten_handler, stats_handler, urls_handler};
use crate::state::AppState;

/// JSON API routes.
///
/// # Endpoints
///
/// - `POST /shorten` — create a short link (identity optional)
/// - `GET  /urls`    — caller's dashboard listing (identity required)
/// - `GET  /stats`   — global aggregate counters (public)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(urls_handler))
        .route("/stats", get(stats_handler))
}
