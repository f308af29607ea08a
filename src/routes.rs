//! Top-level router configuration.
//!
//! # Route structure
//!
//! - `POST /shorten`  - Create a short link (public; identity optional)
//! - `GET  /urls`     - Caller's dashboard listing (identity required)
//! - `GET  /stats`    - Global aggregate counters (public)
//! - `GET  /u/{code}` - Short link redirect (public)
//! - `GET  /health`   - Health check: DB, click queue (public)
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Rate limiting** - per-IP token bucket (proxy-aware when configured)
//! - **Path normalization** - trailing slash handling

use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads the client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket
///   address; enable only behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::api_routes())
        .route("/u/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .with_state(state);

    let router = rate_limit::apply(router, behind_proxy).layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
