//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /u/{shortCode}`
///
/// Answers `302 Found` with the original URL in the `Location` header.
/// The click increment happens asynchronously in the background worker;
/// the redirect is never delayed by counter durability.
///
/// # Errors
///
/// Returns `404 Not Found` if the code is unknown or expired.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target = state.redirect_service.resolve(&short_code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, target)]).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::click_event::ClickEvent;
    use crate::domain::entities::Link;
    use crate::domain::repositories::{MockLinkRepository, MockStatsRepository};
    use crate::state::test_support::state_with_mocks;
    use axum::{Router, routing::get};
    use axum_test::TestServer;
    use chrono::Utc;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn test_server(link_repo: MockLinkRepository) -> (TestServer, mpsc::Receiver<ClickEvent>) {
        let (state, rx) = state_with_mocks(Arc::new(link_repo), Arc::new(MockStatsRepository::new()));
        let app = Router::new()
            .route("/u/{code}", get(redirect_handler))
            .with_state(state);
        (TestServer::new(app).unwrap(), rx)
    }

    #[tokio::test]
    async fn test_redirect_found_with_location_header() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_live_by_code()
            .withf(|code| code == "abcd1234")
            .returning(|code| {
                Ok(Some(Link {
                    id: 1,
                    short_code: code.to_string(),
                    original_url: "https://example.com".to_string(),
                    owner_id: None,
                    clicks: 0,
                    created_at: Utc::now(),
                    expires_at: Some(Utc::now() + chrono::Duration::minutes(5)),
                }))
            });

        let (server, mut rx) = test_server(repo);
        let response = server.get("/u/abcd1234").await;

        response.assert_status(StatusCode::FOUND);
        assert_eq!(response.header("location"), "https://example.com");

        // Exactly one click event queued for the worker.
        let event = rx.try_recv().unwrap();
        assert_eq!(event.short_code, "abcd1234");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_redirect_unknown_code_returns_404() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_live_by_code().returning(|_| Ok(None));

        let (server, mut rx) = test_server(repo);
        let response = server.get("/u/doesnot1").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"]["code"], "not_found");
        assert!(rx.try_recv().is_err());
    }
}
