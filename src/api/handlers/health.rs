//! Handler for the health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health with per-component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response codes
///
/// - `200 OK` — database reachable and click queue open
/// - `503 Service Unavailable` — one or more components degraded
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;
    let queue_check = check_click_queue(&state);

    let all_healthy = db_check.status == "ok" && queue_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            click_queue: queue_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Probes the store through a cheap aggregate query.
async fn check_database(state: &AppState) -> CheckStatus {
    match state.stats_service.global().await {
        Ok(counts) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Connected, {} live links", counts.total_urls)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Database error: {e}")),
        },
    }
}

/// Checks whether the click tracking queue is still accepting events.
fn check_click_queue(state: &AppState) -> CheckStatus {
    if state.click_sender.is_closed() {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Click queue is closed".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Capacity: {}", state.click_sender.capacity())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{GlobalCounts, MockLinkRepository, MockStatsRepository};
    use crate::state::test_support::state_with_mocks;
    use axum::{Router, routing::get};
    use axum_test::TestServer;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_health_ok_when_components_up() {
        let mut repo = MockStatsRepository::new();
        repo.expect_global_counts()
            .returning(|| Ok(GlobalCounts::default()));

        let (state, _rx) =
            state_with_mocks(Arc::new(MockLinkRepository::new()), Arc::new(repo));
        let app = Router::new()
            .route("/health", get(health_handler))
            .with_state(state);
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["checks"]["database"]["status"], "ok");
        assert_eq!(body["checks"]["click_queue"]["status"], "ok");
    }

    #[tokio::test]
    async fn test_health_degraded_on_database_failure() {
        let mut repo = MockStatsRepository::new();
        repo.expect_global_counts().returning(|| {
            Err(crate::error::AppError::internal(
                "Database error",
                serde_json::json!({}),
            ))
        });

        let (state, _rx) =
            state_with_mocks(Arc::new(MockLinkRepository::new()), Arc::new(repo));
        let app = Router::new()
            .route("/health", get(health_handler))
            .with_state(state);
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["checks"]["database"]["status"], "error");
    }
}
