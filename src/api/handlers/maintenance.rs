//! Handler for the maintenance sweep endpoint.

use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, header},
};
use chrono::Utc;
use serde_json::json;

use crate::api::dto::maintenance::{SweepQuery, SweepResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Deletes all expired links and reports how many were removed.
///
/// # Endpoint
///
/// `POST /api/maintenance/sweep`
///
/// # Authentication
///
/// Requires the configured sweep secret, supplied either as a `secret`
/// query parameter or as a `Bearer` token in the `Authorization` header.
/// When no secret is configured the endpoint always returns 401.
///
/// # Response
///
/// ```json
/// {
///   "deleted_count": 12,
///   "timestamp": "2026-08-28T03:00:00Z"
/// }
/// ```
pub async fn sweep_handler(
    State(state): State<AppState>,
    Query(query): Query<SweepQuery>,
    headers: HeaderMap,
) -> Result<Json<SweepResponse>, AppError> {
    authorize_sweep(&state, &query, &headers)?;

    let now = Utc::now();
    let deleted_count = state.maintenance_service.sweep(now).await?;

    Ok(Json(SweepResponse {
        deleted_count,
        timestamp: now,
    }))
}

fn authorize_sweep(
    state: &AppState,
    query: &SweepQuery,
    headers: &HeaderMap,
) -> Result<(), AppError> {
    let Some(expected) = state.sweep_secret.as_deref() else {
        return Err(AppError::unauthorized(
            "Maintenance endpoint is disabled",
            json!({}),
        ));
    };

    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    let supplied = query.secret.as_deref().or(bearer);

    if supplied != Some(expected) {
        return Err(AppError::unauthorized("Invalid sweep secret", json!({})));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::api;
    use crate::application::services::{AnalyticsService, LinkService, MaintenanceService};
    use crate::domain::repositories::{LinkRepository, MockClickRepository, MockLinkRepository};
    use crate::state::AppState;
    use axum::Router;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn test_server(mock_links: MockLinkRepository, sweep_secret: Option<&str>) -> TestServer {
        let link_repository: Arc<dyn LinkRepository> = Arc::new(mock_links);
        let click_repository = Arc::new(MockClickRepository::new());
        let (click_tx, _click_rx) = mpsc::channel(16);

        let state = AppState::new(
            Arc::new(LinkService::new(link_repository.clone(), click_tx.clone())),
            Arc::new(AnalyticsService::new(
                link_repository.clone(),
                click_repository,
            )),
            Arc::new(MaintenanceService::new(link_repository)),
            click_tx,
            "https://s.example.com".to_string(),
            sweep_secret.map(str::to_string),
        );

        let app = Router::new()
            .nest("/api", api::routes::api_routes())
            .with_state(state);

        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_sweep_with_query_secret() {
        let mut mock_links = MockLinkRepository::new();
        mock_links.expect_delete_expired().returning(|_| Ok(4));

        let server = test_server(mock_links, Some("hunter2"));

        let response = server.post("/api/maintenance/sweep?secret=hunter2").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["deleted_count"], 4);
    }

    #[tokio::test]
    async fn test_sweep_with_bearer_token() {
        let mut mock_links = MockLinkRepository::new();
        mock_links.expect_delete_expired().returning(|_| Ok(0));

        let server = test_server(mock_links, Some("hunter2"));

        let response = server
            .post("/api/maintenance/sweep")
            .add_header("authorization", "Bearer hunter2")
            .await;

        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_sweep_rejects_wrong_secret() {
        let mock_links = MockLinkRepository::new();

        let server = test_server(mock_links, Some("hunter2"));

        let response = server.post("/api/maintenance/sweep?secret=wrong").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_sweep_disabled_without_configured_secret() {
        let mock_links = MockLinkRepository::new();

        let server = test_server(mock_links, None);

        let response = server.post("/api/maintenance/sweep?secret=anything").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }
}
