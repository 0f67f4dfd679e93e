//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};

use crate::domain::click_event::ClickMeta;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code against the link store
/// 2. Atomically increment the link's click counter
/// 3. Send a click event to the background worker (fire-and-forget)
/// 4. Return 307 Temporary Redirect
///
/// # Click Tracking
///
/// Click events are sent to a bounded channel for async processing.
/// If the queue is full, the click is dropped; the redirect still succeeds.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist or is malformed.
/// Returns 410 Gone if the link has expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let meta = ClickMeta::new(
        headers.get(header::REFERER).and_then(|v| v.to_str().ok()),
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok()),
    );

    let link = state.link_service.resolve_and_record(&code, meta).await?;

    Ok(Redirect::temporary(&link.original_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{AnalyticsService, LinkService, MaintenanceService};
    use crate::domain::entities::Link;
    use crate::domain::repositories::{LinkRepository, MockClickRepository, MockLinkRepository};
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum_test::TestServer;
    use chrono::{Duration, Utc};
    use std::sync::Arc;
    use tokio::sync::mpsc;
    use uuid::Uuid;

    fn test_server(mock_links: MockLinkRepository) -> TestServer {
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
            None,
        );

        let app = Router::new()
            .route("/{code}", get(redirect_handler))
            .with_state(state);

        TestServer::new(app).unwrap()
    }

    fn sample_link(code: &str) -> Link {
        Link {
            id: Uuid::new_v4(),
            code: code.to_string(),
            original_url: "https://example.com/landing".to_string(),
            clicks: 1,
            created_at: Utc::now(),
            expires_at: None,
            owner_id: None,
        }
    }

    #[tokio::test]
    async fn test_redirect_returns_307_with_location() {
        let mut mock_links = MockLinkRepository::new();
        mock_links
            .expect_find_by_code()
            .returning(|code| Ok(Some(sample_link(code))));
        mock_links
            .expect_increment_clicks()
            .returning(|code| Ok(sample_link(code)));

        let server = test_server(mock_links);

        let response = server.get("/abc123").await;

        response.assert_status(StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.header("location"), "https://example.com/landing");
    }

    #[tokio::test]
    async fn test_redirect_unknown_code_returns_404() {
        let mut mock_links = MockLinkRepository::new();
        mock_links.expect_find_by_code().returning(|_| Ok(None));

        let server = test_server(mock_links);

        let response = server.get("/zzz999").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_redirect_expired_link_returns_410() {
        let mut mock_links = MockLinkRepository::new();
        mock_links.expect_find_by_code().returning(|code| {
            let mut link = sample_link(code);
            link.expires_at = Some(Utc::now() - Duration::hours(1));
            Ok(Some(link))
        });

        let server = test_server(mock_links);

        let response = server.get("/old123").await;

        response.assert_status(StatusCode::GONE);
    }

    #[tokio::test]
    async fn test_redirect_malformed_code_returns_404() {
        // Codes shorter than the minimum never reach the repository.
        let mock_links = MockLinkRepository::new();

        let server = test_server(mock_links);

        let response = server.get("/ab").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
