//! Handlers for link management endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, LinkListResponse, LinkResponse, ListLinksQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "expires_at": "2026-01-01T00:00:00Z",  // optional
///   "owner_id": "alice"                     // optional
/// }
/// ```
///
/// Submitting a URL that already has a link returns the existing link with
/// 200 OK instead of creating a duplicate; a fresh link returns 201 Created.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or the URL is malformed.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let outcome = state
        .link_service
        .create_short_link(&payload.url, payload.expires_at, payload.owner_id)
        .await?;

    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    let short_url = state.short_url(&outcome.link.code);

    Ok((status, Json(LinkResponse::new(outcome.link, short_url))))
}

/// Lists links, newest first.
///
/// # Endpoint
///
/// `GET /api/links` or `GET /api/links?owner_id=alice`
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(query): Query<ListLinksQuery>,
) -> Result<Json<LinkListResponse>, AppError> {
    let links = match query.owner_id {
        Some(owner_id) => state.link_service.list_links_by_owner(&owner_id).await?,
        None => state.link_service.list_links().await?,
    };

    let links: Vec<LinkResponse> = links
        .into_iter()
        .map(|link| {
            let short_url = state.short_url(&link.code);
            LinkResponse::new(link, short_url)
        })
        .collect();

    Ok(Json(LinkListResponse {
        total: links.len(),
        links,
    }))
}

/// Returns link metadata without touching the click counter.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn get_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link_info(&code).await?;
    let short_url = state.short_url(&link.code);

    Ok(Json(LinkResponse::new(link, short_url)))
}

/// Permanently deletes a link by short code.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link_by_code(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Permanently deletes a link by id.
///
/// # Endpoint
///
/// `DELETE /api/links/by-id/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no link has that id.
pub async fn delete_link_by_id_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link_by_id(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::api;
    use crate::application::services::{AnalyticsService, LinkService, MaintenanceService};
    use crate::domain::entities::Link;
    use crate::domain::repositories::{LinkRepository, MockClickRepository, MockLinkRepository};
    use crate::error::AppError;
    use crate::state::AppState;
    use axum::Router;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::Utc;
    use serde_json::json;
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
            .nest("/api", api::routes::api_routes())
            .with_state(state);

        TestServer::new(app).unwrap()
    }

    fn sample_link(code: &str, url: &str) -> Link {
        Link {
            id: Uuid::new_v4(),
            code: code.to_string(),
            original_url: url.to_string(),
            clicks: 0,
            created_at: Utc::now(),
            expires_at: None,
            owner_id: None,
        }
    }

    #[tokio::test]
    async fn test_create_link_returns_201_with_short_url() {
        let mut mock_links = MockLinkRepository::new();
        mock_links
            .expect_find_by_original_url()
            .returning(|_| Ok(None));
        mock_links
            .expect_create()
            .returning(|new_link| Ok(sample_link(&new_link.code, &new_link.original_url)));

        let server = test_server(mock_links);

        let response = server
            .post("/api/links")
            .json(&json!({ "url": "https://example.com/page" }))
            .await;

        response.assert_status(StatusCode::CREATED);

        let body: serde_json::Value = response.json();
        assert_eq!(body["original_url"], "https://example.com/page");
        let code = body["code"].as_str().unwrap();
        assert_eq!(
            body["short_url"],
            format!("https://s.example.com/{}", code)
        );
    }

    #[tokio::test]
    async fn test_create_existing_url_returns_200() {
        let mut mock_links = MockLinkRepository::new();
        let existing = sample_link("dup123", "https://example.com/page");
        mock_links
            .expect_find_by_original_url()
            .returning(move |_| Ok(Some(existing.clone())));
        mock_links.expect_create().times(0);

        let server = test_server(mock_links);

        let response = server
            .post("/api/links")
            .json(&json!({ "url": "https://example.com/page" }))
            .await;

        response.assert_status(StatusCode::OK);

        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "dup123");
    }

    #[tokio::test]
    async fn test_create_link_rejects_invalid_url() {
        let mock_links = MockLinkRepository::new();

        let server = test_server(mock_links);

        let response = server
            .post("/api/links")
            .json(&json!({ "url": "not a url at all" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_links_filters_by_owner() {
        let mut mock_links = MockLinkRepository::new();
        mock_links.expect_list_by_owner().returning(|owner| {
            let mut link = sample_link("own111", "https://example.com");
            link.owner_id = Some(owner.to_string());
            Ok(vec![link])
        });

        let server = test_server(mock_links);

        let response = server.get("/api/links?owner_id=alice").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["total"], 1);
        assert_eq!(body["links"][0]["owner_id"], "alice");
    }

    #[tokio::test]
    async fn test_delete_link_returns_204() {
        let mut mock_links = MockLinkRepository::new();
        mock_links.expect_delete_by_code().returning(|_| Ok(()));

        let server = test_server(mock_links);

        let response = server.delete("/api/links/abc123").await;

        response.assert_status(StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_delete_unknown_link_returns_404() {
        let mut mock_links = MockLinkRepository::new();
        mock_links.expect_delete_by_code().returning(|code| {
            Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ))
        });

        let server = test_server(mock_links);

        let response = server.delete("/api/links/zzz999").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
