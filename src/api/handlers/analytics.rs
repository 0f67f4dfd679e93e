//! Handlers for analytics endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::analytics::{LinkAnalyticsResponse, OverviewResponse};
use crate::api::dto::links::LinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the store-wide analytics dashboard payload.
///
/// # Endpoint
///
/// `GET /api/analytics`
///
/// Combines totals, the rounded per-link average, click counts for today,
/// the trailing week and the trailing month, the five most-clicked links,
/// the ten most recent clicks, and a 7-day click timeline. Day boundaries
/// are UTC.
pub async fn overview_handler(
    State(state): State<AppState>,
) -> Result<Json<OverviewResponse>, AppError> {
    let overview = state.analytics_service.overview().await?;

    let popular_links = overview
        .popular_links
        .iter()
        .cloned()
        .map(|link| {
            let short_url = state.short_url(&link.code);
            LinkResponse::new(link, short_url)
        })
        .collect();

    Ok(Json(OverviewResponse::new(overview, popular_links)))
}

/// Returns per-link analytics.
///
/// # Endpoint
///
/// `GET /api/analytics/{code}`
///
/// Includes the link itself, its 50 most recent click events, and a
/// link-scoped 7-day timeline.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn link_analytics_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<LinkAnalyticsResponse>, AppError> {
    let analytics = state.analytics_service.link_analytics(&code).await?;

    let short_url = state.short_url(&analytics.link.code);
    let link = LinkResponse::new(analytics.link.clone(), short_url);

    Ok(Json(LinkAnalyticsResponse::new(analytics, link)))
}
