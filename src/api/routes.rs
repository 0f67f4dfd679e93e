//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_by_id_handler, delete_link_handler, get_link_handler,
    link_analytics_handler, list_links_handler, overview_handler, sweep_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST   /links`              - Create a short link
/// - `GET    /links`              - List links (optionally filtered by owner)
/// - `GET    /links/{code}`       - Link metadata without click side effects
/// - `DELETE /links/{code}`       - Delete a link by short code
/// - `DELETE /links/by-id/{id}`   - Delete a link by id
/// - `GET    /analytics`          - Store-wide analytics dashboard
/// - `GET    /analytics/{code}`   - Per-link analytics
/// - `POST   /maintenance/sweep`  - Delete expired links (secret required)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{code}",
            get(get_link_handler).delete(delete_link_handler),
        )
        .route("/links/by-id/{id}", delete(delete_link_by_id_handler))
        .route("/analytics", get(overview_handler))
        .route("/analytics/{code}", get(link_analytics_handler))
        .route("/maintenance/sweep", post(sweep_handler))
}
