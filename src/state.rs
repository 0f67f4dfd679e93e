//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{AnalyticsService, LinkService, MaintenanceService};
use crate::domain::click_event::ClickEvent;

/// Shared state available to every handler.
///
/// Services are behind `Arc` so the state stays cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub analytics_service: Arc<AnalyticsService>,
    pub maintenance_service: Arc<MaintenanceService>,
    pub click_sender: mpsc::Sender<ClickEvent>,
    /// Public base URL short links are rendered under, e.g. `https://s.example.com`.
    pub base_url: String,
    /// Shared secret guarding the maintenance endpoint. `None` disables the
    /// endpoint entirely.
    pub sweep_secret: Option<String>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        analytics_service: Arc<AnalyticsService>,
        maintenance_service: Arc<MaintenanceService>,
        click_sender: mpsc::Sender<ClickEvent>,
        base_url: String,
        sweep_secret: Option<String>,
    ) -> Self {
        Self {
            link_service,
            analytics_service,
            maintenance_service,
            click_sender,
            base_url,
            sweep_secret,
        }
    }

    /// Renders the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
