//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::Link;

/// Request to create a short link.
///
/// The URL is normalized server-side: bare hostnames like `example.com` are
/// accepted and upgraded to `https://example.com`. Format validation happens
/// after normalization.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(length(min = 1, max = 2048, message = "URL must be between 1 and 2048 characters"))]
    pub url: String,

    /// Optional expiry timestamp. After this time, the link returns 410 Gone.
    pub expires_at: Option<DateTime<Utc>>,

    /// Optional opaque owner identifier for listing scoped to one creator.
    #[validate(length(max = 128))]
    pub owner_id: Option<String>,
}

/// Query parameters for the link listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListLinksQuery {
    pub owner_id: Option<String>,
}

/// A single link as returned by the API.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: Uuid,
    pub code: String,
    pub original_url: String,
    pub short_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}

impl LinkResponse {
    pub fn new(link: Link, short_url: String) -> Self {
        Self {
            id: link.id,
            code: link.code,
            original_url: link.original_url,
            short_url,
            clicks: link.clicks,
            created_at: link.created_at,
            expires_at: link.expires_at,
            owner_id: link.owner_id,
        }
    }
}

/// Response for the link listing endpoint.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub total: usize,
    pub links: Vec<LinkResponse>,
}
