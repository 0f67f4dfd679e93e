//! DTOs for the maintenance sweep endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query parameters for the sweep endpoint.
///
/// The secret may also be supplied as a `Bearer` token in the
/// `Authorization` header.
#[derive(Debug, Deserialize)]
pub struct SweepQuery {
    pub secret: Option<String>,
}

/// Response for `POST /api/maintenance/sweep`.
#[derive(Debug, Serialize)]
pub struct SweepResponse {
    pub deleted_count: u64,
    pub timestamp: DateTime<Utc>,
}
