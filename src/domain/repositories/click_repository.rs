//! Repository trait for the append-only click event log.

use crate::domain::entities::{Click, NewClick, RecentClick};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Repository interface for click tracking.
///
/// Events are append-only: never updated, and deleted only if an operator
/// cleans them up out of band. Reads that join against links skip orphaned
/// events whose link has been deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends a new click event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. Callers on the
    /// redirect path must treat this as best-effort and never propagate it.
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Counts events in `[start, end)`, optionally scoped to one link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_in_range(
        &self,
        link_id: Option<Uuid>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, AppError>;

    /// Lists the most recent events across all links, newest first, annotated
    /// with the parent link's code and destination. Orphaned events are
    /// excluded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<RecentClick>, AppError>;

    /// Lists the most recent events for one link, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_recent_for_link(
        &self,
        link_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Click>, AppError>;
}
