//! Repository trait for short link data access.

use crate::domain::entities::{Link, LinkTotals, NewLink};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Repository interface for managing short links.
///
/// Uniqueness of the short code is enforced by the storage layer itself;
/// callers react to conflicts, they do not pre-check.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the code already exists; the
    /// insert is atomic, so a race between two creators picking the same
    /// code resolves to exactly one winner.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code. Exact, case-sensitive match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its destination URL. Exact string match, used for
    /// de-duplication at creation time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments the click counter and returns the updated link.
    ///
    /// The increment is a single conditional update at the storage layer, so
    /// concurrent increments on the same code are all reflected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no row matches the code, e.g. the
    /// link was deleted concurrently with the click.
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_clicks(&self, code: &str) -> Result<Link, AppError>;

    /// Lists all links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;

    /// Lists links created with the given owner identifier, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Link>, AppError>;

    /// Permanently deletes a link by id. No soft-delete.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no link has that id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), AppError>;

    /// Permanently deletes a link by short code. No soft-delete.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no link has that code.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_code(&self, code: &str) -> Result<(), AppError>;

    /// Bulk-deletes every link whose expiry is set and earlier than `now`.
    ///
    /// Returns the number of links deleted. Row-level deletion semantics make
    /// this safe to run concurrently with creation and redirect traffic.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError>;

    /// Returns the link count and the sum of all click counters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn totals(&self) -> Result<LinkTotals, AppError>;

    /// Lists the top `limit` links by click count, descending, ties broken by
    /// creation time so the order is stable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_top(&self, limit: i64) -> Result<Vec<Link>, AppError>;
}
