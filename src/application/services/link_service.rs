//! Link creation, resolution, and management service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use metrics::counter;
use serde_json::json;
use tokio::sync::mpsc;
use tracing::warn;
use uuid::Uuid;

use crate::domain::click_event::{ClickEvent, ClickMeta};
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{is_code_conflict, AppError};
use crate::utils::code_generator::{
    generate_code, DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH, MIN_CODE_LENGTH,
};
use crate::utils::url_normalizer::{normalize_url, validate_url};

/// Insert attempts before code generation is declared exhausted.
///
/// At 62^6 combinations repeated exhaustion indicates a bug or adversarial
/// load, not bad luck.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Result of a create call, distinguishing a fresh insert from a
/// de-duplication hit.
#[derive(Debug, Clone)]
pub struct CreatedLink {
    pub link: Link,
    /// False when an existing link for the same normalized URL was returned
    /// instead of inserting a new one.
    pub created: bool,
}

/// Service for creating, resolving, and managing shortened links.
///
/// Owns the creation path (normalize, validate, de-duplicate, generate) and
/// the redirect path (lookup, expiry check, atomic counter increment,
/// best-effort click event).
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    click_sender: mpsc::Sender<ClickEvent>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        click_sender: mpsc::Sender<ClickEvent>,
    ) -> Self {
        Self {
            link_repository,
            click_sender,
        }
    }

    /// Creates a short link for a destination URL.
    ///
    /// # De-duplication
    ///
    /// Calling this twice with the same (normalized) URL returns the same
    /// link both times; no new code is consumed. The outcome's `created`
    /// flag tells the two cases apart.
    ///
    /// # Code generation
    ///
    /// Generates a 6-character alphanumeric code and inserts it. The store's
    /// unique constraint arbitrates races: on a code conflict a fresh code is
    /// generated, up to 10 attempts, after which a terminal internal error is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the URL is not an absolute
    /// HTTP(S) URL. Returns [`AppError::Internal`] when generation attempts
    /// are exhausted or on database errors.
    pub async fn create_short_link(
        &self,
        raw_url: &str,
        expires_at: Option<DateTime<Utc>>,
        owner_id: Option<String>,
    ) -> Result<CreatedLink, AppError> {
        let normalized_url = normalize_url(raw_url);

        validate_url(&normalized_url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        if let Some(existing_link) = self
            .link_repository
            .find_by_original_url(&normalized_url)
            .await?
        {
            return Ok(CreatedLink {
                link: existing_link,
                created: false,
            });
        }

        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let new_link = NewLink {
                code: generate_code(DEFAULT_CODE_LENGTH),
                original_url: normalized_url.clone(),
                expires_at,
                owner_id: owner_id.clone(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => {
                    return Ok(CreatedLink {
                        link,
                        created: true,
                    })
                }
                Err(e) if is_code_conflict(&e) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate a unique short code",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }

    /// Resolves a short code, counts the click, and returns the link.
    ///
    /// The counter increment is the authoritative click signal and happens
    /// atomically in the store. The click event append is fire-and-forget
    /// through the worker channel: a full or closed queue is logged and never
    /// fails the redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for codes outside the accepted length
    /// class (without touching the store), for unknown codes, and for links
    /// deleted concurrently with the click. Returns [`AppError::Gone`] for
    /// expired links; their counter is untouched and no event is recorded.
    pub async fn resolve_and_record(
        &self,
        code: &str,
        meta: ClickMeta,
    ) -> Result<Link, AppError> {
        if code.len() < MIN_CODE_LENGTH || code.len() > MAX_CODE_LENGTH {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ));
        }

        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "code": code }))
            })?;

        if link.is_expired() {
            return Err(AppError::gone(
                "This link has expired",
                json!({ "code": code, "expired_at": link.expires_at }),
            ));
        }

        let link = self.link_repository.increment_clicks(code).await?;

        let event = ClickEvent::new(link.id, meta);
        if let Err(e) = self.click_sender.try_send(event) {
            counter!("clicks_dropped_total").increment(1);
            warn!(code, error = %e, "click queue rejected event");
        }

        Ok(link)
    }

    /// Retrieves a link by short code without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no link matches the code.
    pub async fn get_link_info(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Lists all links, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_all().await
    }

    /// Lists links for one owner identifier, newest first.
    pub async fn list_links_by_owner(&self, owner_id: &str) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_by_owner(owner_id).await
    }

    /// Permanently deletes a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no link has that id.
    pub async fn delete_link_by_id(&self, id: Uuid) -> Result<(), AppError> {
        self.link_repository.delete_by_id(id).await
    }

    /// Permanently deletes a link by short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no link has that code.
    pub async fn delete_link_by_code(&self, code: &str) -> Result<(), AppError> {
        self.link_repository.delete_by_code(code).await
    }
}
