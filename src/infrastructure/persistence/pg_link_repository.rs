//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool, Row};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Link, LinkTotals, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

const LINK_COLUMNS: &str = "id, code, original_url, clicks, created_at, expires_at, owner_id";

#[derive(FromRow)]
struct LinkRow {
    id: Uuid,
    code: String,
    original_url: String,
    clicks: i64,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    owner_id: Option<String>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link {
            id: r.id,
            code: r.code,
            original_url: r.original_url,
            clicks: r.clicks,
            created_at: r.created_at,
            expires_at: r.expires_at,
            owner_id: r.owner_id,
        }
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Relies on the `links_code_key` unique constraint for code uniqueness and
/// on single-statement updates for counter atomicity.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "INSERT INTO links (code, original_url, expires_at, owner_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {LINK_COLUMNS}"
        ))
        .bind(&new_link.code)
        .bind(&new_link.original_url)
        .bind(new_link.expires_at)
        .bind(&new_link.owner_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE code = $1"
        ))
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError> {
        // Exact string match on the normalized URL; ordering makes the result
        // deterministic if duplicates ever exist.
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links
             WHERE original_url = $1
             ORDER BY created_at ASC
             LIMIT 1"
        ))
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn increment_clicks(&self, code: &str) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "UPDATE links SET clicks = clicks + 1
             WHERE code = $1
             RETURNING {LINK_COLUMNS}"
        ))
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Into::into).ok_or_else(|| {
            AppError::not_found("Short link not found", json!({ "code": code }))
        })
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links
             WHERE owner_id = $1
             ORDER BY created_at DESC"
        ))
        .bind(owner_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM links WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    async fn delete_by_code(&self, code: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM links WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ));
        }

        Ok(())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let result =
            sqlx::query("DELETE FROM links WHERE expires_at IS NOT NULL AND expires_at < $1")
                .bind(now)
                .execute(self.pool.as_ref())
                .await?;

        Ok(result.rows_affected())
    }

    async fn totals(&self) -> Result<LinkTotals, AppError> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS total_links, COALESCE(SUM(clicks), 0)::bigint AS total_clicks
             FROM links",
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(LinkTotals {
            total_links: row.try_get("total_links")?,
            total_clicks: row.try_get("total_clicks")?,
        })
    }

    async fn list_top(&self, limit: i64) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links
             ORDER BY clicks DESC, created_at ASC
             LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
