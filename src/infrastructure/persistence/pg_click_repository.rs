//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Row};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Click, NewClick, RecentClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct ClickRow {
    id: Uuid,
    link_id: Uuid,
    clicked_at: DateTime<Utc>,
    referrer: Option<String>,
    user_agent: Option<String>,
}

impl From<ClickRow> for Click {
    fn from(r: ClickRow) -> Self {
        Click {
            id: r.id,
            link_id: r.link_id,
            clicked_at: r.clicked_at,
            referrer: r.referrer,
            user_agent: r.user_agent,
        }
    }
}

#[derive(FromRow)]
struct RecentClickRow {
    id: Uuid,
    clicked_at: DateTime<Utc>,
    referrer: Option<String>,
    code: String,
    original_url: String,
}

/// PostgreSQL repository for the append-only click event log.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        let row = sqlx::query_as::<_, ClickRow>(
            "INSERT INTO link_clicks (link_id, referrer, user_agent)
             VALUES ($1, $2, $3)
             RETURNING id, link_id, clicked_at, referrer, user_agent",
        )
        .bind(new_click.link_id)
        .bind(&new_click.referrer)
        .bind(&new_click.user_agent)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn count_in_range(
        &self,
        link_id: Option<Uuid>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS count
             FROM link_clicks
             WHERE ($1::uuid IS NULL OR link_id = $1)
               AND clicked_at >= $2
               AND clicked_at < $3",
        )
        .bind(link_id)
        .bind(start)
        .bind(end)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.try_get("count")?)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<RecentClick>, AppError> {
        // Inner join drops events whose link has been deleted.
        let rows = sqlx::query_as::<_, RecentClickRow>(
            "SELECT c.id, c.clicked_at, c.referrer, l.code, l.original_url
             FROM link_clicks c
             JOIN links l ON l.id = c.link_id
             ORDER BY c.clicked_at DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| RecentClick {
                id: r.id,
                clicked_at: r.clicked_at,
                referrer: r.referrer,
                code: r.code,
                original_url: r.original_url,
            })
            .collect())
    }

    async fn list_recent_for_link(
        &self,
        link_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Click>, AppError> {
        let rows = sqlx::query_as::<_, ClickRow>(
            "SELECT id, link_id, clicked_at, referrer, user_agent
             FROM link_clicks
             WHERE link_id = $1
             ORDER BY clicked_at DESC
             LIMIT $2",
        )
        .bind(link_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
