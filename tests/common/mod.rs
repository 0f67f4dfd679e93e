#![allow(dead_code)]

use chrono::{DateTime, Utc};
use linkly::application::services::{AnalyticsService, LinkService};
use linkly::domain::click_event::ClickEvent;
use linkly::infrastructure::persistence::{PgClickRepository, PgLinkRepository};
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

pub async fn insert_link(pool: &PgPool, code: &str, url: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO links (code, original_url) VALUES ($1, $2) RETURNING id",
    )
    .bind(code)
    .bind(url)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_link_expiring_at(
    pool: &PgPool,
    code: &str,
    url: &str,
    expires_at: DateTime<Utc>,
) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO links (code, original_url, expires_at) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(code)
    .bind(url)
    .bind(expires_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_click(pool: &PgPool, link_id: Uuid) {
    sqlx::query("INSERT INTO link_clicks (link_id) VALUES ($1)")
        .bind(link_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn link_service(pool: PgPool) -> (LinkService, mpsc::Receiver<ClickEvent>) {
    let (tx, rx) = mpsc::channel(100);
    let repository = Arc::new(PgLinkRepository::new(Arc::new(pool)));

    (LinkService::new(repository, tx), rx)
}

pub fn analytics_service(pool: PgPool) -> AnalyticsService {
    let pool = Arc::new(pool);

    AnalyticsService::new(
        Arc::new(PgLinkRepository::new(pool.clone())),
        Arc::new(PgClickRepository::new(pool)),
    )
}
