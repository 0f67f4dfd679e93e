mod common;

use chrono::{Duration, Utc};
use linkly::domain::click_event::{ClickEvent, ClickMeta};
use linkly::domain::click_worker::run_click_worker;
use linkly::domain::entities::NewClick;
use linkly::domain::repositories::{ClickRepository, LinkRepository};
use linkly::infrastructure::persistence::{PgClickRepository, PgLinkRepository};
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;

#[sqlx::test]
async fn test_record_and_count_in_range(pool: PgPool) {
    let link_id = common::insert_link(&pool, "clk001", "https://example.com").await;
    let repo = PgClickRepository::new(Arc::new(pool));

    let click = repo
        .record(NewClick {
            link_id,
            referrer: Some("https://ref.example.com".to_string()),
            user_agent: None,
        })
        .await
        .unwrap();

    assert_eq!(click.link_id, link_id);
    assert_eq!(click.referrer.as_deref(), Some("https://ref.example.com"));

    let now = Utc::now();
    let count = repo
        .count_in_range(Some(link_id), now - Duration::hours(1), now + Duration::hours(1))
        .await
        .unwrap();
    assert_eq!(count, 1);

    // A window that ends before the event excludes it.
    let count = repo
        .count_in_range(Some(link_id), now - Duration::hours(2), now - Duration::hours(1))
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test]
async fn test_list_recent_excludes_orphaned_events(pool: PgPool) {
    let link_id = common::insert_link(&pool, "orp001", "https://example.com").await;
    common::insert_click(&pool, link_id).await;

    let pool = Arc::new(pool);
    let clicks = PgClickRepository::new(pool.clone());
    let links = PgLinkRepository::new(pool);

    assert_eq!(clicks.list_recent(10).await.unwrap().len(), 1);

    // Deleting the link orphans the event; joined reads must skip it.
    links.delete_by_id(link_id).await.unwrap();

    assert!(clicks.list_recent(10).await.unwrap().is_empty());

    // The raw event row still exists for link-scoped range counts.
    let now = Utc::now();
    let count = clicks
        .count_in_range(Some(link_id), now - Duration::hours(1), now + Duration::hours(1))
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test]
async fn test_click_worker_persists_queued_events(pool: PgPool) {
    let link_id = common::insert_link(&pool, "wrk001", "https://example.com").await;
    let repo = Arc::new(PgClickRepository::new(Arc::new(pool)));

    let (tx, rx) = mpsc::channel(16);
    let worker = tokio::spawn(run_click_worker(rx, repo.clone()));

    tx.send(ClickEvent::new(
        link_id,
        ClickMeta::new(Some("https://ref.example.com"), Some("curl/8.0")),
    ))
    .await
    .unwrap();
    tx.send(ClickEvent::new(link_id, ClickMeta::default()))
        .await
        .unwrap();
    drop(tx);

    worker.await.unwrap();

    let events = repo.list_recent_for_link(link_id, 10).await.unwrap();
    assert_eq!(events.len(), 2);
}
