//! Read-side analytics over the link store and the click log.

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde_json::json;

use crate::domain::entities::{Click, Link, LinkTotals, RecentClick};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;

/// Trailing days covered by click timelines.
const TIMELINE_DAYS: i64 = 7;
/// Links in the "most popular" list.
const POPULAR_LIMIT: i64 = 5;
/// Events in the global recent-clicks list.
const RECENT_LIMIT: i64 = 10;
/// Events in a single link's recent-clicks list.
const LINK_RECENT_LIMIT: i64 = 50;

/// Aggregate click counters for the whole store.
#[derive(Debug, Clone)]
pub struct OverviewStats {
    pub total_links: i64,
    pub total_clicks: i64,
    /// `round(total_clicks / total_links)`, 0 when the store is empty.
    pub avg_clicks: i64,
    pub clicks_today: i64,
    pub clicks_this_week: i64,
    pub clicks_this_month: i64,
}

/// One calendar-day bucket of a click timeline. Day boundaries are UTC.
#[derive(Debug, Clone)]
pub struct TimelinePoint {
    /// ISO date of the bucket start (`YYYY-MM-DD`).
    pub date: String,
    pub clicks: i64,
}

/// Dashboard payload combining totals, top links, recent clicks, and the
/// trailing 7-day timeline.
#[derive(Debug, Clone)]
pub struct AnalyticsOverview {
    pub stats: OverviewStats,
    pub popular_links: Vec<Link>,
    pub recent_clicks: Vec<RecentClick>,
    pub timeline: Vec<TimelinePoint>,
}

/// Per-link analytics payload.
#[derive(Debug, Clone)]
pub struct LinkAnalytics {
    pub link: Link,
    pub recent_clicks: Vec<Click>,
    pub timeline: Vec<TimelinePoint>,
}

/// Service deriving statistics and time series from the store and the click
/// log. Strictly read-only; counters and events are never mutated here.
///
/// The link counters and the event log are written without a linking
/// transaction, so totals computed from counters and timelines computed from
/// events can diverge slightly. That skew is accepted.
pub struct AnalyticsService {
    link_repository: Arc<dyn LinkRepository>,
    click_repository: Arc<dyn ClickRepository>,
}

impl AnalyticsService {
    /// Creates a new analytics service.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        click_repository: Arc<dyn ClickRepository>,
    ) -> Self {
        Self {
            link_repository,
            click_repository,
        }
    }

    /// Store-wide totals. Also serves as a cheap database liveness probe.
    pub async fn totals(&self) -> Result<LinkTotals, AppError> {
        self.link_repository.totals().await
    }

    /// Builds the full analytics overview.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn overview(&self) -> Result<AnalyticsOverview, AppError> {
        let now = Utc::now();
        let today_start = day_start(now);

        let totals = self.link_repository.totals().await?;

        let clicks_today = self
            .click_repository
            .count_in_range(None, today_start, now)
            .await?;
        let clicks_this_week = self
            .click_repository
            .count_in_range(None, today_start - Duration::days(7), now)
            .await?;
        let clicks_this_month = self
            .click_repository
            .count_in_range(None, today_start - Duration::days(30), now)
            .await?;

        let popular_links = self.link_repository.list_top(POPULAR_LIMIT).await?;
        let recent_clicks = self.click_repository.list_recent(RECENT_LIMIT).await?;
        let timeline = self.timeline(None, now).await?;

        Ok(AnalyticsOverview {
            stats: OverviewStats {
                total_links: totals.total_links,
                total_clicks: totals.total_clicks,
                avg_clicks: average(totals),
                clicks_today,
                clicks_this_week,
                clicks_this_month,
            },
            popular_links,
            recent_clicks,
            timeline,
        })
    }

    /// Builds the analytics payload for one short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no link matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn link_analytics(&self, code: &str) -> Result<LinkAnalytics, AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "code": code }))
            })?;

        let recent_clicks = self
            .click_repository
            .list_recent_for_link(link.id, LINK_RECENT_LIMIT)
            .await?;
        let timeline = self.timeline(Some(link.id), Utc::now()).await?;

        Ok(LinkAnalytics {
            link,
            recent_clicks,
            timeline,
        })
    }

    /// Counts events per UTC calendar day over the trailing window, oldest
    /// bucket first, today last.
    async fn timeline(
        &self,
        link_id: Option<uuid::Uuid>,
        now: DateTime<Utc>,
    ) -> Result<Vec<TimelinePoint>, AppError> {
        let today_start = day_start(now);
        let mut points = Vec::with_capacity(TIMELINE_DAYS as usize);

        for i in (0..TIMELINE_DAYS).rev() {
            let bucket_start = today_start - Duration::days(i);
            let bucket_end = bucket_start + Duration::days(1);

            let clicks = self
                .click_repository
                .count_in_range(link_id, bucket_start, bucket_end)
                .await?;

            points.push(TimelinePoint {
                date: bucket_start.format("%Y-%m-%d").to_string(),
                clicks,
            });
        }

        Ok(points)
    }
}

fn day_start(at: DateTime<Utc>) -> DateTime<Utc> {
    at.date_naive().and_time(NaiveTime::MIN).and_utc()
}

fn average(totals: LinkTotals) -> i64 {
    if totals.total_links == 0 {
        0
    } else {
        (totals.total_clicks as f64 / totals.total_links as f64).round() as i64
    }
}
