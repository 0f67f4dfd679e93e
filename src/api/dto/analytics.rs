//! DTOs for analytics endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::application::services::analytics_service::{
    AnalyticsOverview, LinkAnalytics, TimelinePoint,
};
use crate::domain::entities::{Click, RecentClick};

use super::links::LinkResponse;

/// Aggregate click counters for the dashboard.
#[derive(Debug, Serialize)]
pub struct OverviewStatsDto {
    pub total_links: i64,
    pub total_clicks: i64,
    pub avg_clicks: i64,
    pub clicks_today: i64,
    pub clicks_this_week: i64,
    pub clicks_this_month: i64,
}

/// One day of a click timeline.
#[derive(Debug, Serialize)]
pub struct TimelinePointDto {
    pub date: String,
    pub clicks: i64,
}

impl From<TimelinePoint> for TimelinePointDto {
    fn from(p: TimelinePoint) -> Self {
        Self {
            date: p.date,
            clicks: p.clicks,
        }
    }
}

/// A recent click annotated with its link.
#[derive(Debug, Serialize)]
pub struct RecentClickDto {
    pub id: Uuid,
    pub clicked_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,

    pub code: String,
    pub original_url: String,
}

impl From<RecentClick> for RecentClickDto {
    fn from(c: RecentClick) -> Self {
        Self {
            id: c.id,
            clicked_at: c.clicked_at,
            referrer: c.referrer,
            code: c.code,
            original_url: c.original_url,
        }
    }
}

/// A raw click event belonging to one link.
#[derive(Debug, Serialize)]
pub struct ClickDto {
    pub id: Uuid,
    pub clicked_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl From<Click> for ClickDto {
    fn from(c: Click) -> Self {
        Self {
            id: c.id,
            clicked_at: c.clicked_at,
            referrer: c.referrer,
            user_agent: c.user_agent,
        }
    }
}

/// Response for `GET /api/analytics`.
#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub stats: OverviewStatsDto,
    pub popular_links: Vec<LinkResponse>,
    pub recent_clicks: Vec<RecentClickDto>,
    pub timeline: Vec<TimelinePointDto>,
}

impl OverviewResponse {
    pub fn new(overview: AnalyticsOverview, popular_links: Vec<LinkResponse>) -> Self {
        Self {
            stats: OverviewStatsDto {
                total_links: overview.stats.total_links,
                total_clicks: overview.stats.total_clicks,
                avg_clicks: overview.stats.avg_clicks,
                clicks_today: overview.stats.clicks_today,
                clicks_this_week: overview.stats.clicks_this_week,
                clicks_this_month: overview.stats.clicks_this_month,
            },
            popular_links,
            recent_clicks: overview
                .recent_clicks
                .into_iter()
                .map(Into::into)
                .collect(),
            timeline: overview.timeline.into_iter().map(Into::into).collect(),
        }
    }
}

/// Response for `GET /api/analytics/{code}`.
#[derive(Debug, Serialize)]
pub struct LinkAnalyticsResponse {
    pub link: LinkResponse,
    pub recent_clicks: Vec<ClickDto>,
    pub timeline: Vec<TimelinePointDto>,
}

impl LinkAnalyticsResponse {
    pub fn new(analytics: LinkAnalytics, link: LinkResponse) -> Self {
        Self {
            link,
            recent_clicks: analytics
                .recent_clicks
                .into_iter()
                .map(Into::into)
                .collect(),
            timeline: analytics.timeline.into_iter().map(Into::into).collect(),
        }
    }
}
