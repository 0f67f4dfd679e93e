//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A shortened URL link with metadata.
///
/// Maps a unique, case-sensitive alphanumeric short code to a destination
/// URL. The click counter is mutated only by the redirect path and is
/// monotonically non-decreasing.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: Uuid,
    pub code: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    /// Absent means the link never expires.
    pub expires_at: Option<DateTime<Utc>>,
    /// Opaque, unverified owner identifier supplied at creation time.
    pub owner_id: Option<String>,
}

impl Link {
    /// Returns true if the link has passed its expiry time.
    ///
    /// Expired links stay stored and visible to listings until swept, but the
    /// resolver treats them as inert.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e < now)
    }

    /// Convenience wrapper over [`Self::is_expired_at`] using the wall clock.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub owner_id: Option<String>,
}

/// Store-wide link totals used by analytics and health checks.
#[derive(Debug, Clone, Copy)]
pub struct LinkTotals {
    pub total_links: i64,
    /// Sum of the per-link click counters, not a count of event rows.
    pub total_clicks: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_link(expires_at: Option<DateTime<Utc>>) -> Link {
        Link {
            id: Uuid::new_v4(),
            code: "abc123".to_string(),
            original_url: "https://example.com".to_string(),
            clicks: 0,
            created_at: Utc::now(),
            expires_at,
            owner_id: None,
        }
    }

    #[test]
    fn test_link_without_expiry_never_expires() {
        let link = sample_link(None);
        assert!(!link.is_expired());
        assert!(!link.is_expired_at(Utc::now() + Duration::days(365 * 100)));
    }

    #[test]
    fn test_link_with_past_expiry_is_expired() {
        let link = sample_link(Some(Utc::now() - Duration::seconds(1)));
        assert!(link.is_expired());
    }

    #[test]
    fn test_link_with_future_expiry_is_active() {
        let link = sample_link(Some(Utc::now() + Duration::hours(1)));
        assert!(!link.is_expired());
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let at = Utc::now();
        let link = sample_link(Some(at));

        // A link expiring exactly "now" is still active at that instant.
        assert!(!link.is_expired_at(at));
        assert!(link.is_expired_at(at + Duration::milliseconds(1)));
    }
}
