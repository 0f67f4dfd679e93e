//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A click event recorded when a shortened link is accessed.
///
/// Immutable once created. Holds a plain back-reference to its link; the
/// link may be deleted independently, leaving the event orphaned, which is
/// tolerated and filtered out by joined reads.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: Uuid,
    pub link_id: Uuid,
    pub clicked_at: DateTime<Utc>,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
}

/// Input data for recording a new click event.
///
/// The id and timestamp are assigned by the database.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub link_id: Uuid,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
}

/// A click event annotated with its parent link, for display.
///
/// Produced by an inner join, so events whose link no longer exists are
/// never included.
#[derive(Debug, Clone)]
pub struct RecentClick {
    pub id: Uuid,
    pub clicked_at: DateTime<Utc>,
    pub referrer: Option<String>,
    pub code: String,
    pub original_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_click_minimal() {
        let new_click = NewClick {
            link_id: Uuid::new_v4(),
            referrer: None,
            user_agent: None,
        };

        assert!(new_click.referrer.is_none());
        assert!(new_click.user_agent.is_none());
    }

    #[test]
    fn test_click_holds_metadata() {
        let link_id = Uuid::new_v4();
        let click = Click {
            id: Uuid::new_v4(),
            link_id,
            clicked_at: Utc::now(),
            referrer: Some("https://google.com".to_string()),
            user_agent: Some("Mozilla/5.0".to_string()),
        };

        assert_eq!(click.link_id, link_id);
        assert_eq!(click.referrer.as_deref(), Some("https://google.com"));
        assert_eq!(click.user_agent.as_deref(), Some("Mozilla/5.0"));
    }
}
