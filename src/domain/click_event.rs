//! Click event model for asynchronous click tracking.

use uuid::Uuid;

use crate::domain::entities::NewClick;

/// Request-derived context for a click, captured at the HTTP boundary.
#[derive(Debug, Clone, Default)]
pub struct ClickMeta {
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
}

impl ClickMeta {
    pub fn new(referrer: Option<&str>, user_agent: Option<&str>) -> Self {
        Self {
            referrer: referrer.map(|s| s.to_string()),
            user_agent: user_agent.map(|s| s.to_string()),
        }
    }
}

/// An in-memory click event passed from the resolver to the background
/// worker via a bounded channel.
///
/// The channel decouples the redirect response from the event write: the
/// counter increment is the authoritative "click happened" signal, and this
/// event is the best-effort audit record behind it.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub link_id: Uuid,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
}

impl ClickEvent {
    pub fn new(link_id: Uuid, meta: ClickMeta) -> Self {
        Self {
            link_id,
            referrer: meta.referrer,
            user_agent: meta.user_agent,
        }
    }
}

impl From<ClickEvent> for NewClick {
    fn from(ev: ClickEvent) -> Self {
        NewClick {
            link_id: ev.link_id,
            referrer: ev.referrer,
            user_agent: ev.user_agent,
        }
    }
}
