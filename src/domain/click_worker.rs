//! Background worker draining the click event channel.

use std::sync::Arc;

use metrics::counter;
use tokio::sync::mpsc;
use tokio_retry::strategy::{jitter, ExponentialBackoff};
use tokio_retry::Retry;
use tracing::warn;

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::ClickRepository;

/// Insert attempts per event before the event is dropped.
const MAX_ATTEMPTS: usize = 3;

/// Processes click events until the channel closes.
///
/// Each event is appended via the repository with exponential backoff on
/// transient failures. An event that still fails after the last attempt is
/// logged and dropped; the click counter on the link was already bumped by
/// the resolver, so analytics totals may drift slightly. That trade is
/// intentional: the audit log must never back-pressure redirects.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    repository: Arc<dyn ClickRepository>,
) {
    while let Some(event) = rx.recv().await {
        let strategy = ExponentialBackoff::from_millis(50)
            .map(jitter)
            .take(MAX_ATTEMPTS - 1);

        let result = Retry::spawn(strategy, || {
            let repository = repository.clone();
            let new_click = event.clone().into();
            async move { repository.record(new_click).await }
        })
        .await;

        match result {
            Ok(_) => {
                counter!("clicks_recorded_total").increment(1);
            }
            Err(e) => {
                counter!("clicks_failed_total").increment(1);
                warn!(link_id = %event.link_id, error = %e, "dropping click event after retries");
            }
        }
    }
}
