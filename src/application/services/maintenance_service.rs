//! Background maintenance over the link store.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Service for store upkeep tasks, currently expired-link retention.
pub struct MaintenanceService {
    link_repository: Arc<dyn LinkRepository>,
}

impl MaintenanceService {
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Deletes every link whose expiry lies strictly before `now` and
    /// returns the number removed. Links without an expiry are never touched.
    ///
    /// Click events of deleted links stay in the log; analytics joins skip
    /// them.
    pub async fn sweep(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let deleted = self.link_repository.delete_expired(now).await?;

        if deleted > 0 {
            tracing::info!(deleted, "removed expired links");
        }

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;

    #[tokio::test]
    async fn test_sweep_reports_deleted_count() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_delete_expired()
            .times(1)
            .returning(|_| Ok(3));

        let service = MaintenanceService::new(Arc::new(mock_repo));

        assert_eq!(service.sweep(Utc::now()).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_sweep_with_nothing_expired() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_delete_expired()
            .times(1)
            .returning(|_| Ok(0));

        let service = MaintenanceService::new(Arc::new(mock_repo));

        assert_eq!(service.sweep(Utc::now()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_sweep_passes_reference_instant_through() {
        let now = Utc::now();
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_delete_expired()
            .withf(move |at| *at == now)
            .times(1)
            .returning(|_| Ok(1));

        let service = MaintenanceService::new(Arc::new(mock_repo));

        service.sweep(now).await.unwrap();
    }
}
