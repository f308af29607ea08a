//! Background sweeper purging expired anonymous links.
//!
//! Expired records already never resolve (every live-record query carries
//! the expiry predicate); the sweeper reclaims the rows and frees their
//! short codes for reuse.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::repositories::LinkRepository;

/// Periodically deletes records whose expiry time has passed.
///
/// Runs forever; a failed sweep is logged and retried on the next tick.
pub async fn run_expiry_worker(link_repository: Arc<dyn LinkRepository>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        match link_repository.delete_expired().await {
            Ok(0) => {}
            Ok(purged) => {
                tracing::info!(purged, "expired links purged");
            }
            Err(e) => {
                tracing::warn!("expiry sweep failed: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;

    #[tokio::test]
    async fn test_sweeper_runs_on_interval() {
        let mut repo = MockLinkRepository::new();
        repo.expect_delete_expired()
            .times(2..)
            .returning(|| Ok(1));

        let worker = tokio::spawn(run_expiry_worker(
            Arc::new(repo),
            Duration::from_millis(10),
        ));

        tokio::time::sleep(Duration::from_millis(50)).await;
        worker.abort();
    }
}
