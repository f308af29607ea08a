//! Background worker applying click increments.
//!
//! Consumes [`ClickEvent`]s from the bounded channel filled by the
//! redirect handler and applies each as a single atomic update in the
//! store. A failed increment is logged and dropped; it never affects the
//! redirect that produced it.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;

/// Runs until the sending side of the channel is closed.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    link_repository: Arc<dyn LinkRepository>,
) {
    while let Some(event) = rx.recv().await {
        match link_repository.increment_clicks(&event.short_code).await {
            Ok(true) => {}
            Ok(false) => {
                // The link was purged or expired between redirect and
                // increment. Nothing to update.
                tracing::debug!(code = %event.short_code, "click for vanished link dropped");
            }
            Err(e) => {
                tracing::warn!(code = %event.short_code, "failed to record click: {e}");
            }
        }
    }

    tracing::info!("click worker stopped: channel closed");
}
