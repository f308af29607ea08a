//! Short code resolution service.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::mpsc;

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Service resolving short codes to their redirect targets.
///
/// Click accounting is decoupled from the redirect: each successful
/// resolution enqueues one [`ClickEvent`] for the background worker, which
/// applies the atomic increment in the store. A full queue or a failed
/// increment is logged and never delays or fails the redirect.
pub struct RedirectService {
    link_repository: Arc<dyn LinkRepository>,
    click_sender: mpsc::Sender<ClickEvent>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        click_sender: mpsc::Sender<ClickEvent>,
    ) -> Self {
        Self {
            link_repository,
            click_sender,
        }
    }

    /// Resolves a short code to its original URL.
    ///
    /// Expired records are reported as not found even when the sweeper has
    /// not yet purged them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code has no live record and
    /// [`AppError::Internal`] on store failures.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        let link = self
            .link_repository
            .find_live_by_code(short_code)
            .await?
            .filter(|link| {
                // The store filters on its own clock; re-check on ours.
                !link.is_expired()
            })
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "code": short_code }))
            })?;

        if let Err(e) = self.click_sender.try_send(ClickEvent::new(short_code)) {
            tracing::warn!(code = %short_code, "click event dropped: {e}");
        }

        Ok(link.original_url)
    }
}
