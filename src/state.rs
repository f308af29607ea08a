//! Shared application state injected into all handlers.

use std::sync::Arc;

use chrono::Duration;
use tokio::sync::mpsc;

use crate::application::services::{LinkService, RedirectService, StatsService};
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::{LinkRepository, StatsRepository};

/// Handles to the service layer, cloned into every request.
///
/// Constructed once by the composition root ([`crate::server::run`]); the
/// store handle lives inside the repositories and is opened at startup
/// and closed at shutdown, never re-initialized per request.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
    pub stats_service: Arc<StatsService>,
    /// Kept for the health endpoint's queue check.
    pub click_sender: mpsc::Sender<ClickEvent>,
    /// Public base under which short URLs are presented.
    pub base_url: Arc<str>,
}

impl AppState {
    /// Wires the services over the given repositories.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        stats_repository: Arc<dyn StatsRepository>,
        click_sender: mpsc::Sender<ClickEvent>,
        anon_ttl: Duration,
        base_url: &str,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository.clone(), anon_ttl)),
            redirect_service: Arc::new(RedirectService::new(
                link_repository,
                click_sender.clone(),
            )),
            stats_service: Arc::new(StatsService::new(stats_repository)),
            click_sender,
            base_url: base_url.trim_end_matches('/').into(),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Builds an [`AppState`] over mock repositories for handler tests.
    pub fn state_with_mocks(
        link_repository: Arc<dyn LinkRepository>,
        stats_repository: Arc<dyn StatsRepository>,
    ) -> (AppState, mpsc::Receiver<ClickEvent>) {
        let (tx, rx) = mpsc::channel(100);
        let state = AppState::new(
            link_repository,
            stats_repository,
            tx,
            Duration::seconds(600),
            "http://localhost:3000",
        );
        (state, rx)
    }
}
