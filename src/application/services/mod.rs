//! Business logic services orchestrating domain and infrastructure.

mod link_service;
mod redirect_service;
mod stats_service;

pub use link_service::{LinkService, ShortenOutcome};
pub use redirect_service::RedirectService;
pub use stats_service::{LinkSummary, OwnerStats, StatsService};
