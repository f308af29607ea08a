//! # linksnip
//!
//! A URL shortening service built with Axum and PostgreSQL.
//!
//! ## Architecture
//!
//! The crate follows a layered structure with clear separation:
//!
//! - **Domain layer** ([`domain`]) - entities, repository traits, and
//!   background workers (click accounting, expiry sweeping)
//! - **Application layer** ([`application`]) - shortening, redirect, and
//!   statistics services
//! - **Infrastructure layer** ([`infrastructure`]) - PostgreSQL
//!   repositories
//! - **API layer** ([`api`]) - handlers, DTOs, and middleware
//!
//! ## Behavior
//!
//! - Anonymous submissions expire after a configurable TTL and are purged
//!   by a background sweeper; authenticated submissions persist and show
//!   up on the caller's `/urls` dashboard.
//! - Short codes are 8 random URL-safe characters; uniqueness is enforced
//!   by the database, with probe-and-retry generation on top.
//! - Redirects answer immediately; click counters are incremented
//!   asynchronously by a worker fed through a bounded channel.
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]; see the
//! [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{
        LinkService, RedirectService, ShortenOutcome, StatsService,
    };
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
