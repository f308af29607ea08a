//! HTTP server initialization and runtime setup.
//!
//! Owns the composition root: database pool, migrations, background
//! workers, and the Axum server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::domain::click_worker::run_click_worker;
use crate::domain::expiry_worker::run_expiry_worker;
use crate::domain::repositories::{LinkRepository, StatsRepository};
use crate::infrastructure::persistence::{PgLinkRepository, PgStatsRepository};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes, in order: the PostgreSQL pool, migrations, the click
/// worker, the expiry sweeper, and the Axum server. The pool is opened
/// once here and dropped at shutdown; nothing re-initializes it.
///
/// # Errors
///
/// Returns an error if the database connection, migrations, the bind,
/// or the server runtime fail.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let pool = Arc::new(pool);
    let link_repository: Arc<dyn LinkRepository> = Arc::new(PgLinkRepository::new(pool.clone()));
    let stats_repository: Arc<dyn StatsRepository> = Arc::new(PgStatsRepository::new(pool.clone()));

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    tokio::spawn(run_click_worker(click_rx, link_repository.clone()));
    tracing::info!("Click worker started");

    tokio::spawn(run_expiry_worker(
        link_repository.clone(),
        Duration::from_secs(config.expiry_sweep_interval_secs),
    ));
    tracing::info!(
        "Expiry sweeper started (every {}s)",
        config.expiry_sweep_interval_secs
    );

    let state = AppState::new(
        link_repository,
        stats_repository,
        click_tx,
        chrono::Duration::seconds(config.anon_link_ttl_secs as i64),
        &config.base_url,
    );

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
