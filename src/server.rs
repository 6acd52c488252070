//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, worker spawning, and Axum server lifecycle.

use crate::application::services::TrackingService;
use crate::config::Config;
use crate::domain::lookup_worker::run_lookup_worker;
use crate::infrastructure::persistence::{PgLookupLogRepository, PgShipmentRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (tuned via config)
/// - Migrations
/// - Background lookup log worker
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pool = Arc::new(pool);
    let shipment_repository = Arc::new(PgShipmentRepository::new(pool.clone()));
    let lookup_log_repository = Arc::new(PgLookupLogRepository::new(pool.clone()));

    let (lookup_tx, lookup_rx) = mpsc::channel(config.lookup_queue_capacity);
    tokio::spawn(run_lookup_worker(lookup_rx, lookup_log_repository));
    tracing::info!("Lookup log worker started");

    let tracking_service = Arc::new(TrackingService::with_label_classifier(shipment_repository));

    let state = AppState::new(tracking_service, lookup_tx);

    let app = app_router(state);

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
