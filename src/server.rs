//! HTTP server initialization and runtime setup.
//!
//! Builds the record store, wires the services and runs the Axum server.

use crate::config::{Config, StoreBackend};
use crate::infrastructure::persistence::{
    PgAssignmentRepository, PgPackageRepository, PgTruckRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;

/// Connects to PostgreSQL with the configured pool settings and applies
/// pending migrations.
///
/// # Errors
///
/// Returns an error if the URL is missing, the connection fails or a
/// migration fails.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required for the postgres store")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.pool.max_connections)
        .acquire_timeout(config.pool.acquire_timeout)
        .idle_timeout(config.pool.idle_timeout)
        .max_lifetime(config.pool.max_lifetime)
        .connect(url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    Ok(pool)
}

/// Builds the application state for the configured record store.
///
/// # Errors
///
/// Returns an error if the PostgreSQL store cannot be reached.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let engine = config.assignment_engine();

    let state = match config.store_backend {
        StoreBackend::Postgres => {
            let pool = Arc::new(connect_pool(config).await?);
            AppState::new(
                Arc::new(PgTruckRepository::new(pool.clone())),
                Arc::new(PgPackageRepository::new(pool.clone())),
                Arc::new(PgAssignmentRepository::new(pool)),
                engine,
                StoreBackend::Postgres.as_str(),
            )
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; records are lost on restart");
            AppState::in_memory(engine)
        }
    };

    Ok(state)
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
