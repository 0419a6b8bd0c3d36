//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, migrations, and the Axum server lifecycle.

use crate::api::middleware::rate_limit::RateLimit;
use crate::application::services::LinkService;
use crate::config::Config;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::{InMemoryLinkRepository, PgLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens the PostgreSQL pool using the pool settings from `config`.
///
/// # Errors
///
/// Returns an error if the database is unreachable.
pub async fn connect_pool(config: &Config, database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

/// Selects the link store: PostgreSQL when configured, in-memory otherwise.
///
/// Pending migrations are applied before the PostgreSQL store is returned.
///
/// # Errors
///
/// Returns an error if connecting or migrating fails.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn LinkRepository>> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("No database configured; links are kept in memory and lost on restart");
        return Ok(Arc::new(InMemoryLinkRepository::new()));
    };

    let pool = connect_pool(config, database_url).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations applied");

    Ok(Arc::new(PgLinkRepository::new(Arc::new(pool))))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link store (PostgreSQL or in-memory)
/// - Link service
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;

    let link_service = Arc::new(
        LinkService::new(repository).with_generation_attempts(config.code_generation_attempts),
    );
    let state = AppState::new(link_service);

    let rate_limit = config.rate_limit_enabled.then_some(RateLimit {
        per_second: config.rate_limit_per_second,
        burst_size: config.rate_limit_burst,
    });

    let app = app_router(state, rate_limit);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves when the process receives Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
