//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, code generator setup, and Axum server lifecycle.

use crate::api::routes::app_router;
use crate::config::{Config, StoreBackend};
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::{
    MemoryLinkRepository, PgLinkRepository, RedisLinkRepository,
};
use crate::state::AppState;
use crate::utils::code_generator::build_generator;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The mapping store selected by `STORE_BACKEND` (with migrations for PostgreSQL)
/// - The code generator
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be reached after all retries
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = connect_store(&config).await?;
    tracing::info!(backend = repository.backend_name(), "Mapping store ready");

    let generator = build_generator(config.code_strategy, config.code_length);
    let state = AppState::new(&config, repository, generator);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Exponential backoff starting at 200 ms, capped at 10 s, with jitter.
fn retry_strategy(retries: usize) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(2)
        .factor(100)
        .max_delay(Duration::from_secs(10))
        .map(jitter)
        .take(retries)
}

async fn connect_store(config: &Config) -> Result<Arc<dyn LinkRepository>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, mappings are lost on restart");
            Ok(Arc::new(MemoryLinkRepository::new()))
        }
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres store")?;

            let options = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Some(Duration::from_secs(config.db_idle_timeout)))
                .max_lifetime(Some(Duration::from_secs(config.db_max_lifetime)));

            let pool = Retry::start(retry_strategy(config.store_connect_retries), || {
                let options = options.clone();
                async move {
                    options.connect(database_url).await.inspect_err(|e| {
                        tracing::warn!(error = %e, "Database connection failed, retrying");
                    })
                }
            })
            .await
            .context("Failed to connect to PostgreSQL")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;

            Ok(Arc::new(PgLinkRepository::new(Arc::new(pool))))
        }
        StoreBackend::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL is required for the redis store")?;
            let prefix = config.redis_key_prefix.as_str();

            let repository = Retry::start(retry_strategy(config.store_connect_retries), || {
                async move {
                    RedisLinkRepository::connect(redis_url, prefix)
                        .await
                        .inspect_err(|e| {
                            tracing::warn!(error = %e, "Redis connection failed, retrying");
                        })
                }
            })
            .await
            .context("Failed to connect to Redis")?;

            Ok(Arc::new(repository))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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
