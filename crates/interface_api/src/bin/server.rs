//! Loan Pre-Approval API - Server Binary
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin loan-api
//!
//! # Run with environment variables
//! API_PORT=8080 DATABASE_URL=postgres://... cargo run --bin loan-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_DATABASE_URL` / `DATABASE_URL` - PostgreSQL connection string
//! * `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASS`, `DB_NAME` - used when no URL is set
//! * `API_LOG_LEVEL` - Log level or filter directive (default: info; `RUST_LOG` overrides)
//! * `API_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! * `API_DB_MAX_CONNECTIONS`, `API_DB_MIN_CONNECTIONS`, `API_DB_ACQUIRE_TIMEOUT_SECS`

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use infra_db::{create_pool, run_migrations, PostgresLoanApplicationAdapter};
use interface_api::config::{ApiConfig, LogFormat};
use interface_api::create_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::load().context("failed to load configuration")?;

    init_tracing(&config.log_level, config.log_format);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting Loan Pre-Approval API Server"
    );

    let pool = create_pool(config.database())
        .await
        .context("failed to create database pool")?;

    run_migrations(&pool)
        .await
        .context("failed to run database migrations")?;

    let port = Arc::new(PostgresLoanApplicationAdapter::new(pool));
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    let app = create_router(port, config);

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
    }
}

/// Waits for Ctrl+C or SIGTERM so in-flight requests can finish
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
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
