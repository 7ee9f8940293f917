//! Auto-Quote API Server Binary
//!
//! This binary loads the coverage catalog and starts the HTTP API server.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration (reads ./catalog.json)
//! cargo run --bin quote-api
//!
//! # Run with environment variables
//! API_PORT=8080 API_CATALOG_PATH=/etc/quote/catalog.json cargo run --bin quote-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_CATALOG_PATH` - Coverage catalog JSON document (default: catalog.json)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_MAX_BONUS_PERCENTAGE` - Highest bonus accepted on a quote (default: 35)
//! * `API_SUM_INSURED_STEP` - Sum insured dropdown increment (default: 10000)

use std::net::SocketAddr;

use anyhow::Context;
use domain_quote::CoverageCatalog;
use interface_api::{config::ApiConfig, create_router};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid API_* configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        catalog = %config.catalog_path,
        "Starting auto-quote API server"
    );

    let catalog = load_catalog(&config.catalog_path).await?;

    let app = create_router(catalog, config.clone());
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Reads and validates the catalog document.
async fn load_catalog(path: &str) -> anyhow::Result<CoverageCatalog> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("cannot read catalog {}", path))?;
    let catalog = CoverageCatalog::from_json(&json)
        .with_context(|| format!("invalid catalog {}", path))?;

    tracing::info!(
        coverages = catalog.coverages().len(),
        packages = catalog.packages().len(),
        "Catalog loaded"
    );
    Ok(catalog)
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
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
