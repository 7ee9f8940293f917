//! HTTP API Layer
//!
//! This crate exposes the quoting domain over REST using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Catalog lookups and quote worksheet operations
//! - **Middleware**: Request tracing and audit logging
//! - **DTOs**: Request/Response data transfer objects with es-MX display strings
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(catalog, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use core_kernel::QuoteId;
use domain_quote::{CoverageCatalog, QuoteWorksheet};

use crate::config::ApiConfig;
use crate::middleware::audit_middleware;
use crate::handlers::{catalog, health, quotes};

/// In-memory store of open quote worksheets
pub type WorksheetStore = Arc<RwLock<HashMap<QuoteId, QuoteWorksheet>>>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CoverageCatalog>,
    pub worksheets: WorksheetStore,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `catalog` - Coverage and package catalog for the session
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(catalog: CoverageCatalog, config: ApiConfig) -> Router {
    let state = AppState {
        catalog: Arc::new(catalog),
        worksheets: Arc::new(RwLock::new(HashMap::new())),
        config,
    };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Catalog routes
    let catalog_routes = Router::new()
        .route("/coverages", get(catalog::list_coverages))
        .route("/coverages/:id/options", get(catalog::coverage_options))
        .route("/packages/:id", get(catalog::get_package));

    // Quote routes
    let quote_routes = Router::new()
        .route("/", post(quotes::create_quote))
        .route("/:id", get(quotes::get_quote).delete(quotes::discard_quote))
        .route("/:id/events", post(quotes::apply_event))
        .route("/:id/submission", post(quotes::submit_quote));

    let api_routes = Router::new()
        .nest("/catalog", catalog_routes)
        .nest("/quotes", quote_routes)
        .layer(axum_middleware::from_fn(audit_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
