//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub coverages: usize,
    pub packages: usize,
    pub open_quotes: usize,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check (includes the loaded catalog)
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let open_quotes = state.worksheets.read().await.len();

    Json(ReadinessResponse {
        status: "ready".to_string(),
        coverages: state.catalog.coverages().len(),
        packages: state.catalog.packages().len(),
        open_quotes,
    })
}
