//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use domain_quote::QuoteError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::Internal(msg) => {
                error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone()),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        let message = err.to_string();
        match err {
            QuoteError::CoverageNotFound(_)
            | QuoteError::LineItemNotFound(_)
            | QuoteError::PackageNotFound(_) => ApiError::NotFound(message),
            QuoteError::MandatoryCoverage(_)
            | QuoteError::NoPackageSelected
            | QuoteError::EmptyQuote => ApiError::Conflict(message),
            QuoteError::SumInsuredOutOfRange { .. }
            | QuoteError::SumInsuredLinkedToInsuredValue(_)
            | QuoteError::DeductibleOutOfRange { .. }
            | QuoteError::DeductibleOffStep { .. }
            | QuoteError::BonusOutOfRange { .. }
            | QuoteError::InvalidStep(_)
            | QuoteError::RangeTooLarge { .. } => ApiError::Validation(message),
            QuoteError::Money(_) => ApiError::BadRequest(message),
            QuoteError::InvalidCoverage(_)
            | QuoteError::DuplicateCoverage(_)
            | QuoteError::Catalog(_) => ApiError::Internal(message),
        }
    }
}
