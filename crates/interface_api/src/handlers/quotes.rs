//! Quote worksheet handlers
//!
//! Worksheets live in memory for the duration of a wizard session. Each
//! request takes the store lock for the span of one worksheet operation.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use core_kernel::{Money, QuoteId};
use domain_quote::{QuoteEvent, QuoteWorksheet};

use crate::dto::quote::*;
use crate::{error::ApiError, AppState};

/// Starts a quote worksheet
pub async fn create_quote(
    State(state): State<AppState>,
    Json(request): Json<CreateQuoteRequest>,
) -> Result<(StatusCode, Json<QuoteResponse>), ApiError> {
    if request.insured_value.is_sign_negative() && !request.insured_value.is_zero() {
        return Err(ApiError::Validation(format!(
            "Insured value must not be negative: {}",
            request.insured_value
        )));
    }

    let insured_value = Money::new(request.insured_value, request.currency);
    let mut worksheet = QuoteWorksheet::new(insured_value, state.config.quote_limits());
    if let Some(package_id) = request.package_id {
        worksheet.select_package(&state.catalog, package_id)?;
    }
    if let Some(bonus) = request.bonus_percentage {
        worksheet.set_bonus(bonus)?;
    }

    info!(quote = %worksheet.id(), insured_value = %insured_value, "Quote started");

    let response = QuoteResponse::from(&worksheet);
    state.worksheets.write().await.insert(worksheet.id(), worksheet);
    Ok((StatusCode::CREATED, Json(response)))
}

/// Gets a quote worksheet
pub async fn get_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let id = parse_quote_id(&id)?;
    let worksheets = state.worksheets.read().await;
    let worksheet = worksheets.get(&id).ok_or_else(|| quote_not_found(id))?;
    Ok(Json(QuoteResponse::from(worksheet)))
}

/// Applies a user event to a quote worksheet
pub async fn apply_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(event): Json<QuoteEvent>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let id = parse_quote_id(&id)?;
    let mut worksheets = state.worksheets.write().await;
    let worksheet = worksheets.get_mut(&id).ok_or_else(|| quote_not_found(id))?;

    worksheet.apply(&state.catalog, &event)?;
    Ok(Json(QuoteResponse::from(&*worksheet)))
}

/// Produces the submission payload for the persistence action
pub async fn submit_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let id = parse_quote_id(&id)?;
    let worksheets = state.worksheets.read().await;
    let worksheet = worksheets.get(&id).ok_or_else(|| quote_not_found(id))?;
    Ok(Json(SubmissionResponse::from(worksheet.submission()?)))
}

/// Discards a quote worksheet
pub async fn discard_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_quote_id(&id)?;
    state
        .worksheets
        .write()
        .await
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| quote_not_found(id))
}

fn parse_quote_id(raw: &str) -> Result<QuoteId, ApiError> {
    raw.parse()
        .map_err(|e| ApiError::BadRequest(format!("Invalid quote id {}: {}", raw, e)))
}

fn quote_not_found(id: QuoteId) -> ApiError {
    ApiError::NotFound(format!("Quote {} not found", id))
}
