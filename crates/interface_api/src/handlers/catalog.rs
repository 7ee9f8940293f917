//! Catalog handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use core_kernel::{CoverageId, PackageId};
use domain_quote::{deductible_options, sum_insured_options, CoverageDefinition, QuoteError};

use crate::dto::catalog::*;
use crate::{error::ApiError, AppState};

/// Lists every coverage in the catalog
pub async fn list_coverages(State(state): State<AppState>) -> Json<Vec<CoverageDefinition>> {
    Json(state.catalog.coverages().to_vec())
}

/// Gets a package with its coverages
pub async fn get_package(
    State(state): State<AppState>,
    Path(package_id): Path<i64>,
) -> Result<Json<PackageResponse>, ApiError> {
    let package_id = PackageId::new(package_id);
    if !state.catalog.has_package(package_id) {
        return Err(QuoteError::package_not_found(package_id).into());
    }

    let mut coverages = Vec::new();
    let mut unresolved = Vec::new();
    for association in state.catalog.associations_for(package_id) {
        match state.catalog.coverage(association.coverage_id) {
            Some(coverage) => coverages.push(PackageCoverageResponse {
                coverage: coverage.clone(),
                is_mandatory: association.is_mandatory,
            }),
            None => unresolved.push(association.coverage_id),
        }
    }

    Ok(Json(PackageResponse {
        package_id,
        coverages,
        unresolved,
    }))
}

/// Gets the dropdown values for a coverage
pub async fn coverage_options(
    State(state): State<AppState>,
    Path(coverage_id): Path<i64>,
    Query(query): Query<CoverageOptionsQuery>,
) -> Result<Json<CoverageOptionsResponse>, ApiError> {
    let coverage = state.catalog.require_coverage(CoverageId::new(coverage_id))?;

    let sum_insured = match query.insured_value {
        Some(insured_value) => {
            sum_insured_options(coverage, insured_value, state.config.sum_insured_step)?
        }
        None if coverage.applies_to_insured_value => {
            return Err(ApiError::BadRequest(format!(
                "{} follows the insured value; pass insured_value",
                coverage.id
            )));
        }
        None => sum_insured_options(coverage, rust_decimal::Decimal::ZERO, state.config.sum_insured_step)?,
    };

    Ok(Json(CoverageOptionsResponse {
        coverage_id: coverage.id,
        deductibles: deductible_options(coverage)?,
        sum_insured,
    }))
}
