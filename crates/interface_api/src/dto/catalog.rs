//! Catalog DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{CoverageId, PackageId};
use domain_quote::CoverageDefinition;

#[derive(Debug, Serialize, Deserialize)]
pub struct PackageCoverageResponse {
    pub coverage: CoverageDefinition,
    pub is_mandatory: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PackageResponse {
    pub package_id: PackageId,
    pub coverages: Vec<PackageCoverageResponse>,
    /// Associated coverage ids missing from the catalog
    pub unresolved: Vec<CoverageId>,
}

#[derive(Debug, Deserialize)]
pub struct CoverageOptionsQuery {
    /// Vehicle value, used by coverages tied to the insured value
    pub insured_value: Option<Decimal>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CoverageOptionsResponse {
    pub coverage_id: CoverageId,
    pub deductibles: Vec<Decimal>,
    pub sum_insured: Vec<Decimal>,
}
