//! Quote domain errors
//!
//! This module defines all error types that can occur while resolving a
//! package, editing line items, or preparing a quote for submission.

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::{CoverageId, MoneyError, PackageId};

/// Errors that can occur in the quote domain
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Coverage is not part of the catalog
    #[error("Coverage not found: {0}")]
    CoverageNotFound(String),

    /// Coverage is not among the quote's line items
    #[error("Line item not found for coverage {0}")]
    LineItemNotFound(String),

    /// Mandatory coverages cannot be removed from a quote
    #[error("Coverage {0} is mandatory for the selected package")]
    MandatoryCoverage(String),

    /// Sum insured outside the coverage's catalog bounds
    #[error("Sum insured {value} for {coverage} is outside [{min}, {max}]")]
    SumInsuredOutOfRange {
        coverage: String,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    /// Sum insured is tied to the vehicle's insured value
    #[error("Sum insured for {0} follows the vehicle's insured value and cannot be edited")]
    SumInsuredLinkedToInsuredValue(String),

    /// Deductible outside the coverage's catalog bounds
    #[error("Deductible {value}% for {coverage} is outside [{min}, {max}]")]
    DeductibleOutOfRange {
        coverage: String,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    /// Deductible is not on the coverage's selection grid
    #[error("Deductible {value}% for {coverage} is not a multiple of {step} from {min}")]
    DeductibleOffStep {
        coverage: String,
        value: Decimal,
        min: Decimal,
        step: Decimal,
    },

    /// Bonus percentage outside the allowed range
    #[error("Bonus {value}% is outside [0, {max}]")]
    BonusOutOfRange { value: Decimal, max: Decimal },

    /// Range step must be positive
    #[error("Invalid range step: {0}")]
    InvalidStep(Decimal),

    /// Range would produce more options than a dropdown can hold
    #[error("Range [{min}, {max}] with step {step} exceeds {limit} options")]
    RangeTooLarge {
        min: Decimal,
        max: Decimal,
        step: Decimal,
        limit: usize,
    },

    /// Package has no associations in the catalog
    #[error("Package not found: {0}")]
    PackageNotFound(String),

    /// Catalog definition is internally inconsistent
    #[error("Invalid coverage: {0}")]
    InvalidCoverage(String),

    /// Catalog holds the same coverage id twice
    #[error("Duplicate coverage in catalog: {0}")]
    DuplicateCoverage(String),

    /// Submission requested before any package was chosen
    #[error("No package has been selected")]
    NoPackageSelected,

    /// Submission requested with no remaining line items
    #[error("Quote has no line items")]
    EmptyQuote,

    /// Catalog document could not be parsed
    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_json::Error),

    /// Money arithmetic error
    #[error("Financial error: {0}")]
    Money(#[from] MoneyError),
}

impl QuoteError {
    /// Creates a coverage not found error
    pub fn coverage_not_found(coverage_id: CoverageId) -> Self {
        QuoteError::CoverageNotFound(coverage_id.to_string())
    }

    /// Creates a package not found error
    pub fn package_not_found(package_id: PackageId) -> Self {
        QuoteError::PackageNotFound(package_id.to_string())
    }

    /// Creates a line item not found error
    pub fn line_item_not_found(coverage_id: CoverageId) -> Self {
        QuoteError::LineItemNotFound(coverage_id.to_string())
    }

    /// Creates a mandatory coverage error
    pub fn mandatory(coverage_id: CoverageId) -> Self {
        QuoteError::MandatoryCoverage(coverage_id.to_string())
    }

    /// Creates an invalid coverage error
    pub fn invalid_coverage(message: impl Into<String>) -> Self {
        QuoteError::InvalidCoverage(message.into())
    }

    /// Returns true when the error comes from a user edit rejected by catalog bounds
    pub fn is_rejected_edit(&self) -> bool {
        matches!(
            self,
            QuoteError::SumInsuredOutOfRange { .. }
                | QuoteError::SumInsuredLinkedToInsuredValue(_)
                | QuoteError::DeductibleOutOfRange { .. }
                | QuoteError::DeductibleOffStep { .. }
                | QuoteError::BonusOutOfRange { .. }
                | QuoteError::MandatoryCoverage(_)
        )
    }
}
