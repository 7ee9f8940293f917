//! Quote line items
//!
//! One line item exists per coverage of the selected package. A line always
//! refers to the same coverage; only its sum insured and deductible change,
//! and every change re-prices the line.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::CoverageId;
use crate::coverage::CoverageDefinition;
use crate::error::QuoteError;
use crate::premium::compute_premium;
use crate::ranges::is_on_step;

/// Editing state of a line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemState {
    /// Created from the package with catalog defaults
    Initialized,
    /// Sum insured or deductible changed by the user
    Edited,
}

/// A priced coverage within a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLineItem {
    pub coverage_id: CoverageId,
    pub coverage_name: String,
    pub sum_insured: Decimal,
    /// Deductible in percent
    pub deductible: Decimal,
    pub premium: Decimal,
    /// Premium rate the coverage applies to the sum insured, in percent
    pub premium_percentage: Decimal,
    /// Flat base premium, when the coverage uses one
    pub base_premium: Option<Decimal>,
    pub is_mandatory: bool,
    /// Sum insured follows the vehicle's insured value
    pub linked_to_insured_value: bool,
    pub state: LineItemState,
}

impl QuoteLineItem {
    /// Creates a line item with the coverage's default selections
    ///
    /// The sum insured starts at the vehicle's insured value for linked
    /// coverages and at the catalog minimum otherwise; the deductible starts
    /// at the catalog minimum.
    pub fn initialize(coverage: &CoverageDefinition, is_mandatory: bool, insured_value: Decimal) -> Self {
        let sum_insured = if coverage.applies_to_insured_value {
            insured_value
        } else {
            coverage.sum_insured_min
        };
        let deductible = coverage.deductible_min;

        Self {
            coverage_id: coverage.id,
            coverage_name: coverage.name.clone(),
            sum_insured,
            deductible,
            premium: compute_premium(coverage, sum_insured, deductible),
            premium_percentage: coverage.premium_percentage,
            base_premium: coverage.base_premium,
            is_mandatory,
            linked_to_insured_value: coverage.applies_to_insured_value,
            state: LineItemState::Initialized,
        }
    }

    /// Changes the sum insured and re-prices the line
    ///
    /// # Errors
    ///
    /// * `QuoteError::SumInsuredLinkedToInsuredValue` for linked coverages
    /// * `QuoteError::SumInsuredOutOfRange` outside the catalog bounds
    pub fn set_sum_insured(&mut self, coverage: &CoverageDefinition, value: Decimal) -> Result<(), QuoteError> {
        self.ensure_same_coverage(coverage)?;

        if self.linked_to_insured_value {
            return Err(QuoteError::SumInsuredLinkedToInsuredValue(self.coverage_id.to_string()));
        }
        if !coverage.sum_insured_in_range(value) {
            return Err(QuoteError::SumInsuredOutOfRange {
                coverage: self.coverage_id.to_string(),
                value,
                min: coverage.sum_insured_min,
                max: coverage.sum_insured_max,
            });
        }

        self.sum_insured = value;
        self.reprice(coverage);
        Ok(())
    }

    /// Changes the deductible and re-prices the line
    ///
    /// # Errors
    ///
    /// * `QuoteError::DeductibleOutOfRange` outside the catalog bounds
    /// * `QuoteError::DeductibleOffStep` when not on the selection grid
    pub fn set_deductible(&mut self, coverage: &CoverageDefinition, value: Decimal) -> Result<(), QuoteError> {
        self.ensure_same_coverage(coverage)?;

        if !coverage.deductible_in_range(value) {
            return Err(QuoteError::DeductibleOutOfRange {
                coverage: self.coverage_id.to_string(),
                value,
                min: coverage.deductible_min,
                max: coverage.deductible_max,
            });
        }
        if !is_on_step(value, coverage.deductible_min, coverage.selection_step) {
            return Err(QuoteError::DeductibleOffStep {
                coverage: self.coverage_id.to_string(),
                value,
                min: coverage.deductible_min,
                step: coverage.selection_step,
            });
        }

        self.deductible = value;
        self.reprice(coverage);
        Ok(())
    }

    /// Returns true if the line may be removed from the quote
    pub fn is_removable(&self) -> bool {
        !self.is_mandatory
    }

    fn reprice(&mut self, coverage: &CoverageDefinition) {
        let previous = self.premium;
        self.premium = compute_premium(coverage, self.sum_insured, self.deductible);
        self.state = LineItemState::Edited;
        debug!(
            coverage = %self.coverage_id,
            sum_insured = %self.sum_insured,
            deductible = %self.deductible,
            previous = %previous,
            premium = %self.premium,
            "Line item repriced"
        );
    }

    fn ensure_same_coverage(&self, coverage: &CoverageDefinition) -> Result<(), QuoteError> {
        if coverage.id != self.coverage_id {
            return Err(QuoteError::invalid_coverage(format!(
                "line for {} cannot be priced with {}",
                self.coverage_id, coverage.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn theft() -> CoverageDefinition {
        CoverageDefinition::percentage(CoverageId::new(2), "Robo total", dec!(1))
            .with_sum_insured_range(dec!(100000), dec!(300000))
            .with_deductible_range(dec!(5), dec!(20), dec!(5))
    }

    #[test]
    fn test_initialize_uses_catalog_minimums() {
        let line = QuoteLineItem::initialize(&theft(), false, dec!(250000));
        assert_eq!(line.sum_insured, dec!(100000));
        assert_eq!(line.deductible, dec!(5));
        assert_eq!(line.premium, dec!(950));
        assert_eq!(line.state, LineItemState::Initialized);
    }

    #[test]
    fn test_initialize_linked_coverage_uses_insured_value() {
        let coverage = theft().linked_to_insured_value();
        let line = QuoteLineItem::initialize(&coverage, true, dec!(250000));
        assert_eq!(line.sum_insured, dec!(250000));
        assert!(line.linked_to_insured_value);
        assert!(!line.is_removable());
    }

    #[test]
    fn test_edit_deductible_reprices() {
        let coverage = theft();
        let mut line = QuoteLineItem::initialize(&coverage, false, dec!(250000));
        line.set_deductible(&coverage, dec!(10)).unwrap();
        assert_eq!(line.premium, dec!(900));
        assert_eq!(line.state, LineItemState::Edited);
    }

    #[test]
    fn test_rejected_edit_leaves_line_untouched() {
        let coverage = theft();
        let mut line = QuoteLineItem::initialize(&coverage, false, dec!(250000));
        let before = line.clone();

        assert!(line.set_deductible(&coverage, dec!(7)).is_err());
        assert!(line.set_sum_insured(&coverage, dec!(1)).is_err());
        assert_eq!(line, before);
    }

    #[test]
    fn test_wrong_coverage_rejected() {
        let mut line = QuoteLineItem::initialize(&theft(), false, dec!(250000));
        let other = CoverageDefinition::flat(CoverageId::new(99), "Otro", dec!(10));
        assert!(matches!(
            line.set_deductible(&other, dec!(0)),
            Err(QuoteError::InvalidCoverage(_))
        ));
    }
}
