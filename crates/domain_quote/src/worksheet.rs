//! Quote worksheet aggregate
//!
//! The worksheet is the explicit state of the coverage-selection step: the
//! vehicle's insured value, the chosen package, the editable line items, the
//! bonus, and the running total. Every mutation re-aggregates the total
//! before returning, so the total is never stale.
//!
//! # Lifecycle
//!
//! ```text
//! new -> select_package -> (edit_sum_insured | edit_deductible | set_bonus | remove_line)* -> submission
//!             ^                                    |
//!             +----------- select_package ---------+
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use core_kernel::{CoverageId, Currency, Money, PackageId, QuoteId};
use crate::coverage::CoverageCatalog;
use crate::error::QuoteError;
use crate::events::QuoteEvent;
use crate::limits::QuoteLimits;
use crate::line_item::QuoteLineItem;
use crate::resolver::{resolve_package, UnresolvedAssociation};
use crate::totals::{aggregate, QuoteTotal};

/// Working state of a quote on the coverage-selection step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteWorksheet {
    id: QuoteId,
    insured_value: Money,
    limits: QuoteLimits,
    package_id: Option<PackageId>,
    lines: Vec<QuoteLineItem>,
    unresolved: Vec<UnresolvedAssociation>,
    bonus_percentage: Decimal,
    total: QuoteTotal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Everything the persistence action needs to store a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSubmission {
    pub quote_id: QuoteId,
    pub package_id: PackageId,
    pub insured_value: Money,
    pub lines: Vec<QuoteLineItem>,
    pub total: QuoteTotal,
    pub quoted_at: DateTime<Utc>,
}

impl QuoteWorksheet {
    /// Starts a worksheet for a vehicle's insured value
    pub fn new(insured_value: Money, limits: QuoteLimits) -> Self {
        let now = Utc::now();
        Self {
            id: QuoteId::new_v7(),
            insured_value,
            limits,
            package_id: None,
            lines: Vec::new(),
            unresolved: Vec::new(),
            bonus_percentage: Decimal::ZERO,
            total: QuoteTotal::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> QuoteId {
        self.id
    }

    pub fn insured_value(&self) -> Money {
        self.insured_value
    }

    /// Currency of every amount on the worksheet
    pub fn currency(&self) -> Currency {
        self.insured_value.currency()
    }

    pub fn limits(&self) -> &QuoteLimits {
        &self.limits
    }

    pub fn package_id(&self) -> Option<PackageId> {
        self.package_id
    }

    pub fn lines(&self) -> &[QuoteLineItem] {
        &self.lines
    }

    /// Looks up the line for a coverage
    pub fn line(&self, coverage_id: CoverageId) -> Option<&QuoteLineItem> {
        self.lines.iter().find(|line| line.coverage_id == coverage_id)
    }

    /// Associations of the selected package that could not be resolved
    pub fn unresolved(&self) -> &[UnresolvedAssociation] {
        &self.unresolved
    }

    pub fn bonus_percentage(&self) -> Decimal {
        self.bonus_percentage
    }

    pub fn total(&self) -> &QuoteTotal {
        &self.total
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Selects a package, replacing every line item
    ///
    /// # Errors
    ///
    /// * `QuoteError::PackageNotFound` if the catalog has no associations
    ///   for the package
    /// * `QuoteError::Money` if a coverage is priced in another currency
    ///   than the insured value
    ///
    /// On error the worksheet is left unchanged.
    pub fn select_package(&mut self, catalog: &CoverageCatalog, package_id: PackageId) -> Result<(), QuoteError> {
        if !catalog.has_package(package_id) {
            return Err(QuoteError::package_not_found(package_id));
        }
        for association in catalog.associations_for(package_id) {
            if let Some(coverage) = catalog.coverage(association.coverage_id) {
                self.insured_value.ensure_currency(coverage.currency)?;
            }
        }

        let resolution = resolve_package(catalog, package_id, self.insured_value.amount());
        if !resolution.is_complete() {
            warn!(
                quote = %self.id,
                package = %package_id,
                unresolved = resolution.unresolved.len(),
                "Package selected with unresolved coverages"
            );
        }
        self.package_id = Some(package_id);
        self.lines = resolution.lines;
        self.unresolved = resolution.unresolved;
        self.recompute();

        info!(
            quote = %self.id,
            package = %package_id,
            lines = self.lines.len(),
            total = %self.total.total,
            "Package selected"
        );
        Ok(())
    }

    /// Changes the sum insured of one line
    pub fn edit_sum_insured(
        &mut self,
        catalog: &CoverageCatalog,
        coverage_id: CoverageId,
        sum_insured: Decimal,
    ) -> Result<(), QuoteError> {
        let coverage = catalog.require_coverage(coverage_id)?;
        self.line_mut(coverage_id)?.set_sum_insured(coverage, sum_insured)?;
        self.recompute();
        Ok(())
    }

    /// Changes the deductible of one line
    pub fn edit_deductible(
        &mut self,
        catalog: &CoverageCatalog,
        coverage_id: CoverageId,
        deductible: Decimal,
    ) -> Result<(), QuoteError> {
        let coverage = catalog.require_coverage(coverage_id)?;
        self.line_mut(coverage_id)?.set_deductible(coverage, deductible)?;
        self.recompute();
        Ok(())
    }

    /// Sets the bonus/discount percentage
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::BonusOutOfRange` outside `[0, max_bonus_percentage]`.
    pub fn set_bonus(&mut self, bonus_percentage: Decimal) -> Result<(), QuoteError> {
        self.limits.validate_bonus(bonus_percentage)?;
        self.bonus_percentage = bonus_percentage;
        self.recompute();
        Ok(())
    }

    /// Removes an optional line
    ///
    /// # Errors
    ///
    /// * `QuoteError::LineItemNotFound` if the coverage is not on the quote
    /// * `QuoteError::MandatoryCoverage` if the line is mandatory; nothing is removed
    pub fn remove_line(&mut self, coverage_id: CoverageId) -> Result<QuoteLineItem, QuoteError> {
        let position = self
            .lines
            .iter()
            .position(|line| line.coverage_id == coverage_id)
            .ok_or_else(|| QuoteError::line_item_not_found(coverage_id))?;

        if !self.lines[position].is_removable() {
            warn!(quote = %self.id, coverage = %coverage_id, "Refused to remove mandatory coverage");
            return Err(QuoteError::mandatory(coverage_id));
        }

        let removed = self.lines.remove(position);
        self.recompute();
        Ok(removed)
    }

    /// Applies a user event and returns the updated total
    pub fn apply(&mut self, catalog: &CoverageCatalog, event: &QuoteEvent) -> Result<&QuoteTotal, QuoteError> {
        let result = match event {
            QuoteEvent::SelectPackage { package_id } => self.select_package(catalog, *package_id),
            QuoteEvent::EditSumInsured { coverage_id, sum_insured } => {
                self.edit_sum_insured(catalog, *coverage_id, *sum_insured)
            }
            QuoteEvent::EditDeductible { coverage_id, deductible } => {
                self.edit_deductible(catalog, *coverage_id, *deductible)
            }
            QuoteEvent::EditBonus { bonus_percentage } => self.set_bonus(*bonus_percentage),
            QuoteEvent::RemoveLine { coverage_id } => self.remove_line(*coverage_id).map(|_| ()),
        };

        match &result {
            Err(err) if err.is_rejected_edit() => {
                info!(quote = %self.id, event = event.kind(), error = %err, "Quote edit rejected");
            }
            Err(err) => {
                warn!(quote = %self.id, event = event.kind(), error = %err, "Quote event failed");
            }
            Ok(()) => {}
        }
        result.map(|_| &self.total)
    }

    /// Prepares the quote for the persistence action
    ///
    /// # Errors
    ///
    /// * `QuoteError::NoPackageSelected` before a package is chosen
    /// * `QuoteError::EmptyQuote` when every line has been removed
    pub fn submission(&self) -> Result<QuoteSubmission, QuoteError> {
        let package_id = self.package_id.ok_or(QuoteError::NoPackageSelected)?;
        if self.lines.is_empty() {
            return Err(QuoteError::EmptyQuote);
        }

        info!(
            quote = %self.id,
            package = %package_id,
            total = %self.total.total_money(self.currency()),
            "Quote ready for submission"
        );

        Ok(QuoteSubmission {
            quote_id: self.id,
            package_id,
            insured_value: self.insured_value,
            lines: self.lines.clone(),
            total: self.total,
            quoted_at: Utc::now(),
        })
    }

    fn line_mut(&mut self, coverage_id: CoverageId) -> Result<&mut QuoteLineItem, QuoteError> {
        self.lines
            .iter_mut()
            .find(|line| line.coverage_id == coverage_id)
            .ok_or_else(|| QuoteError::line_item_not_found(coverage_id))
    }

    fn recompute(&mut self) {
        self.total = aggregate(&self.lines, self.bonus_percentage);
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::{CoverageDefinition, PackageAssociation};
    use rust_decimal_macros::dec;

    fn catalog() -> CoverageCatalog {
        let collision = CoverageDefinition::percentage(CoverageId::new(1), "Daños materiales", dec!(2))
            .with_sum_insured_range(dec!(0), dec!(2000000))
            .with_deductible_range(dec!(5), dec!(10), dec!(5))
            .linked_to_insured_value();
        let assistance = CoverageDefinition::flat(CoverageId::new(2), "Asistencia vial", dec!(1200));

        CoverageCatalog::new(
            vec![collision, assistance],
            vec![
                PackageAssociation::new(PackageId::new(1), CoverageId::new(1), true),
                PackageAssociation::new(PackageId::new(1), CoverageId::new(2), false),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_select_package_prices_lines() {
        let mut worksheet = QuoteWorksheet::new(Money::mxn(dec!(200000)), QuoteLimits::default());
        worksheet.select_package(&catalog(), PackageId::new(1)).unwrap();

        assert_eq!(worksheet.lines().len(), 2);
        assert_eq!(worksheet.total().total, dec!(5000));
    }

    #[test]
    fn test_unknown_package_leaves_worksheet_unchanged() {
        let mut worksheet = QuoteWorksheet::new(Money::mxn(dec!(200000)), QuoteLimits::default());
        let result = worksheet.select_package(&catalog(), PackageId::new(9));

        assert!(matches!(result, Err(QuoteError::PackageNotFound(_))));
        assert!(worksheet.package_id().is_none());
    }

    #[test]
    fn test_foreign_currency_package_rejected() {
        let mut worksheet = QuoteWorksheet::new(Money::new(dec!(200000), Currency::USD), QuoteLimits::default());
        let result = worksheet.select_package(&catalog(), PackageId::new(1));

        assert!(matches!(result, Err(QuoteError::Money(_))));
        assert!(worksheet.lines().is_empty());
        assert!(worksheet.package_id().is_none());
    }

    #[test]
    fn test_mandatory_line_is_kept() {
        let mut worksheet = QuoteWorksheet::new(Money::mxn(dec!(200000)), QuoteLimits::default());
        worksheet.select_package(&catalog(), PackageId::new(1)).unwrap();

        let result = worksheet.remove_line(CoverageId::new(1));
        assert!(matches!(result, Err(QuoteError::MandatoryCoverage(_))));
        assert_eq!(worksheet.lines().len(), 2);
    }

    #[test]
    fn test_submission_requires_package() {
        let worksheet = QuoteWorksheet::new(Money::mxn(dec!(200000)), QuoteLimits::default());
        assert!(matches!(worksheet.submission(), Err(QuoteError::NoPackageSelected)));
    }

    #[test]
    fn test_worksheet_survives_serialization() {
        let mut worksheet = QuoteWorksheet::new(Money::mxn(dec!(200000)), QuoteLimits::default());
        worksheet.select_package(&catalog(), PackageId::new(1)).unwrap();
        worksheet.set_bonus(dec!(10)).unwrap();

        let json = serde_json::to_string(&worksheet).unwrap();
        let restored: QuoteWorksheet = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.id(), worksheet.id());
        assert_eq!(restored.lines(), worksheet.lines());
        assert_eq!(restored.total(), worksheet.total());
    }
}
