//! Test Data Builders
//!
//! Builders let a test state only the parts of a catalog or worksheet it
//! cares about and take fixture defaults for the rest.

use core_kernel::{CoverageId, Money, PackageId};
use domain_quote::{
    CoverageCatalog, CoverageDefinition, PackageAssociation, QuoteLimits, QuoteWorksheet,
};
use rust_decimal::Decimal;

use crate::fixtures::{CatalogFixtures, MoneyFixtures};

/// Builder for catalogs assembled coverage by coverage
#[derive(Default)]
pub struct TestCatalogBuilder {
    coverages: Vec<CoverageDefinition>,
    associations: Vec<PackageAssociation>,
}

impl TestCatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a coverage definition
    pub fn coverage(mut self, coverage: CoverageDefinition) -> Self {
        self.coverages.push(coverage);
        self
    }

    /// Adds a coverage and links it to a package in one step
    pub fn in_package(mut self, package_id: PackageId, coverage: CoverageDefinition, is_mandatory: bool) -> Self {
        self.associations
            .push(PackageAssociation::new(package_id, coverage.id, is_mandatory));
        self.coverages.push(coverage);
        self
    }

    /// Links a package to a coverage id that may not exist
    pub fn association(mut self, package_id: PackageId, coverage_id: CoverageId, is_mandatory: bool) -> Self {
        self.associations
            .push(PackageAssociation::new(package_id, coverage_id, is_mandatory));
        self
    }

    /// Builds the catalog, panicking on invalid definitions
    pub fn build(self) -> CoverageCatalog {
        CoverageCatalog::new(self.coverages, self.associations).expect("test catalog is valid")
    }
}

/// Builder for worksheets with a package already selected
pub struct TestWorksheetBuilder {
    catalog: CoverageCatalog,
    insured_value: Money,
    limits: QuoteLimits,
    package_id: Option<PackageId>,
    bonus_percentage: Option<Decimal>,
}

impl Default for TestWorksheetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorksheetBuilder {
    /// Starts from the fixture catalog and insured value
    pub fn new() -> Self {
        Self {
            catalog: CatalogFixtures::catalog(),
            insured_value: MoneyFixtures::insured_value(),
            limits: QuoteLimits::default(),
            package_id: None,
            bonus_percentage: None,
        }
    }

    pub fn with_catalog(mut self, catalog: CoverageCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_insured_value(mut self, insured_value: Money) -> Self {
        self.insured_value = insured_value;
        self
    }

    pub fn with_limits(mut self, limits: QuoteLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_package(mut self, package_id: PackageId) -> Self {
        self.package_id = Some(package_id);
        self
    }

    pub fn with_bonus(mut self, bonus_percentage: Decimal) -> Self {
        self.bonus_percentage = Some(bonus_percentage);
        self
    }

    /// Builds the worksheet and returns it with the catalog it was priced from
    pub fn build(self) -> (QuoteWorksheet, CoverageCatalog) {
        let mut worksheet = QuoteWorksheet::new(self.insured_value, self.limits);
        if let Some(package_id) = self.package_id {
            worksheet
                .select_package(&self.catalog, package_id)
                .expect("test package resolves");
        }
        if let Some(bonus) = self.bonus_percentage {
            worksheet.set_bonus(bonus).expect("test bonus is within limits");
        }
        (worksheet, self.catalog)
    }
}
