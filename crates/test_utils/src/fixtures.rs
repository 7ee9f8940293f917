//! Pre-built Test Fixtures
//!
//! A small but realistic auto catalog: three packages ("Amplia", "Limitada",
//! "Básica") sharing six coverages. Ids and prices are stable so tests can
//! assert exact premiums.

use core_kernel::{CoverageId, Money, PackageId};
use domain_quote::{CoverageCatalog, CoverageDefinition, PackageAssociation};
use rust_decimal_macros::dec;

/// Fixture for catalog ids
pub struct IdFixtures;

impl IdFixtures {
    pub const COLLISION: CoverageId = CoverageId::new(1);
    pub const THEFT: CoverageId = CoverageId::new(2);
    pub const LIABILITY: CoverageId = CoverageId::new(3);
    pub const MEDICAL: CoverageId = CoverageId::new(4);
    pub const ROADSIDE: CoverageId = CoverageId::new(5);
    pub const LEGAL: CoverageId = CoverageId::new(6);
    /// Referenced by a package but absent from the catalog
    pub const MISSING: CoverageId = CoverageId::new(404);

    pub const AMPLIA: PackageId = PackageId::new(1);
    pub const LIMITADA: PackageId = PackageId::new(2);
    pub const BASICA: PackageId = PackageId::new(3);
    /// Package whose only optional extra is unresolvable
    pub const BROKEN: PackageId = PackageId::new(9);
}

/// Fixture for coverage definitions
pub struct CoverageFixtures;

impl CoverageFixtures {
    /// 2% of the insured value, deductible 5–10% in steps of 5
    pub fn collision() -> CoverageDefinition {
        CoverageDefinition::percentage(IdFixtures::COLLISION, "Daños materiales", dec!(2))
            .with_sum_insured_range(dec!(0), dec!(5000000))
            .with_deductible_range(dec!(5), dec!(10), dec!(5))
            .linked_to_insured_value()
    }

    /// 1.5% of the insured value, deductible 10–20% in steps of 5
    pub fn theft() -> CoverageDefinition {
        CoverageDefinition::percentage(IdFixtures::THEFT, "Robo total", dec!(1.5))
            .with_sum_insured_range(dec!(0), dec!(5000000))
            .with_deductible_range(dec!(10), dec!(20), dec!(5))
            .linked_to_insured_value()
    }

    /// 0.2% of a selectable limit between 500,000 and 3,000,000, no deductible
    pub fn liability() -> CoverageDefinition {
        CoverageDefinition::percentage(IdFixtures::LIABILITY, "Responsabilidad civil", dec!(0.2))
            .with_sum_insured_range(dec!(500000), dec!(3000000))
    }

    /// 0.8% of a selectable limit between 100,000 and 500,000
    pub fn medical() -> CoverageDefinition {
        CoverageDefinition::percentage(IdFixtures::MEDICAL, "Gastos médicos ocupantes", dec!(0.8))
            .with_sum_insured_range(dec!(100000), dec!(500000))
    }

    /// Flat 450
    pub fn roadside() -> CoverageDefinition {
        let mut coverage = CoverageDefinition::flat(IdFixtures::ROADSIDE, "Asistencia vial", dec!(450));
        coverage.is_special = true;
        coverage
    }

    /// Flat 350
    pub fn legal() -> CoverageDefinition {
        CoverageDefinition::flat(IdFixtures::LEGAL, "Defensa legal", dec!(350))
    }

    pub fn all() -> Vec<CoverageDefinition> {
        vec![
            Self::collision(),
            Self::theft(),
            Self::liability(),
            Self::medical(),
            Self::roadside(),
            Self::legal(),
        ]
    }
}

/// Fixture for the full catalog
pub struct CatalogFixtures;

impl CatalogFixtures {
    /// Package associations for all fixture packages
    pub fn associations() -> Vec<PackageAssociation> {
        use crate::fixtures::IdFixtures as Id;
        vec![
            // Amplia
            PackageAssociation::new(Id::AMPLIA, Id::COLLISION, true),
            PackageAssociation::new(Id::AMPLIA, Id::THEFT, true),
            PackageAssociation::new(Id::AMPLIA, Id::LIABILITY, true),
            PackageAssociation::new(Id::AMPLIA, Id::MEDICAL, false),
            PackageAssociation::new(Id::AMPLIA, Id::ROADSIDE, false),
            PackageAssociation::new(Id::AMPLIA, Id::LEGAL, false),
            // Limitada
            PackageAssociation::new(Id::LIMITADA, Id::THEFT, true),
            PackageAssociation::new(Id::LIMITADA, Id::LIABILITY, true),
            PackageAssociation::new(Id::LIMITADA, Id::ROADSIDE, false),
            // Básica
            PackageAssociation::new(Id::BASICA, Id::LIABILITY, true),
            PackageAssociation::new(Id::BASICA, Id::LEGAL, false),
            // Broken
            PackageAssociation::new(Id::BROKEN, Id::LIABILITY, true),
            PackageAssociation::new(Id::BROKEN, Id::MISSING, false),
        ]
    }

    /// The validated fixture catalog
    pub fn catalog() -> CoverageCatalog {
        CoverageCatalog::new(CoverageFixtures::all(), Self::associations())
            .expect("fixture catalog is valid")
    }

    /// The fixture catalog as a JSON document
    pub fn catalog_json() -> String {
        serde_json::to_string(&Self::catalog()).expect("fixture catalog serializes")
    }
}

/// Fixture for amounts
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Insured value of a mid-range sedan
    pub fn insured_value() -> Money {
        Money::mxn(dec!(200000))
    }
}
