//! Catalog and Range Tests
//!
//! # Test Organization
//!
//! - `catalog_loading` - JSON documents into a validated catalog
//! - `dropdown_ranges` - option lists derived from fixture coverages

use domain_quote::{
    deductible_options, sum_insured_options, CoverageCatalog, QuoteError, QuoteLimits,
};
use rust_decimal_macros::dec;
use test_utils::{CatalogFixtures, CoverageFixtures, IdFixtures};

mod catalog_loading {
    use super::*;

    /// Verifies a back-office style document loads
    #[test]
    fn test_load_document() {
        let json = r#"{
            "coverages": [
                {
                    "id": 1,
                    "name": "Daños materiales",
                    "currency": "MXN",
                    "base_premium": null,
                    "premium_percentage": "2",
                    "sum_insured_min": "0",
                    "sum_insured_max": "5000000",
                    "deductible_min": "5",
                    "deductible_max": "10",
                    "selection_step": "5",
                    "applies_to_insured_value": true
                },
                {
                    "id": 5,
                    "name": "Asistencia vial",
                    "base_premium": 450,
                    "is_special": true
                }
            ],
            "associations": [
                {"package_id": 1, "coverage_id": 1, "is_mandatory": true},
                {"package_id": 1, "coverage_id": 5}
            ]
        }"#;

        let catalog = CoverageCatalog::from_json(json).unwrap();

        assert_eq!(catalog.coverages().len(), 2);
        let roadside = catalog.coverage(IdFixtures::ROADSIDE).unwrap();
        assert_eq!(roadside.base_premium, Some(dec!(450)));
        assert!(roadside.is_special);
        assert!(!catalog.associations()[1].is_mandatory);
    }

    /// The fixture catalog survives a JSON round trip
    #[test]
    fn test_fixture_roundtrip() {
        let json = CatalogFixtures::catalog_json();
        let catalog = CoverageCatalog::from_json(&json).unwrap();

        assert_eq!(catalog.coverages(), CatalogFixtures::catalog().coverages());
        assert_eq!(catalog.packages().len(), 4);
    }

    /// Malformed JSON surfaces as a catalog error
    #[test]
    fn test_malformed_json() {
        let result = CoverageCatalog::from_json("{\"coverages\": [");
        assert!(matches!(result, Err(QuoteError::Catalog(_))));
    }

    /// Inconsistent definitions are rejected on load
    #[test]
    fn test_inverted_range_rejected() {
        let json = r#"{"coverages": [{"id": 1, "name": "X", "deductible_min": 10, "deductible_max": 5}]}"#;
        let result = CoverageCatalog::from_json(json);
        assert!(matches!(result, Err(QuoteError::InvalidCoverage(_))));
    }

    /// A deductible above 100% would turn the premium negative
    #[test]
    fn test_deductible_over_one_hundred_rejected() {
        let json = r#"{"coverages": [{
            "id": 1, "name": "X", "premium_percentage": "2",
            "sum_insured_max": "1000000",
            "deductible_min": "0", "deductible_max": "150", "selection_step": "50"
        }]}"#;
        let result = CoverageCatalog::from_json(json);
        assert!(matches!(result, Err(QuoteError::InvalidCoverage(_))));
    }

    /// Negative flat premiums are rejected on load
    #[test]
    fn test_negative_base_premium_rejected() {
        let json = r#"{"coverages": [{"id": 5, "name": "Asistencia", "base_premium": "-450"}]}"#;
        let result = CoverageCatalog::from_json(json);
        assert!(matches!(result, Err(QuoteError::InvalidCoverage(_))));
    }

    /// Negative sum insured bounds are rejected on load
    #[test]
    fn test_negative_sum_insured_rejected() {
        let json = r#"{"coverages": [{
            "id": 3, "name": "RC", "premium_percentage": "0.2",
            "sum_insured_min": "-500000", "sum_insured_max": "3000000"
        }]}"#;
        let result = CoverageCatalog::from_json(json);
        assert!(matches!(result, Err(QuoteError::InvalidCoverage(_))));
    }

    /// Deserializing the catalog type directly applies the same validation
    #[test]
    fn test_serde_deserialize_validates() {
        let json = r#"{"coverages": [{"id": 1, "name": "A"}, {"id": 1, "name": "B"}]}"#;
        let result: Result<CoverageCatalog, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}

mod dropdown_ranges {
    use super::*;

    /// Theft deductible options: 10, 15, 20
    #[test]
    fn test_theft_deductibles() {
        let options = deductible_options(&CoverageFixtures::theft()).unwrap();
        assert_eq!(options, vec![dec!(10), dec!(15), dec!(20)]);
    }

    /// Liability has a fixed deductible of zero
    #[test]
    fn test_fixed_deductible() {
        let options = deductible_options(&CoverageFixtures::liability()).unwrap();
        assert_eq!(options, vec![dec!(0)]);
    }

    /// Medical sum insured options step by the configured increment
    #[test]
    fn test_medical_sum_insured_options() {
        let step = QuoteLimits::default().sum_insured_step;
        let options = sum_insured_options(&CoverageFixtures::medical(), dec!(200000), step).unwrap();

        assert_eq!(options.len(), 41);
        assert_eq!(options.first(), Some(&dec!(100000)));
        assert_eq!(options.last(), Some(&dec!(500000)));
    }

    /// A step too fine to enumerate is reported instead of overflowing
    #[test]
    fn test_microscopic_step_reports_too_large() {
        let json = r#"{"coverages": [{
            "id": 1, "name": "X", "premium_percentage": "2",
            "deductible_min": "0", "deductible_max": "100",
            "selection_step": "0.0000000000000000000000000001"
        }]}"#;
        let catalog = CoverageCatalog::from_json(json).unwrap();
        let coverage = catalog.coverage(IdFixtures::COLLISION).unwrap();

        assert!(matches!(
            deductible_options(coverage),
            Err(QuoteError::RangeTooLarge { .. })
        ));
    }

    /// Every offered deductible is accepted by the editor
    #[test]
    fn test_offered_deductibles_are_accepted() {
        let catalog = CatalogFixtures::catalog();
        let (mut worksheet, _) = test_utils::TestWorksheetBuilder::new()
            .with_package(IdFixtures::AMPLIA)
            .build();

        for coverage in catalog.coverages() {
            for deductible in deductible_options(coverage).unwrap() {
                worksheet
                    .edit_deductible(&catalog, coverage.id, deductible)
                    .unwrap();
            }
        }
    }
}
