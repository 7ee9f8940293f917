//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random catalog data
//! that maintains domain invariants.

use core_kernel::CoverageId;
use domain_quote::CoverageDefinition;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for amounts with two decimals between 0 and 10,000,000
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for percentages with two decimals in `[0, max]`
pub fn percentage_strategy(max: u32) -> impl Strategy<Value = Decimal> {
    (0i64..=(max as i64 * 100)).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

/// Strategy for premium rates between 0 and 10%
pub fn premium_percentage_strategy() -> impl Strategy<Value = Decimal> {
    percentage_strategy(10)
}

/// Strategy for coverages priced by percentage
pub fn percentage_coverage_strategy() -> impl Strategy<Value = CoverageDefinition> {
    (1i64..10_000i64, premium_percentage_strategy()).prop_map(|(id, rate)| {
        CoverageDefinition::percentage(CoverageId::new(id), "Generada", rate)
    })
}

/// Strategy for coverages with a flat base premium
pub fn flat_coverage_strategy() -> impl Strategy<Value = CoverageDefinition> {
    (1i64..10_000i64, 1i64..10_000_000i64).prop_map(|(id, cents)| {
        CoverageDefinition::flat(CoverageId::new(id), "Generada", Decimal::new(cents, 2))
    })
}

/// Strategy for a list of line premiums
pub fn premiums_strategy() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(
        (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
        0..12,
    )
}
