//! Premium calculation
//!
//! A coverage is priced either with a flat base premium or as a percentage
//! of the chosen sum insured. Either way the result is reduced by the chosen
//! deductible percentage. Values stay exact; rounding is a display concern.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Rate;
use crate::coverage::CoverageDefinition;

/// How a coverage derives its gross premium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PremiumBasis {
    /// Fixed amount, independent of the sum insured
    Flat(Decimal),
    /// Rate applied to the sum insured
    PercentageOfSumInsured(Rate),
}

impl PremiumBasis {
    /// Gross premium before the deductible reduction
    pub fn gross(&self, sum_insured: Decimal) -> Decimal {
        match self {
            PremiumBasis::Flat(amount) => *amount,
            PremiumBasis::PercentageOfSumInsured(rate) => rate.of(sum_insured),
        }
    }
}

impl CoverageDefinition {
    /// Returns the pricing rule for this coverage
    ///
    /// A zero base premium is treated the same as a missing one.
    pub fn pricing_basis(&self) -> PremiumBasis {
        match self.base_premium {
            Some(amount) if !amount.is_zero() => PremiumBasis::Flat(amount),
            _ => PremiumBasis::PercentageOfSumInsured(Rate::from_percentage(self.premium_percentage)),
        }
    }
}

/// Computes the premium of one coverage
///
/// `premium = gross × (1 − deductible_percent / 100)` where `gross` is the
/// flat base premium if the coverage has one, otherwise
/// `sum_insured × premium_percentage / 100`.
///
/// The deductible is not range-checked here; callers that accept user input
/// validate it against the coverage bounds first.
///
/// # Example
///
/// ```
/// use core_kernel::CoverageId;
/// use domain_quote::{compute_premium, CoverageDefinition};
/// use rust_decimal_macros::dec;
///
/// let coverage = CoverageDefinition::percentage(CoverageId::new(1), "Daños materiales", dec!(2));
/// assert_eq!(compute_premium(&coverage, dec!(200000), dec!(5)), dec!(3800));
/// ```
pub fn compute_premium(
    coverage: &CoverageDefinition,
    sum_insured: Decimal,
    deductible_percent: Decimal,
) -> Decimal {
    let gross = coverage.pricing_basis().gross(sum_insured);
    Rate::from_percentage(deductible_percent).complement().of(gross)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::CoverageId;
    use rust_decimal_macros::dec;

    #[test]
    fn test_percentage_premium_with_deductible() {
        let coverage = CoverageDefinition::percentage(CoverageId::new(1), "Robo total", dec!(2));
        assert_eq!(compute_premium(&coverage, dec!(200000), dec!(5)), dec!(3800));
    }

    #[test]
    fn test_flat_premium_ignores_sum_insured() {
        let coverage = CoverageDefinition::flat(CoverageId::new(2), "Asistencia vial", dec!(1200));
        assert_eq!(compute_premium(&coverage, dec!(0), dec!(0)), dec!(1200));
        assert_eq!(compute_premium(&coverage, dec!(999999), dec!(10)), dec!(1080));
    }

    #[test]
    fn test_zero_sum_insured_yields_zero() {
        let coverage = CoverageDefinition::percentage(CoverageId::new(3), "Gastos médicos", dec!(3));
        assert_eq!(compute_premium(&coverage, dec!(0), dec!(0)), dec!(0));
    }

    #[test]
    fn test_zero_base_premium_falls_back_to_percentage() {
        let mut coverage = CoverageDefinition::percentage(CoverageId::new(4), "RC", dec!(1));
        coverage.base_premium = Some(dec!(0));
        assert_eq!(coverage.pricing_basis(), PremiumBasis::PercentageOfSumInsured(Rate::from_percentage(dec!(1))));
        assert_eq!(compute_premium(&coverage, dec!(100000), dec!(0)), dec!(1000));
    }

    #[test]
    fn test_no_intermediate_rounding() {
        let coverage = CoverageDefinition::percentage(CoverageId::new(5), "Cristales", dec!(1.37));
        assert_eq!(compute_premium(&coverage, dec!(123457), dec!(3)), dec!(1640.620073));
    }
}
