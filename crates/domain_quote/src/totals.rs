//! Premium aggregation

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money, Rate};
use crate::line_item::QuoteLineItem;

/// Aggregated premium of a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuoteTotal {
    /// Sum of all line premiums
    pub subtotal: Decimal,
    /// Bonus/discount applied to the subtotal, in percent
    pub bonus_percentage: Decimal,
    /// Amount taken off by the bonus
    pub bonus_amount: Decimal,
    /// Premium payable
    pub total: Decimal,
}

impl QuoteTotal {
    /// Total premium as money in the quote's currency
    pub fn total_money(&self, currency: Currency) -> Money {
        Money::new(self.total, currency)
    }
}

/// Sums line premiums and applies the bonus
///
/// `total = Σ premium × (1 − bonus / 100)`. The bonus is used as given; range
/// checks belong to whoever accepts it from the user.
pub fn aggregate(lines: &[QuoteLineItem], bonus_percentage: Decimal) -> QuoteTotal {
    let subtotal: Decimal = lines.iter().map(|line| line.premium).sum();
    let total = Rate::from_percentage(bonus_percentage).complement().of(subtotal);

    QuoteTotal {
        subtotal,
        bonus_percentage,
        bonus_amount: subtotal - total,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::CoverageDefinition;
    use core_kernel::CoverageId;
    use rust_decimal_macros::dec;

    fn line(id: i64, premium: Decimal) -> QuoteLineItem {
        let coverage = CoverageDefinition::flat(CoverageId::new(id), "Cobertura", premium);
        QuoteLineItem::initialize(&coverage, false, dec!(0))
    }

    #[test]
    fn test_bonus_applied_to_subtotal() {
        let total = aggregate(&[line(1, dec!(3800)), line(2, dec!(1200))], dec!(10));
        assert_eq!(total.subtotal, dec!(5000));
        assert_eq!(total.bonus_amount, dec!(500));
        assert_eq!(total.total, dec!(4500));
    }

    #[test]
    fn test_no_lines_totals_zero() {
        let total = aggregate(&[], dec!(35));
        assert!(total.total.is_zero());
    }

    #[test]
    fn test_out_of_range_bonus_is_not_clamped() {
        let total = aggregate(&[line(1, dec!(1000))], dec!(150));
        assert_eq!(total.total, dec!(-500));
    }
}
