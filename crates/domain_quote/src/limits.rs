//! Limits applied to user input on the quoting surface

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// Bounds the worksheet enforces on user-entered values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteLimits {
    /// Highest bonus/discount a user may enter, in percent
    pub max_bonus_percentage: Decimal,
    /// Increment used for sum insured dropdowns
    pub sum_insured_step: Decimal,
}

impl Default for QuoteLimits {
    fn default() -> Self {
        Self {
            max_bonus_percentage: dec!(35),
            sum_insured_step: dec!(10000),
        }
    }
}

impl QuoteLimits {
    /// Checks a bonus against `[0, max_bonus_percentage]`
    pub fn validate_bonus(&self, bonus_percentage: Decimal) -> Result<(), QuoteError> {
        if bonus_percentage < Decimal::ZERO || bonus_percentage > self.max_bonus_percentage {
            return Err(QuoteError::BonusOutOfRange {
                value: bonus_percentage,
                max: self.max_bonus_percentage,
            });
        }
        Ok(())
    }
}
