//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.
//! Amounts are kept exact; rounding to the currency's minor unit happens only
//! when a value is rendered for display.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    MXN,
    USD,
    EUR,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Returns the currency symbol as rendered by the es-MX locale
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::MXN => "$",
            Currency::USD => "USD ",
            Currency::EUR => "EUR ",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::MXN => "MXN",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),
}

/// A monetary amount with associated currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a Money value in Mexican pesos
    pub fn mxn(amount: Decimal) -> Self {
        Self::new(amount, Currency::MXN)
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Fails unless `other` is expressed in this amount's currency
    pub fn ensure_currency(&self, other: Currency) -> Result<(), MoneyError> {
        if self.currency != other {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.to_string(),
            ));
        }
        Ok(())
    }

    /// Renders the amount the way the es-MX locale does, e.g. `$200,000.00`
    pub fn to_display(&self) -> String {
        format_es_mx(self.amount, self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display())
    }
}

/// Formats an amount with es-MX conventions: currency symbol prefix,
/// `,` thousands separator, `.` decimal separator, and the currency's
/// decimal places (half away from zero).
///
/// # Example
///
/// ```
/// use core_kernel::{format_es_mx, Currency};
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_es_mx(dec!(1234567.891), Currency::MXN), "$1,234,567.89");
/// ```
pub fn format_es_mx(amount: Decimal, currency: Currency) -> String {
    let dp = currency.decimal_places();
    let rounded = amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.dp$}", rounded.abs(), dp = dp as usize);

    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(currency.symbol());
    out.push_str(&grouped);
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Represents a percentage rate (premium rate, deductible, bonus)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.05 for 5%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal value (e.g., 0.05 for 5%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 5.0 for 5%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Returns `1 - rate`, the share left after a reduction by this rate
    pub fn complement(&self) -> Rate {
        Rate::new(Decimal::ONE - self.value)
    }

    /// Applies this rate to a raw amount
    pub fn of(&self, amount: Decimal) -> Decimal {
        amount * self.value
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().round_dp(4).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation_keeps_full_precision() {
        let m = Money::new(dec!(100.123456789), Currency::MXN);
        assert_eq!(m.amount(), dec!(100.123456789));
        assert_eq!(m.currency(), Currency::MXN);
    }

    #[test]
    fn test_currency_mismatch() {
        let mxn = Money::mxn(dec!(100.00));

        assert!(mxn.ensure_currency(Currency::MXN).is_ok());
        assert_eq!(
            mxn.ensure_currency(Currency::USD),
            Err(MoneyError::CurrencyMismatch("MXN".to_string(), "USD".to_string()))
        );
    }

    #[test]
    fn test_es_mx_display() {
        assert_eq!(Money::mxn(dec!(3800)).to_string(), "$3,800.00");
        assert_eq!(Money::mxn(dec!(200000)).to_string(), "$200,000.00");
        assert_eq!(Money::mxn(dec!(0.005)).to_string(), "$0.01");
        assert_eq!(Money::mxn(dec!(-1234.5)).to_string(), "-$1,234.50");
        assert_eq!(Money::new(dec!(999), Currency::USD).to_string(), "USD 999.00");
    }

    #[test]
    fn test_rate_complement() {
        let deductible = Rate::from_percentage(dec!(5));
        assert_eq!(deductible.complement().as_decimal(), dec!(0.95));
        assert_eq!(deductible.complement().of(dec!(4000)), dec!(3800));
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::from_percentage(dec!(2.5)).to_string(), "2.5%");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rate_and_complement_split_the_amount(
            percentage in 0i64..10_000i64,
            cents in 0i64..1_000_000_000i64
        ) {
            let rate = Rate::from_percentage(Decimal::new(percentage, 2));
            let amount = Decimal::new(cents, 2);
            prop_assert_eq!(rate.of(amount) + rate.complement().of(amount), amount);
        }

        #[test]
        fn display_never_loses_the_integer_digits(minor in 0i64..10_000_000_000i64) {
            let money = Money::mxn(Decimal::new(minor, 2));
            let digits: String = money
                .to_display()
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            let expected = minor.to_string();
            prop_assert_eq!(digits.trim_start_matches('0'), expected.trim_start_matches('0'));
        }
    }
}
