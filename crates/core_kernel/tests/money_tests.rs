//! Unit tests for the Money module
//!
//! Tests cover money creation, currency checks, rates,
//! and es-MX display formatting.

use core_kernel::{format_es_mx, Currency, Money, MoneyError, Rate};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_keeps_exact_amount() {
        let m = Money::new(dec!(3799.999999), Currency::MXN);
        assert_eq!(m.amount(), dec!(3799.999999));
    }

    #[test]
    fn test_mxn_shortcut() {
        let m = Money::mxn(dec!(1500));
        assert_eq!(m.currency(), Currency::MXN);
    }

    #[test]
    fn test_default_currency_is_mxn() {
        assert_eq!(Currency::default(), Currency::MXN);
    }
}

mod currency_checks {
    use super::*;

    #[test]
    fn test_same_currency_passes() {
        assert!(Money::mxn(dec!(3800)).ensure_currency(Currency::MXN).is_ok());
    }

    #[test]
    fn test_currency_mismatch_names_both_codes() {
        let result = Money::mxn(dec!(3800)).ensure_currency(Currency::EUR);
        assert_eq!(
            result,
            Err(MoneyError::CurrencyMismatch("MXN".to_string(), "EUR".to_string()))
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "Currency mismatch: cannot operate on MXN and EUR"
        );
    }
}

mod rates {
    use super::*;

    #[test]
    fn test_from_percentage() {
        let rate = Rate::from_percentage(dec!(2));
        assert_eq!(rate.as_decimal(), dec!(0.02));
        assert_eq!(rate.as_percentage(), dec!(2));
    }

    #[test]
    fn test_rate_of_amount() {
        let rate = Rate::from_percentage(dec!(2));
        assert_eq!(rate.of(dec!(200000)), dec!(4000));
    }

    #[test]
    fn test_complement_of_zero_is_one() {
        let rate = Rate::from_percentage(dec!(0));
        assert_eq!(rate.complement().as_decimal(), dec!(1));
    }
}

mod display {
    use super::*;

    #[test]
    fn test_small_amounts_have_no_separator() {
        assert_eq!(format_es_mx(dec!(0), Currency::MXN), "$0.00");
        assert_eq!(format_es_mx(dec!(999.9), Currency::MXN), "$999.90");
    }

    #[test]
    fn test_thousands_are_grouped() {
        assert_eq!(format_es_mx(dec!(1000), Currency::MXN), "$1,000.00");
        assert_eq!(format_es_mx(dec!(4500), Currency::MXN), "$4,500.00");
        assert_eq!(format_es_mx(dec!(12345678.9), Currency::MXN), "$12,345,678.90");
    }

    #[test]
    fn test_rounds_only_at_render_time() {
        let premium = Money::mxn(dec!(1234.5678));
        assert_eq!(premium.to_string(), "$1,234.57");
        assert_eq!(premium.amount(), dec!(1234.5678));
    }

    #[test]
    fn test_foreign_currency_uses_code_prefix() {
        assert_eq!(format_es_mx(dec!(2500), Currency::USD), "USD 2,500.00");
    }
}
