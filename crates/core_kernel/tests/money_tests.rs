//! Unit tests for the Money module
//!
//! Tests cover creation, predicates, arithmetic and display.

use core_kernel::{Currency, Money, MoneyError};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_keeps_full_precision() {
        let m = Money::new(dec!(23.333333), Currency::GBP);
        assert_eq!(m.amount(), dec!(23.333333));
    }

    #[test]
    fn test_from_minor_zero_decimal_currency() {
        let m = Money::from_minor(4500, Currency::JPY);
        assert_eq!(m.amount(), dec!(4500));
    }

    #[test]
    fn test_from_f64_rejects_non_finite() {
        let result = Money::from_f64(f64::NAN, Currency::GBP);
        assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_from_f64_keeps_decimal_value() {
        let m = Money::from_f64(12.5, Currency::GBP).unwrap();
        assert_eq!(m.amount(), dec!(12.5));
    }

    #[test]
    fn test_default_currency_is_gbp() {
        assert_eq!(Currency::default(), Currency::GBP);
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_is_positive() {
        assert!(Money::new(dec!(0.01), Currency::GBP).is_positive());
        assert!(!Money::zero(Currency::GBP).is_positive());
        assert!(!Money::new(dec!(-1), Currency::GBP).is_positive());
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_currency_mismatch() {
        let a = Money::new(dec!(100.00), Currency::GBP);
        let b = Money::new(dec!(50.00), Currency::EUR);
        assert!(matches!(a.checked_add(&b), Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_times_fractional_rate() {
        let rate = Money::new(dec!(23.3333), Currency::GBP);
        assert_eq!(rate.times(3).unwrap().amount(), dec!(69.9999));
    }

    #[test]
    fn test_times_large_rate_overflows() {
        let rate = Money::from_f64(1e28, Currency::GBP).unwrap();
        assert_eq!(rate.times(17), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_try_sum_overflow() {
        let rate = Money::from_f64(5e28, Currency::GBP).unwrap();
        let items = vec![rate, rate];
        assert_eq!(Money::try_sum(Currency::GBP, &items), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_try_sum_empty_is_zero() {
        let total = Money::try_sum(Currency::EUR, std::iter::empty()).unwrap();
        assert_eq!(total, Money::zero(Currency::EUR));
    }
}

mod display {
    use super::*;

    #[test]
    fn test_display_uses_currency_places() {
        assert_eq!(Money::new(dec!(1.5), Currency::EUR).to_string(), "€1.50");
        assert_eq!(Money::new(dec!(4500), Currency::JPY).to_string(), "¥4500");
    }
}
