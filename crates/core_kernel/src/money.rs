//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    GBP,
    EUR,
    USD,
    AUD,
    CAD,
    INR,
    JPY,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::GBP => "£",
            Currency::EUR => "€",
            Currency::USD => "$",
            Currency::AUD => "A$",
            Currency::CAD => "C$",
            Currency::INR => "₹",
            Currency::JPY => "¥",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::GBP => "GBP",
            Currency::EUR => "EUR",
            Currency::USD => "USD",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
            Currency::INR => "INR",
            Currency::JPY => "JPY",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::GBP
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

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount with associated currency
///
/// Amounts keep the full precision they were created with. Rounding to the
/// currency's minor unit only happens on display, so a rate quoted with
/// sub-cent precision multiplies exactly.
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

    /// Creates Money from an integer amount in minor units (e.g., pence)
    pub fn from_minor(minor_units: i64, currency: Currency) -> Self {
        Self::new(Decimal::new(minor_units, currency.decimal_places()), currency)
    }

    /// Creates Money from a floating point amount
    ///
    /// Rejects NaN and infinities, which have no decimal representation.
    pub fn from_f64(amount: f64, currency: Currency) -> Result<Self, MoneyError> {
        if !amount.is_finite() {
            return Err(MoneyError::InvalidAmount(format!("{} is not a finite number", amount)));
        }
        let amount = Decimal::try_from(amount)
            .map_err(|e| MoneyError::InvalidAmount(format!("{}: {}", amount, e)))?;
        Ok(Self::new(amount, currency))
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Checked addition that returns an error on currency mismatch or overflow
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        self.amount
            .checked_add(other.amount)
            .map(|amount| Self::new(amount, self.currency))
            .ok_or(MoneyError::Overflow)
    }

    /// Multiplies by a whole number of units (e.g. nights)
    pub fn times(&self, units: u32) -> Result<Self, MoneyError> {
        self.amount
            .checked_mul(Decimal::from(units))
            .map(|amount| Self::new(amount, self.currency))
            .ok_or(MoneyError::Overflow)
    }

    /// Sums an iterator of amounts, all of which must be in `currency`
    pub fn try_sum<'a, I>(currency: Currency, items: I) -> Result<Money, MoneyError>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        items
            .into_iter()
            .try_fold(Money::zero(currency), |acc, m| acc.checked_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places();
        write!(
            f,
            "{}{:.dp$}",
            self.currency.symbol(),
            self.amount,
            dp = dp as usize
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(100.50), Currency::GBP);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::GBP);
    }

    #[test]
    fn test_money_from_minor() {
        let m = Money::from_minor(10050, Currency::GBP);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_from_f64() {
        let m = Money::from_f64(20.0, Currency::GBP).unwrap();
        assert_eq!(m.amount(), dec!(20));

        assert!(Money::from_f64(f64::NAN, Currency::GBP).is_err());
        assert!(Money::from_f64(f64::INFINITY, Currency::GBP).is_err());
        assert!(Money::from_f64(f64::NEG_INFINITY, Currency::GBP).is_err());
    }

    #[test]
    fn test_money_times() {
        let rate = Money::new(dec!(20), Currency::GBP);
        assert_eq!(rate.times(17).unwrap().amount(), dec!(340));
        assert!(rate.times(0).unwrap().is_zero());
    }

    #[test]
    fn test_sub_cent_precision_is_kept() {
        let rate = Money::new(dec!(10.12345), Currency::GBP);
        assert_eq!(rate.times(10).unwrap().amount(), dec!(101.2345));
        assert_eq!(Money::new(dec!(0.00004), Currency::GBP).amount(), dec!(0.00004));
    }

    #[test]
    fn test_times_overflow() {
        let huge = Money::new(Decimal::MAX, Currency::GBP);
        assert_eq!(huge.times(2), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_checked_add_overflow() {
        let huge = Money::new(Decimal::MAX, Currency::GBP);
        let one = Money::new(dec!(1), Currency::GBP);
        assert_eq!(huge.checked_add(&one), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_currency_mismatch() {
        let gbp = Money::new(dec!(100.00), Currency::GBP);
        let eur = Money::new(dec!(100.00), Currency::EUR);

        let result = gbp.checked_add(&eur);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_try_sum() {
        let items = vec![
            Money::new(dec!(10), Currency::GBP),
            Money::new(dec!(15.50), Currency::GBP),
        ];
        let total = Money::try_sum(Currency::GBP, &items).unwrap();
        assert_eq!(total.amount(), dec!(25.50));

        let mixed = vec![Money::new(dec!(10), Currency::EUR)];
        assert!(Money::try_sum(Currency::GBP, &mixed).is_err());
    }

    #[test]
    fn test_display() {
        let m = Money::new(dec!(340), Currency::GBP);
        assert_eq!(m.to_string(), "£340.00");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn times_matches_repeated_addition(
            minor in 1i64..100_000i64,
            units in 1u32..62u32
        ) {
            let rate = Money::from_minor(minor, Currency::GBP);
            let repeated = (0..units).try_fold(Money::zero(Currency::GBP), |acc, _| acc.checked_add(&rate)).unwrap();
            prop_assert_eq!(rate.times(units).unwrap(), repeated);
        }
    }
}
