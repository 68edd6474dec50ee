//! Pre-built Test Fixtures
//!
//! Ready-to-use stays and rates. The scenario fixtures mirror the reference
//! billing examples so tests across crates agree on the expected numbers.

use chrono::NaiveDate;
use core_kernel::{Currency, Money};
use domain_billing::{NightlyRate, StayPeriod};
use rust_decimal_macros::dec;

/// Builds a date, panicking on an invalid literal
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Fixture for nightly rates
pub struct RateFixtures;

impl RateFixtures {
    /// £20 per night
    pub fn gbp_20() -> NightlyRate {
        NightlyRate::from_decimal(dec!(20), Currency::GBP).expect("positive rate")
    }

    /// £10 per night
    pub fn gbp_10() -> NightlyRate {
        NightlyRate::from_decimal(dec!(10), Currency::GBP).expect("positive rate")
    }

    /// A rate with sub-penny precision
    pub fn gbp_fractional() -> NightlyRate {
        NightlyRate::from_decimal(dec!(23.3333), Currency::GBP).expect("positive rate")
    }

    /// Zero-decimal currency
    pub fn jpy_4500() -> NightlyRate {
        NightlyRate::from_decimal(dec!(4500), Currency::JPY).expect("positive rate")
    }

    pub fn gbp(amount: i64) -> Money {
        Money::new(amount.into(), Currency::GBP)
    }
}

/// Fixture for stays
pub struct StayFixtures;

impl StayFixtures {
    /// 2024-01-15 to 2024-01-31 at £20: one month, 17 nights, £340
    pub fn single_month() -> StayPeriod {
        StayPeriod::new(date(2024, 1, 15), date(2024, 1, 31), RateFixtures::gbp_20())
            .expect("valid stay")
    }

    /// 2024-01-15 to 2024-03-10 at £10: January, February and March
    pub fn three_months() -> StayPeriod {
        StayPeriod::new(date(2024, 1, 15), date(2024, 3, 10), RateFixtures::gbp_10())
            .expect("valid stay")
    }

    /// 2024-04-01 to 2024-04-30: exactly one calendar month
    pub fn full_month() -> StayPeriod {
        StayPeriod::new(date(2024, 4, 1), date(2024, 4, 30), RateFixtures::gbp_20())
            .expect("valid stay")
    }

    /// An academic year, September to June, crossing a year boundary
    pub fn academic_year() -> StayPeriod {
        StayPeriod::new(date(2024, 9, 7), date(2025, 6, 20), RateFixtures::gbp_20())
            .expect("valid stay")
    }

    /// A single night at the end of a month
    pub fn one_night() -> StayPeriod {
        StayPeriod::new(date(2024, 1, 30), date(2024, 1, 31), RateFixtures::gbp_20())
            .expect("valid stay")
    }

    /// Check-out on the 1st of a month, so that month is not billed
    pub fn checkout_on_first() -> StayPeriod {
        StayPeriod::new(date(2024, 1, 15), date(2024, 3, 1), RateFixtures::gbp_10())
            .expect("valid stay")
    }
}
