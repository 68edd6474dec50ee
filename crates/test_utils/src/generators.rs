//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating stays that satisfy the
//! domain invariants (check-out after check-in, positive price).

use chrono::{Days, NaiveDate};
use core_kernel::{Currency, Money};
use domain_billing::{NightlyRate, StayPeriod};
use proptest::prelude::*;

use crate::fixtures::date;

/// Strategy for calendar dates between 2000 and roughly 2040
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..14_600u64).prop_map(|offset| date(2000, 1, 1) + Days::new(offset))
}

/// Strategy for stay lengths from one night to two years
pub fn stay_nights_strategy() -> impl Strategy<Value = u64> {
    1u64..=730u64
}

/// Strategy for positive nightly rates in GBP, from 1p to £1,000
pub fn nightly_rate_strategy() -> impl Strategy<Value = NightlyRate> {
    (1i64..=100_000i64).prop_map(|minor| {
        NightlyRate::new(Money::from_minor(minor, Currency::GBP)).expect("positive minor units")
    })
}

/// Strategy for valid stays
pub fn stay_strategy() -> impl Strategy<Value = StayPeriod> {
    (date_strategy(), stay_nights_strategy(), nightly_rate_strategy()).prop_map(
        |(check_in, nights, rate)| {
            StayPeriod::new(check_in, check_in + Days::new(nights), rate)
                .expect("check-out after check-in")
        },
    )
}
