//! Stay input types
//!
//! A `StayPeriod` is the validated input to schedule generation. It can only
//! be constructed with check-out strictly after check-in and a positive
//! nightly rate. The rate keeps the precision it was quoted with.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{CalendarMonth, Currency, DateRange, Money, Timezone};

use crate::error::ScheduleError;

/// Date format accepted for plain calendar dates
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A positive per-night price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Money", into = "Money")]
pub struct NightlyRate(Money);

impl NightlyRate {
    /// Creates a rate, rejecting zero and negative prices
    pub fn new(price: Money) -> Result<Self, ScheduleError> {
        if !price.is_positive() {
            return Err(ScheduleError::invalid_rate(format!(
                "{} must be greater than zero",
                price
            )));
        }
        Ok(Self(price))
    }

    pub fn from_decimal(amount: Decimal, currency: Currency) -> Result<Self, ScheduleError> {
        Self::new(Money::new(amount, currency))
    }

    /// Creates a rate from a floating point price, rejecting NaN and infinities
    pub fn from_f64(amount: f64, currency: Currency) -> Result<Self, ScheduleError> {
        let price = Money::from_f64(amount, currency)
            .map_err(|e| ScheduleError::invalid_rate(e.to_string()))?;
        Self::new(price)
    }

    pub fn price(&self) -> Money {
        self.0
    }

    pub fn currency(&self) -> Currency {
        self.0.currency()
    }

    /// Returns the charge for the given number of nights
    ///
    /// # Errors
    ///
    /// Returns `Money(Overflow)` if the charge exceeds the decimal range.
    pub fn for_nights(&self, nights: u32) -> Result<Money, ScheduleError> {
        Ok(self.0.times(nights)?)
    }
}

impl TryFrom<Money> for NightlyRate {
    type Error = ScheduleError;

    fn try_from(price: Money) -> Result<Self, Self::Error> {
        Self::new(price)
    }
}

impl From<NightlyRate> for Money {
    fn from(rate: NightlyRate) -> Money {
        rate.0
    }
}

/// A booked stay: check-in date, check-out date and nightly price
///
/// # Invariants
///
/// - `check_in < check_out`
/// - the nightly rate is strictly positive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StayRecord")]
pub struct StayPeriod {
    check_in: NaiveDate,
    check_out: NaiveDate,
    price_per_night: NightlyRate,
}

impl StayPeriod {
    /// Creates a validated stay
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if check-out is on or before check-in
    pub fn new(
        check_in: NaiveDate,
        check_out: NaiveDate,
        price_per_night: NightlyRate,
    ) -> Result<Self, ScheduleError> {
        if check_out <= check_in {
            return Err(ScheduleError::InvalidRange { check_in, check_out });
        }
        Ok(Self {
            check_in,
            check_out,
            price_per_night,
        })
    }

    /// Creates a stay from textual dates
    ///
    /// Each date may be a plain ISO date (`2024-01-15`) or an RFC 3339
    /// timestamp (`2024-01-15T10:00:00Z`). Timestamps are converted to a
    /// calendar date in `tz`.
    pub fn parse(
        check_in: &str,
        check_out: &str,
        price_per_night: NightlyRate,
        tz: &Timezone,
    ) -> Result<Self, ScheduleError> {
        let check_in = parse_stay_date(check_in, tz)?;
        let check_out = parse_stay_date(check_out, tz)?;
        Self::new(check_in, check_out, price_per_night)
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn price_per_night(&self) -> NightlyRate {
        self.price_per_night
    }

    /// Returns the stay as an inclusive range from check-in to check-out
    pub fn as_range(&self) -> DateRange {
        DateRange {
            start: self.check_in,
            end: self.check_out,
        }
    }

    /// Returns the calendar months touched by the stay, in order
    ///
    /// Iteration starts at the month containing check-in and stops at the
    /// first month whose first day is on or after check-out.
    pub fn months(&self) -> impl Iterator<Item = CalendarMonth> {
        let check_out = self.check_out;
        std::iter::successors(Some(CalendarMonth::containing(self.check_in)), |m| m.next())
            .take_while(move |m| m.first_day() < check_out)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StayRecord {
    check_in: NaiveDate,
    check_out: NaiveDate,
    price_per_night: NightlyRate,
}

impl TryFrom<StayRecord> for StayPeriod {
    type Error = ScheduleError;

    fn try_from(record: StayRecord) -> Result<Self, Self::Error> {
        Self::new(record.check_in, record.check_out, record.price_per_night)
    }
}

/// Parses a stay date from an ISO date or an RFC 3339 timestamp
pub fn parse_stay_date(input: &str, tz: &Timezone) -> Result<NaiveDate, ScheduleError> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT) {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|instant| tz.local_date(instant.with_timezone(&Utc)))
        .map_err(|_| ScheduleError::invalid_date(input))
}
