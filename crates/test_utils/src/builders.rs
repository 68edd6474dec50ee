//! Test Data Builders
//!
//! Builder for stays with sensible defaults, so tests only spell out the
//! fields they care about.

use chrono::{Days, NaiveDate};
use core_kernel::{BookingId, Currency};
use domain_billing::{
    NightlyRate, PaymentSchedule, PaymentScheduleGenerator, ScheduleError, StayPeriod,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::date;

/// Builder for constructing test stays
pub struct StayBuilder {
    check_in: NaiveDate,
    check_out: NaiveDate,
    price: Decimal,
    currency: Currency,
}

impl Default for StayBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StayBuilder {
    /// Creates a builder for a two-week stay in January 2024 at £20
    pub fn new() -> Self {
        Self {
            check_in: date(2024, 1, 1),
            check_out: date(2024, 1, 15),
            price: dec!(20),
            currency: Currency::GBP,
        }
    }

    pub fn check_in(mut self, date: NaiveDate) -> Self {
        self.check_in = date;
        self
    }

    pub fn check_out(mut self, date: NaiveDate) -> Self {
        self.check_out = date;
        self
    }

    /// Sets check-out to `nights` days after check-in
    pub fn nights(mut self, nights: u64) -> Self {
        self.check_out = self.check_in + Days::new(nights);
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Builds the stay, surfacing validation errors
    pub fn try_build(self) -> Result<StayPeriod, ScheduleError> {
        let rate = NightlyRate::from_decimal(self.price, self.currency)?;
        StayPeriod::new(self.check_in, self.check_out, rate)
    }

    /// Builds the stay, panicking if it is invalid
    pub fn build(self) -> StayPeriod {
        self.try_build().expect("StayBuilder produced an invalid stay")
    }

    /// Builds the stay and generates its schedule with default labels
    pub fn build_schedule(self) -> PaymentSchedule {
        PaymentSchedule::generate(BookingId::new(), self.build(), &PaymentScheduleGenerator::default())
            .expect("builder should produce a billable stay")
    }
}
