//! Payment schedule generation
//!
//! Splits a stay into calendar-month billing periods. For every month the
//! stay touches, the overlap of `[check_in, check_out]` with the month is
//! billed at `nights * price_per_night`, where `nights` counts both ends of
//! the overlap. The last day of the stay is therefore billed as a night.
//!
//! Due dates follow advance billing: the first item is due at move-in, and
//! rent for any later month M is due on the 1st of month M-1.

use chrono::NaiveDate;

use core_kernel::{CalendarMonth, DateRange, Money};

use crate::config::ScheduleConfig;
use crate::error::ScheduleError;
use crate::labels::LabelFormat;
use crate::line_item::{BillingLineItem, LineItemStatus};
use crate::stay::{NightlyRate, StayPeriod};

/// Builds monthly payment schedules for stays
///
/// The generator is stateless apart from its label format: calling
/// `generate` twice with the same stay yields equal schedules.
#[derive(Debug, Clone, Default)]
pub struct PaymentScheduleGenerator {
    labels: LabelFormat,
}

impl PaymentScheduleGenerator {
    pub fn new(labels: LabelFormat) -> Self {
        Self { labels }
    }

    /// Creates a generator using the configured label format
    pub fn from_config(config: &ScheduleConfig) -> Result<Self, ScheduleError> {
        Ok(Self::new(config.label_format()?))
    }

    pub fn labels(&self) -> &LabelFormat {
        &self.labels
    }

    /// Generates one line item per calendar month touched by the stay
    ///
    /// Items are in chronological order and all start `Unpaid`.
    ///
    /// # Errors
    ///
    /// Returns `Money(Overflow)` if a month's charge exceeds the decimal range.
    pub fn generate(&self, stay: &StayPeriod) -> Result<Vec<BillingLineItem>, ScheduleError> {
        let stay_range = stay.as_range();

        let items = stay
            .months()
            .enumerate()
            .filter_map(|(index, month)| {
                let overlap = stay_range.intersect(&month.as_range())?;
                let nights = u32::try_from(overlap.days() + 1).ok()?;
                Some(self.line_item(stay, index, month, &overlap, nights))
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            check_in = %stay.check_in(),
            check_out = %stay.check_out(),
            months = items.len(),
            "Generated payment schedule"
        );

        Ok(items)
    }

    fn line_item(
        &self,
        stay: &StayPeriod,
        index: usize,
        month: CalendarMonth,
        overlap: &DateRange,
        nights: u32,
    ) -> Result<BillingLineItem, ScheduleError> {
        Ok(BillingLineItem {
            stay_month: self.labels.month_label(month),
            stay_dates: self.labels.range_label(overlap),
            month,
            nights,
            amount: stay.price_per_night().for_nights(nights)?,
            due_date: due_date(index, month, stay.check_in()),
            status: LineItemStatus::Unpaid,
            payment_id: None,
            paid_at: None,
        })
    }
}

/// Due date for the item at `index` billing `month`
fn due_date(index: usize, month: CalendarMonth, check_in: NaiveDate) -> NaiveDate {
    if index == 0 {
        return check_in;
    }
    // Every month after the first has a predecessor within the stay.
    month
        .previous()
        .map(|prior| prior.first_day())
        .unwrap_or(check_in)
}

/// Generates a payment schedule with default labels
///
/// # Arguments
///
/// * `check_in` - First day of the stay
/// * `check_out` - Last day of the stay, must be after `check_in`
/// * `price_per_night` - Nightly rate, must be positive
///
/// # Errors
///
/// Returns `InvalidRange` if `check_out <= check_in`, `InvalidRate` if the
/// price is not positive, and `Money(Overflow)` if a monthly charge does not
/// fit in a decimal.
pub fn generate_schedule(
    check_in: NaiveDate,
    check_out: NaiveDate,
    price_per_night: Money,
) -> Result<Vec<BillingLineItem>, ScheduleError> {
    let rate = NightlyRate::new(price_per_night)?;
    let stay = StayPeriod::new(check_in, check_out, rate)?;
    PaymentScheduleGenerator::default().generate(&stay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{Currency, MoneyError};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_month_stay() {
        let items = generate_schedule(
            date(2024, 1, 15),
            date(2024, 1, 31),
            Money::new(dec!(20), Currency::GBP),
        )
        .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].nights, 17);
        assert_eq!(items[0].amount.amount(), dec!(340));
        assert_eq!(items[0].due_date, date(2024, 1, 15));
        assert_eq!(items[0].stay_month, "January 2024");
        assert_eq!(items[0].stay_dates, "15 Jan - 31 Jan");
    }

    #[test]
    fn test_three_month_stay() {
        let items = generate_schedule(
            date(2024, 1, 15),
            date(2024, 3, 10),
            Money::new(dec!(10), Currency::GBP),
        )
        .unwrap();

        let nights: Vec<u32> = items.iter().map(|i| i.nights).collect();
        let due: Vec<NaiveDate> = items.iter().map(|i| i.due_date).collect();

        assert_eq!(nights, vec![17, 29, 10]);
        assert_eq!(due, vec![date(2024, 1, 15), date(2024, 1, 1), date(2024, 2, 1)]);
    }

    #[test]
    fn test_due_date_rule() {
        let march = CalendarMonth::new(2024, 3).unwrap();
        assert_eq!(due_date(0, march, date(2024, 3, 5)), date(2024, 3, 5));
        assert_eq!(due_date(2, march, date(2024, 1, 15)), date(2024, 2, 1));

        let january = CalendarMonth::new(2025, 1).unwrap();
        assert_eq!(due_date(1, january, date(2024, 12, 20)), date(2024, 12, 1));
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        let price = Money::new(dec!(10), Currency::GBP);
        assert!(matches!(
            generate_schedule(date(2024, 1, 15), date(2024, 1, 15), price),
            Err(ScheduleError::InvalidRange { .. })
        ));
        assert!(matches!(
            generate_schedule(date(2024, 1, 15), date(2024, 2, 15), Money::zero(Currency::GBP)),
            Err(ScheduleError::InvalidRate(_))
        ));
    }

    #[test]
    fn test_large_rate_returns_overflow() {
        let result = generate_schedule(
            date(2024, 1, 15),
            date(2024, 1, 31),
            Money::from_f64(1e28, Currency::GBP).unwrap(),
        );
        assert!(matches!(
            result,
            Err(ScheduleError::Money(MoneyError::Overflow))
        ));
    }

    #[test]
    fn test_sub_cent_rate_bills_exactly() {
        let items = generate_schedule(
            date(2024, 1, 1),
            date(2024, 1, 10),
            Money::new(dec!(10.12345), Currency::GBP),
        )
        .unwrap();

        assert_eq!(items[0].nights, 10);
        assert_eq!(items[0].amount.amount(), dec!(101.2345));
    }
}
