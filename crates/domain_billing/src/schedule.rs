//! Payment schedule aggregate
//!
//! The schedule a booking collaborator persists: the stay, its generated
//! line items, and their payment state. "Today" is always passed in so the
//! aggregate never reads a clock.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{BookingId, CalendarMonth, Money, PaymentId};

use crate::error::ScheduleError;
use crate::generator::PaymentScheduleGenerator;
use crate::line_item::{BillingLineItem, LineItemStatus};
use crate::stay::StayPeriod;

/// Payment schedule for one booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSchedule {
    pub booking_id: BookingId,
    pub stay: StayPeriod,
    pub items: Vec<BillingLineItem>,
}

impl PaymentSchedule {
    /// Generates the schedule for a booking's stay
    pub fn generate(
        booking_id: BookingId,
        stay: StayPeriod,
        generator: &PaymentScheduleGenerator,
    ) -> Result<Self, ScheduleError> {
        let items = generator.generate(&stay)?;
        Ok(Self {
            booking_id,
            stay,
            items,
        })
    }

    /// Total charged across all months
    pub fn total_amount(&self) -> Result<Money, ScheduleError> {
        let currency = self.stay.price_per_night().currency();
        Ok(Money::try_sum(currency, self.items.iter().map(|i| &i.amount))?)
    }

    pub fn total_nights(&self) -> u32 {
        self.items.iter().map(|i| i.nights).sum()
    }

    /// Sum of all items not yet paid
    pub fn outstanding_amount(&self) -> Result<Money, ScheduleError> {
        let currency = self.stay.price_per_night().currency();
        let outstanding = self
            .items
            .iter()
            .filter(|i| i.status.is_outstanding())
            .map(|i| &i.amount);
        Ok(Money::try_sum(currency, outstanding)?)
    }

    /// Returns the line item billing `month`
    pub fn item_for(&self, month: CalendarMonth) -> Option<&BillingLineItem> {
        self.items.iter().find(|i| i.month == month)
    }

    /// Marks the item billing `month` as paid
    ///
    /// # Errors
    ///
    /// Returns `LineItemNotFound` if the stay does not touch `month`, or
    /// `InvalidStatusTransition` if the item is already paid.
    pub fn mark_paid(
        &mut self,
        month: CalendarMonth,
        payment_id: PaymentId,
        paid_at: DateTime<Utc>,
    ) -> Result<&BillingLineItem, ScheduleError> {
        let booking_id = self.booking_id;
        let item = self
            .items
            .iter_mut()
            .find(|i| i.month == month)
            .ok_or_else(|| ScheduleError::LineItemNotFound(format!("{} for booking {}", month, booking_id)))?;

        item.mark_paid(payment_id, paid_at)?;

        tracing::info!(
            booking_id = %booking_id,
            month = %month,
            payment_id = %payment_id,
            amount = %item.amount,
            "Line item paid"
        );
        Ok(item)
    }

    /// Flags every unpaid item due before `today` as overdue
    ///
    /// Returns the number of items that changed.
    pub fn refresh_overdue(&mut self, today: NaiveDate) -> Result<usize, ScheduleError> {
        let mut changed = 0;
        for item in self.items.iter_mut().filter(|i| i.is_past_due(today)) {
            item.transition(LineItemStatus::Overdue)?;
            changed += 1;
        }

        if changed > 0 {
            tracing::debug!(
                booking_id = %self.booking_id,
                %today,
                changed,
                "Flagged overdue line items"
            );
        }
        Ok(changed)
    }

    /// Returns the outstanding item with the earliest due date
    pub fn next_due(&self) -> Option<&BillingLineItem> {
        self.items
            .iter()
            .filter(|i| i.status.is_outstanding())
            .min_by_key(|i| (i.due_date, i.month))
    }

    /// Returns true once every item is paid
    pub fn is_settled(&self) -> bool {
        self.items.iter().all(|i| i.status == LineItemStatus::Paid)
    }
}
