//! Billing line items
//!
//! One line item bills the part of a stay that falls in a single calendar
//! month. Items are created `Unpaid` by the generator; payment collaborators
//! move them along afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{CalendarMonth, Money, PaymentId};

use crate::error::ScheduleError;

/// Payment status of a line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineItemStatus {
    /// Not yet paid (initial state)
    Unpaid,
    /// Paid in full
    Paid,
    /// Past its due date without payment
    Overdue,
}

impl LineItemStatus {
    /// Returns true if moving to `next` is a permitted transition
    pub fn can_transition_to(&self, next: LineItemStatus) -> bool {
        matches!(
            (self, next),
            (LineItemStatus::Unpaid, LineItemStatus::Paid)
                | (LineItemStatus::Unpaid, LineItemStatus::Overdue)
                | (LineItemStatus::Overdue, LineItemStatus::Paid)
        )
    }

    /// Returns true while money is still owed
    pub fn is_outstanding(&self) -> bool {
        !matches!(self, LineItemStatus::Paid)
    }
}

impl Default for LineItemStatus {
    fn default() -> Self {
        LineItemStatus::Unpaid
    }
}

/// One month of a stay's payment schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingLineItem {
    /// Month/year label, e.g. "January 2024"
    pub stay_month: String,
    /// Day range label within the month, e.g. "15 Jan - 31 Jan"
    pub stay_dates: String,
    /// Billed calendar month
    pub month: CalendarMonth,
    /// Nights billed in this month (at least one)
    pub nights: u32,
    /// `nights * price_per_night`
    pub amount: Money,
    /// Date the item must be paid by
    pub due_date: NaiveDate,
    pub status: LineItemStatus,
    /// Reference of the settling payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<PaymentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
}

impl BillingLineItem {
    /// Moves the item to `next`, enforcing the status lifecycle
    pub fn transition(&mut self, next: LineItemStatus) -> Result<(), ScheduleError> {
        if !self.status.can_transition_to(next) {
            return Err(ScheduleError::InvalidStatusTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    /// Records the payment that settles this item
    pub fn mark_paid(&mut self, payment_id: PaymentId, paid_at: DateTime<Utc>) -> Result<(), ScheduleError> {
        self.transition(LineItemStatus::Paid)?;
        self.payment_id = Some(payment_id);
        self.paid_at = Some(paid_at);
        Ok(())
    }

    /// Returns true if the item is unpaid and its due date is before `today`
    pub fn is_past_due(&self, today: NaiveDate) -> bool {
        self.status == LineItemStatus::Unpaid && self.due_date < today
    }
}
