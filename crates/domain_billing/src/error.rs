//! Billing domain errors

use chrono::NaiveDate;
use thiserror::Error;

use core_kernel::MoneyError;

use crate::line_item::LineItemStatus;

/// Errors that can occur in the billing domain
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Check-out is not after check-in
    #[error("Invalid stay range: check-out {check_out} must be after check-in {check_in}")]
    InvalidRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    /// Nightly price is not a positive, finite amount
    #[error("Invalid nightly rate: {0}")]
    InvalidRate(String),

    /// A date could not be parsed
    #[error("Invalid date: {input:?}")]
    InvalidDate {
        input: String,
    },

    /// A label format string is not a valid strftime pattern
    #[error("Invalid label format: {0:?}")]
    InvalidLabelFormat(String),

    /// No line item bills the requested month
    #[error("Line item not found: {0}")]
    LineItemNotFound(String),

    /// Status change not permitted
    #[error("Invalid status transition from {from:?} to {to:?}")]
    InvalidStatusTransition {
        from: LineItemStatus,
        to: LineItemStatus,
    },

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ScheduleError {
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ScheduleError::InvalidDate { input: input.into() }
    }

    pub fn invalid_rate(message: impl Into<String>) -> Self {
        ScheduleError::InvalidRate(message.into())
    }
}
