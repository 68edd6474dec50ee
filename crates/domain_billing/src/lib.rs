//! Billing Domain - Monthly Payment Schedules for Stays
//!
//! This crate turns a student-housing stay (check-in, check-out, nightly
//! price) into a payment schedule with one line item per calendar month.
//!
//! # Billing Rules
//!
//! - Each month is billed for the nights of the stay that fall in it,
//!   counting both the first and the last day of the overlap
//! - The first month is due on the check-in date
//! - Every later month is due on the 1st of the month before it
//! - Items start `Unpaid`; payment collaborators settle them later
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use core_kernel::{Currency, Money};
//! use domain_billing::generate_schedule;
//! use rust_decimal_macros::dec;
//!
//! let items = generate_schedule(
//!     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
//!     Money::new(dec!(10), Currency::GBP),
//! )?;
//!
//! assert_eq!(items.len(), 3);
//! assert_eq!(items[1].stay_month, "February 2024");
//! # Ok::<(), domain_billing::ScheduleError>(())
//! ```

pub mod stay;
pub mod line_item;
pub mod labels;
pub mod generator;
pub mod schedule;
pub mod config;
pub mod error;

pub use stay::{StayPeriod, NightlyRate, parse_stay_date};
pub use line_item::{BillingLineItem, LineItemStatus};
pub use labels::LabelFormat;
pub use generator::{PaymentScheduleGenerator, generate_schedule};
pub use schedule::PaymentSchedule;
pub use config::ScheduleConfig;
pub use error::ScheduleError;
