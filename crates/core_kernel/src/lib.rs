//! Core Kernel - Foundational types for the stay billing system
//!
//! This crate provides the building blocks used by the billing domain:
//! - Money types with precise decimal arithmetic
//! - Calendar types (months, inclusive date ranges, timezones)
//! - Strongly-typed identifiers

pub mod money;
pub mod temporal;
pub mod identifiers;

pub use money::{Money, Currency, MoneyError};
pub use temporal::{CalendarMonth, DateRange, Timezone, TemporalError};
pub use identifiers::{BookingId, PaymentId};
