//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! stay billing test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built stays and rates, including the reference scenarios
//! - `builders`: Builder patterns for test stays
//! - `assertions`: Schedule invariant checks with readable failure messages
//! - `generators`: Property-based test data generators
//! - `logging`: One-time log subscriber setup for test binaries

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;
pub mod logging;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
pub use logging::init_test_tracing;
