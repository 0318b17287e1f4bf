//! Test Utilities Crate
//!
//! Shared test infrastructure for the bill-split test suites.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built bills and groups for common scenarios
//! - `builders`: Builder patterns for test data construction
//! - `generators`: Property-based test data generators
//! - `assertions`: Custom assertion helpers for domain types

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
