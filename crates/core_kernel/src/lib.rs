//! Core Kernel - Foundational types and utilities for the bill-split system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic and half-up rounding
//! - Strongly-typed identifiers for members, groups, bills, and settlements

pub mod error;
pub mod identifiers;
pub mod money;

pub use error::CoreError;
pub use identifiers::{BillId, GroupId, MemberId, PaymentId, SettlementId};
pub use money::{Currency, Money, MoneyError};
