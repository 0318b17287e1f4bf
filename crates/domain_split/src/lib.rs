//! Split Domain
//!
//! The allocation engine and settlement flow for shared bills.
//!
//! # Flow
//!
//! 1. Seed an [`AllocationState`] for a validated bill and group
//! 2. Apply [`ToggleEvent`]s as members are selected on or off items
//! 3. Build a [`SplitPlan`] for the chosen [`SplitStrategy`] and project
//!    the state into rounded [`MemberShare`]s
//! 4. Validate and package the shares into a [`Settlement`]
//! 5. Hand the settlement to a [`PaymentCollector`] implementation
//!
//! # Determinism
//!
//! Share computation is a pure projection over immutable snapshots:
//! member sets are ordered, nothing is mutated, and recomputing from the
//! same state yields bit-identical shares.
//!
//! # Rounding
//!
//! Raw shares keep full decimal precision; each share is rounded half-up
//! to 2 decimal places exactly once, when it is materialized into a
//! [`MemberShare`]. The sum of rounded shares can differ from the bill
//! total by at most `member_count × 0.005`.

pub mod allocation;
pub mod engine;
pub mod error;
pub mod payment;
pub mod settlement;
pub mod strategy;

pub use allocation::{AllocationState, ItemAllocation, ToggleEvent};
pub use engine::{OrphanPolicy, SplitPlan};
pub use error::SplitError;
pub use payment::{upi_payment_link, PaymentChannel, PaymentCollector, PaymentReceipt, PaymentStatus};
pub use settlement::{validate_split, MemberShare, Settlement, SplitValidation, CUSTOM_SPLIT_TOLERANCE};
pub use strategy::{CustomAmounts, SplitStrategy};
