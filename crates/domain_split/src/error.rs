//! Split domain errors

use thiserror::Error;

use core_kernel::{MemberId, Money, MoneyError};

/// Errors that can occur while computing or settling a split
#[derive(Debug, Error)]
pub enum SplitError {
    /// Custom amounts do not add up to the bill total within tolerance.
    /// Proceeding to payment must be blocked.
    #[error("Custom amounts total {allocated} does not match bill total {expected}")]
    IncompleteCustomSplit { allocated: Money, expected: Money },

    /// An item has no members selected (raised only under
    /// `OrphanPolicy::Reject`)
    #[error("Item at index {0} has no members selected")]
    OrphanedItem(usize),

    /// The allocation state references a member outside the group
    #[error("Member {0} is not part of the group")]
    UnknownMember(MemberId),

    #[error("Cannot split a bill across an empty group")]
    EmptyGroup,

    #[error("Payment failed: {0}")]
    PaymentFailed(String),

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}
