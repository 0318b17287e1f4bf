//! Split strategies and custom amount entry

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use core_kernel::{Currency, MemberId, Money};

/// The algorithm used to derive member shares from a bill
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitStrategy {
    /// Every member pays the same raw quotient of the total
    Equal,
    /// Each item is divided among the members who consumed it; surcharges
    /// follow in proportion to each member's allocated subtotal
    #[default]
    Items,
    /// Amounts entered by hand, one per member
    Custom,
}

impl fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SplitStrategy::Equal => "Equal Split",
            SplitStrategy::Items => "By Items",
            SplitStrategy::Custom => "Custom",
        };
        write!(f, "{}", label)
    }
}

/// Manually entered amounts for the custom strategy
///
/// Members without an entry are treated as owing zero. The engine reads
/// these verbatim; whether they cover the bill total is checked by the
/// settlement builder, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomAmounts {
    amounts: BTreeMap<MemberId, Money>,
}

impl CustomAmounts {
    /// Creates an empty amount table
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets (or replaces) a member's amount
    pub fn set(&mut self, member_id: MemberId, amount: Money) {
        self.amounts.insert(member_id, amount);
    }

    /// Returns the member's amount, defaulting to zero
    pub fn amount_for(&self, member_id: &MemberId, currency: Currency) -> Money {
        self.amounts
            .get(member_id)
            .copied()
            .unwrap_or_else(|| Money::zero(currency))
    }

    /// Sums all entered amounts
    pub fn total(&self, currency: Currency) -> Money {
        self.amounts
            .values()
            .fold(Money::zero(currency), |acc, amount| acc + *amount)
    }

    /// Returns true when no amounts have been entered
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}
