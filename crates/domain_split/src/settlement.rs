//! Settlement builder
//!
//! Converts computed member shares into a settlement record for the
//! payment collaborator and checks conservation of the bill total.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{MemberId, Money, SettlementId};
use domain_bill::{Bill, Group, Member};

use crate::error::SplitError;
use crate::strategy::SplitStrategy;

/// Custom splits must cover the bill total to within one paisa
pub const CUSTOM_SPLIT_TOLERANCE: Decimal = dec!(0.01);

/// One member's monetary share of a bill, rounded to 2 decimal places
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberShare {
    pub member_id: MemberId,
    pub member_name: String,
    pub amount: Money,
}

/// Result of checking a share list against the bill total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitValidation {
    /// Whether the split may proceed to payment
    pub valid: bool,
    /// Sum the shares actually cover
    pub total_allocated: Money,
    /// Absolute gap between allocated and bill total
    pub difference: Money,
}

/// Checks whether shares cover the bill total
///
/// Equal and item-based splits are valid by construction (the engine
/// always allocates the full total, modulo rounding residue and orphaned
/// items). Custom splits are valid only when the entered amounts match the
/// bill total within [`CUSTOM_SPLIT_TOLERANCE`].
pub fn validate_split(
    strategy: SplitStrategy,
    shares: &[MemberShare],
    bill: &Bill,
) -> SplitValidation {
    match strategy {
        SplitStrategy::Custom => {
            let total_allocated = shares
                .iter()
                .fold(Money::zero(bill.currency), |acc, s| acc + s.amount);
            let difference = (total_allocated - bill.total()).abs();
            SplitValidation {
                valid: difference.amount() < CUSTOM_SPLIT_TOLERANCE,
                total_allocated,
                difference,
            }
        }
        SplitStrategy::Equal | SplitStrategy::Items => SplitValidation {
            valid: true,
            total_allocated: bill.total(),
            difference: Money::zero(bill.currency),
        },
    }
}

/// The finalized, strategy-tagged set of shares for one bill
///
/// Built once per split and handed unchanged to the payment collaborator;
/// immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settlement {
    /// Unique identifier
    pub id: SettlementId,
    /// Snapshot of the bill being settled
    pub bill: Bill,
    /// Snapshot of the group the shares were computed for
    pub group: Group,
    /// Strategy the shares were derived under
    pub strategy: SplitStrategy,
    /// One share per group member, in display order
    pub shares: Vec<MemberShare>,
    /// When the settlement was created
    pub created_at: DateTime<Utc>,
}

impl Settlement {
    /// Builds a settlement from computed shares
    ///
    /// Pure construction, no recomputation - but a custom split that fails
    /// validation is refused so an incomplete split can never reach the
    /// payment collaborator.
    pub fn build(
        bill: Bill,
        group: Group,
        strategy: SplitStrategy,
        shares: Vec<MemberShare>,
    ) -> Result<Self, SplitError> {
        let validation = validate_split(strategy, &shares, &bill);
        if !validation.valid {
            return Err(SplitError::IncompleteCustomSplit {
                allocated: validation.total_allocated,
                expected: bill.total(),
            });
        }

        let settlement = Self {
            id: SettlementId::new_v7(),
            bill,
            group,
            strategy,
            shares,
            created_at: Utc::now(),
        };

        debug!(
            settlement = %settlement.id,
            strategy = %settlement.strategy,
            shares = settlement.shares.len(),
            "settlement built"
        );

        Ok(settlement)
    }

    /// Looks up the share owed by an explicit member
    pub fn share_for(&self, member: &Member) -> Option<&MemberShare> {
        self.shares.iter().find(|s| s.member_id == member.id)
    }

    /// Sums the rounded share amounts
    pub fn total_allocated(&self) -> Money {
        self.shares
            .iter()
            .fold(Money::zero(self.bill.currency), |acc, s| acc + s.amount)
    }
}
