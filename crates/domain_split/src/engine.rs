//! Allocation engine
//!
//! Computes each member's monetary share of a bill under the selected
//! [`SplitStrategy`]. The engine is purely functional over immutable
//! snapshots of its inputs: recomputing from the same state always yields
//! the same shares.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{MemberId, Money};
use domain_bill::{Bill, Group};

use crate::allocation::AllocationState;
use crate::error::SplitError;
use crate::settlement::MemberShare;
use crate::strategy::{CustomAmounts, SplitStrategy};

/// What to do with an item nobody is selected on
///
/// The interactive flow can deselect every member from an item; the three
/// policies make the resulting behavior explicit instead of hard-coding
/// one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrphanPolicy {
    /// Exclude the item's cost from every share. The sum of shares then
    /// falls short of the bill total by the orphaned line total plus its
    /// proportional surcharge.
    #[default]
    Drop,
    /// Divide the item across the whole group, as if everyone were
    /// selected on it
    Redistribute,
    /// Refuse to compute shares while any item is orphaned
    Reject,
}

/// One split computation over an immutable snapshot of inputs
///
/// Borrows the bill, group, and allocation state for the duration of the
/// computation; nothing is mutated.
#[derive(Debug, Clone, Copy)]
pub struct SplitPlan<'a> {
    bill: &'a Bill,
    group: &'a Group,
    strategy: SplitStrategy,
    state: &'a AllocationState,
    custom: &'a CustomAmounts,
    orphan_policy: OrphanPolicy,
}

impl<'a> SplitPlan<'a> {
    /// Creates a plan with the default orphan policy (`Drop`)
    pub fn new(
        bill: &'a Bill,
        group: &'a Group,
        strategy: SplitStrategy,
        state: &'a AllocationState,
        custom: &'a CustomAmounts,
    ) -> Self {
        Self {
            bill,
            group,
            strategy,
            state,
            custom,
            orphan_policy: OrphanPolicy::default(),
        }
    }

    /// Overrides the orphan policy
    pub fn with_orphan_policy(mut self, policy: OrphanPolicy) -> Self {
        self.orphan_policy = policy;
        self
    }

    /// Returns the strategy this plan computes under
    pub fn strategy(&self) -> SplitStrategy {
        self.strategy
    }

    /// Computes one member's raw (unrounded) share
    ///
    /// Rounding happens once, when shares are materialized by
    /// [`SplitPlan::build_shares`].
    pub fn member_share(&self, member_id: &MemberId) -> Result<Money, SplitError> {
        if !self.group.contains(member_id) {
            return Err(SplitError::UnknownMember(*member_id));
        }

        match self.strategy {
            SplitStrategy::Equal => self.equal_share(),
            SplitStrategy::Items => self.item_based_share(member_id),
            SplitStrategy::Custom => Ok(self
                .custom
                .amount_for(member_id, self.bill.currency)),
        }
    }

    /// Computes every member's share, rounded half-up to 2 decimal places
    ///
    /// Shares are produced in the group's display order. Rounding residue
    /// can make the sum of rounded shares differ from the bill total by up
    /// to `member_count × 0.005`.
    pub fn build_shares(&self) -> Result<Vec<MemberShare>, SplitError> {
        if self.group.members.is_empty() {
            return Err(SplitError::EmptyGroup);
        }
        self.check_state_members()?;

        let mut shares = Vec::with_capacity(self.group.member_count());
        for member in &self.group.members {
            let raw = self.member_share(&member.id)?;
            shares.push(MemberShare {
                member_id: member.id,
                member_name: member.display_name.clone(),
                amount: raw.round_half_up(2),
            });
        }

        debug!(
            strategy = %self.strategy,
            members = shares.len(),
            total = %self.bill.total(),
            "computed member shares"
        );

        Ok(shares)
    }

    /// Every member's share is the same raw quotient of the total
    fn equal_share(&self) -> Result<Money, SplitError> {
        let count = self.group.member_count();
        if count == 0 {
            return Err(SplitError::EmptyGroup);
        }
        Ok(self.bill.total().divide(Decimal::from(count))?)
    }

    /// Item totals divided among the selected members, surcharges in
    /// proportion to the member's slice of the allocated subtotal
    fn item_based_share(&self, member_id: &MemberId) -> Result<Money, SplitError> {
        let currency = self.bill.currency;
        let group_count = Decimal::from(self.group.member_count());

        let mut member_subtotal = Money::zero(currency);
        for allocation in self.state.allocations() {
            let item = match self.bill.items().get(allocation.item_index) {
                Some(item) => item,
                None => continue,
            };
            let line_total = item.line_total();

            if allocation.member_ids.is_empty() {
                match self.orphan_policy {
                    OrphanPolicy::Drop => {}
                    OrphanPolicy::Redistribute => {
                        member_subtotal = member_subtotal + line_total.divide(group_count)?;
                    }
                    OrphanPolicy::Reject => {
                        return Err(SplitError::OrphanedItem(allocation.item_index));
                    }
                }
                continue;
            }

            if allocation.member_ids.contains(member_id) {
                let selected = Decimal::from(allocation.member_ids.len());
                member_subtotal = member_subtotal + line_total.divide(selected)?;
            }
        }

        // Guard: a zero-subtotal bill cannot carry proportional surcharges
        let bill_subtotal = self.bill.subtotal();
        let ratio = if bill_subtotal.is_zero() {
            Decimal::ZERO
        } else {
            member_subtotal.amount() / bill_subtotal.amount()
        };

        let member_tax = self.bill.tax.multiply(ratio);
        let member_service = self.bill.service_charge.multiply(ratio);

        Ok(member_subtotal + member_tax + member_service)
    }

    /// Enforces `member_ids ⊆ group` across the allocation state
    fn check_state_members(&self) -> Result<(), SplitError> {
        for allocation in self.state.allocations() {
            for member_id in &allocation.member_ids {
                if !self.group.contains(member_id) {
                    return Err(SplitError::UnknownMember(*member_id));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::Currency;
    use domain_bill::{LineItem, Member};
    use rust_decimal_macros::dec;

    fn inr(amount: Decimal) -> Money {
        Money::new(amount, Currency::INR)
    }

    fn bill_with(tax: Decimal, service: Decimal, items: &[(Decimal, u32)]) -> Bill {
        let mut bill = Bill::new(
            "Test",
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            Currency::INR,
        )
        .with_tax(inr(tax))
        .with_service_charge(inr(service));
        for (i, (price, qty)) in items.iter().enumerate() {
            bill.add_item(LineItem::new(format!("Item {}", i), inr(*price), *qty));
        }
        bill
    }

    fn group_of(n: usize) -> Group {
        let members = (0..n)
            .map(|i| {
                let member = Member::new(format!("M{}", i + 1));
                if i == 0 { member.as_self() } else { member }
            })
            .collect();
        Group::new("Test Group", members)
    }

    #[test]
    fn test_equal_share_is_raw_quotient() {
        let bill = bill_with(dec!(161), dec!(67), &[(dec!(1340), 1)]);
        let group = group_of(6);
        let state = AllocationState::for_bill(&bill, &group);
        let custom = CustomAmounts::new();
        let plan = SplitPlan::new(&bill, &group, SplitStrategy::Equal, &state, &custom);

        let raw = plan.member_share(&group.members[0].id).unwrap();
        // Unrounded quotient, identical for every member
        assert!(raw.amount() > dec!(261.333) && raw.amount() < dec!(261.334));
        for member in &group.members {
            assert_eq!(plan.member_share(&member.id).unwrap(), raw);
        }
    }

    #[test]
    fn test_unknown_member_is_rejected() {
        let bill = bill_with(dec!(0), dec!(0), &[(dec!(100), 1)]);
        let group = group_of(2);
        let state = AllocationState::for_bill(&bill, &group);
        let custom = CustomAmounts::new();
        let plan = SplitPlan::new(&bill, &group, SplitStrategy::Items, &state, &custom);

        let stranger = MemberId::new();
        assert!(matches!(
            plan.member_share(&stranger),
            Err(SplitError::UnknownMember(_))
        ));
    }

    #[test]
    fn test_zero_subtotal_yields_zero_surcharge() {
        // No items at all, but a declared service charge: the proportional
        // division must be guarded, not NaN-equivalent
        let bill = bill_with(dec!(50), dec!(0), &[]);
        let group = group_of(2);
        let state = AllocationState::for_bill(&bill, &group);
        let custom = CustomAmounts::new();
        let plan = SplitPlan::new(&bill, &group, SplitStrategy::Items, &state, &custom);

        let share = plan.member_share(&group.members[0].id).unwrap();
        assert!(share.is_zero());
    }

    #[test]
    fn test_custom_share_reads_table_verbatim() {
        let bill = bill_with(dec!(0), dec!(0), &[(dec!(100), 1)]);
        let group = group_of(2);
        let state = AllocationState::for_bill(&bill, &group);
        let mut custom = CustomAmounts::new();
        custom.set(group.members[0].id, inr(dec!(75)));

        let plan = SplitPlan::new(&bill, &group, SplitStrategy::Custom, &state, &custom);

        assert_eq!(
            plan.member_share(&group.members[0].id).unwrap().amount(),
            dec!(75)
        );
        // No entry means zero; the engine does not redistribute
        assert!(plan.member_share(&group.members[1].id).unwrap().is_zero());
    }

    #[test]
    fn test_empty_group_cannot_build_shares() {
        let bill = bill_with(dec!(0), dec!(0), &[(dec!(100), 1)]);
        let group = Group::new("Nobody", Vec::new());
        let state = AllocationState::for_bill(&bill, &group);
        let custom = CustomAmounts::new();
        let plan = SplitPlan::new(&bill, &group, SplitStrategy::Equal, &state, &custom);

        assert!(matches!(plan.build_shares(), Err(SplitError::EmptyGroup)));
    }
}
