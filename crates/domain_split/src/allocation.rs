//! Item allocation state and its toggle reducer
//!
//! The interactive flow flips one member on one item at a time. State
//! transitions are modeled as a pure reducer `(state, event) -> state'`
//! and share computation as a separate pure projection over the state, so
//! the engine is testable without any UI harness and recomputation from
//! the same state is always bit-identical.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use core_kernel::MemberId;
use domain_bill::{Bill, Group};

/// Which members share the item at `item_index`
///
/// One of these exists per line item, even when nobody is selected. Member
/// ids are kept ordered so iteration order never depends on insertion
/// history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAllocation {
    /// Position of the item on the bill
    pub item_index: usize,
    /// Members marked as consuming this item (may be empty)
    pub member_ids: BTreeSet<MemberId>,
}

/// A single member being toggled on or off one item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleEvent {
    pub item_index: usize,
    pub member_id: MemberId,
}

/// Allocation state for one bill: one entry per line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationState {
    allocations: Vec<ItemAllocation>,
}

impl AllocationState {
    /// Seeds the state for a bill with every member selected on every item
    pub fn for_bill(bill: &Bill, group: &Group) -> Self {
        let everyone: BTreeSet<MemberId> = group.member_ids().collect();
        let allocations = (0..bill.items().len())
            .map(|item_index| ItemAllocation {
                item_index,
                member_ids: everyone.clone(),
            })
            .collect();
        Self { allocations }
    }

    /// Applies a toggle event, returning the next state
    ///
    /// Flips the member's selection on the addressed item. An event whose
    /// `item_index` does not exist on the bill leaves the state unchanged.
    pub fn apply(mut self, event: ToggleEvent) -> Self {
        if let Some(allocation) = self
            .allocations
            .iter_mut()
            .find(|a| a.item_index == event.item_index)
        {
            if !allocation.member_ids.remove(&event.member_id) {
                allocation.member_ids.insert(event.member_id);
            }
        }
        self
    }

    /// Returns the members selected on the given item
    pub fn members_for(&self, item_index: usize) -> Option<&BTreeSet<MemberId>> {
        self.allocations
            .iter()
            .find(|a| a.item_index == item_index)
            .map(|a| &a.member_ids)
    }

    /// Returns all item allocations in item order
    pub fn allocations(&self) -> &[ItemAllocation] {
        &self.allocations
    }
}
