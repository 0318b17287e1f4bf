//! Property-Based Test Generators
//!
//! Proptest strategies for generating bills, groups, and toggle sequences
//! that maintain domain invariants (positive prices, quantities ≥ 1,
//! totals derived from items).

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{Currency, Money};
use domain_bill::{Bill, Group, LineItem, Member};

/// Strategy for unit prices: 0.01 to 2000.00 in paise
pub fn price_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..200_000i64).prop_map(|minor| Decimal::new(minor, 2))
}

/// Strategy for item quantities: 1 to 5
pub fn quantity_strategy() -> impl Strategy<Value = u32> {
    1u32..=5u32
}

/// Strategy for surcharge amounts: 0.00 to 500.00 in paise
pub fn surcharge_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..50_000i64).prop_map(|minor| Decimal::new(minor, 2))
}

/// Strategy for bills with 1 to `max_items` items and derived totals
pub fn bill_strategy(max_items: usize) -> impl Strategy<Value = Bill> {
    (
        proptest::collection::vec((price_strategy(), quantity_strategy()), 1..=max_items),
        surcharge_strategy(),
        surcharge_strategy(),
    )
        .prop_map(|(items, tax, service_charge)| {
            let mut bill = Bill::new(
                "Generated Merchant",
                chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                Currency::INR,
            )
            .with_tax(Money::new(tax, Currency::INR))
            .with_service_charge(Money::new(service_charge, Currency::INR));
            for (i, (price, quantity)) in items.into_iter().enumerate() {
                bill.add_item(LineItem::new(
                    format!("Item {}", i + 1),
                    Money::new(price, Currency::INR),
                    quantity,
                ));
            }
            bill
        })
}

/// Strategy for groups with 1 to `max_members` members
pub fn group_strategy(max_members: usize) -> impl Strategy<Value = Group> {
    (1..=max_members).prop_map(|count| {
        let members = (0..count)
            .map(|i| {
                let member = Member::new(format!("Member {}", i + 1));
                if i == 0 {
                    member.as_self()
                } else {
                    member
                }
            })
            .collect();
        Group::new("Generated Group", members)
    })
}

/// Strategy for a bill together with a group to split it across
pub fn split_inputs_strategy(
    max_items: usize,
    max_members: usize,
) -> impl Strategy<Value = (Bill, Group)> {
    (bill_strategy(max_items), group_strategy(max_members))
}
