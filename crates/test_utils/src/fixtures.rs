//! Pre-built Test Fixtures
//!
//! Ready-to-use bills and groups matching the scenarios the split flow is
//! specified against. Fixtures are deterministic apart from freshly
//! generated identifiers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};
use domain_bill::{Bill, Group, LineItem, Member};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A standard INR amount
    pub fn inr(amount: Decimal) -> Money {
        Money::new(amount, Currency::INR)
    }

    /// Zero rupees
    pub fn inr_zero() -> Money {
        Money::zero(Currency::INR)
    }
}

/// Fixture for bills
pub struct BillFixtures;

impl BillFixtures {
    /// The reference restaurant bill: subtotal 1340, tax 161, service
    /// charge 67, total 1568
    ///
    /// Items: pizza 450×1, wings 320×1, garlic bread 180×2, cola 60×3,
    /// dip 30×1.
    pub fn pizza_palace() -> Bill {
        let mut bill = Bill::new(
            "Pizza Palace",
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            Currency::INR,
        )
        .with_tax(MoneyFixtures::inr(dec!(161)))
        .with_service_charge(MoneyFixtures::inr(dec!(67)))
        .with_payment_method("Card");

        bill.add_item(LineItem::new(
            "Margherita Pizza (Large)",
            MoneyFixtures::inr(dec!(450)),
            1,
        ));
        bill.add_item(LineItem::new(
            "Chicken Wings (6 pcs)",
            MoneyFixtures::inr(dec!(320)),
            1,
        ));
        bill.add_item(LineItem::new(
            "Garlic Bread",
            MoneyFixtures::inr(dec!(180)),
            2,
        ));
        bill.add_item(LineItem::new(
            "Coca Cola (500ml)",
            MoneyFixtures::inr(dec!(60)),
            3,
        ));
        bill.add_item(LineItem::new(
            "Masala Dip",
            MoneyFixtures::inr(dec!(30)),
            1,
        ));

        bill
    }

    /// A bill with no tax or service charge
    pub fn plain_bill(item_prices: &[Decimal]) -> Bill {
        let mut bill = Bill::new(
            "Chai Point",
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            Currency::INR,
        );
        for (i, price) in item_prices.iter().enumerate() {
            bill.add_item(LineItem::new(
                format!("Item {}", i + 1),
                MoneyFixtures::inr(*price),
                1,
            ));
        }
        bill
    }
}

/// Fixture for groups
pub struct GroupFixtures;

impl GroupFixtures {
    /// Six-member group for the equal-split residual scenario
    pub fn college_gang() -> Group {
        Group::new(
            "College Gang",
            vec![
                Member::new("Rahul").as_self(),
                Member::new("Priya Sharma"),
                Member::new("Arjun Patel"),
                Member::new("Sneha Gupta"),
                Member::new("Vikram Singh"),
                Member::new("Anita Roy"),
            ],
        )
    }

    /// Four-member group
    pub fn roommates() -> Group {
        Group::new(
            "Roommates 203",
            vec![
                Member::new("Rahul").as_self(),
                Member::new("Amit Kumar"),
                Member::new("Ravi Mehta"),
                Member::new("Suresh Yadav"),
            ],
        )
    }

    /// Two-member group for pairwise scenarios
    pub fn pair() -> Group {
        Group::new(
            "Pair",
            vec![Member::new("M1").as_self(), Member::new("M2")],
        )
    }
}
