//! Test Data Builders
//!
//! Builder patterns for constructing test bills and groups with sensible
//! defaults, so tests specify only the fields they care about.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use core_kernel::{Currency, Money};
use domain_bill::{Bill, Group, LineItem, Member};

/// Builder for test bills
pub struct TestBillBuilder {
    merchant_name: String,
    date: NaiveDate,
    currency: Currency,
    tax: Decimal,
    service_charge: Decimal,
    items: Vec<(String, Decimal, u32)>,
}

impl Default for TestBillBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBillBuilder {
    /// Creates a builder with an empty INR bill
    pub fn new() -> Self {
        Self {
            merchant_name: "Test Merchant".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            currency: Currency::INR,
            tax: Decimal::ZERO,
            service_charge: Decimal::ZERO,
            items: Vec::new(),
        }
    }

    /// Sets the merchant name
    pub fn with_merchant(mut self, name: impl Into<String>) -> Self {
        self.merchant_name = name.into();
        self
    }

    /// Sets the bill date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the tax amount
    pub fn with_tax(mut self, tax: Decimal) -> Self {
        self.tax = tax;
        self
    }

    /// Sets the service charge
    pub fn with_service_charge(mut self, service_charge: Decimal) -> Self {
        self.service_charge = service_charge;
        self
    }

    /// Adds a line item
    pub fn with_item(mut self, name: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        self.items.push((name.into(), price, quantity));
        self
    }

    /// Builds the bill, recomputing totals from the items
    pub fn build(self) -> Bill {
        let mut bill = Bill::new(self.merchant_name, self.date, self.currency)
            .with_tax(Money::new(self.tax, self.currency))
            .with_service_charge(Money::new(self.service_charge, self.currency));
        for (name, price, quantity) in self.items {
            bill.add_item(LineItem::new(
                name,
                Money::new(price, self.currency),
                quantity,
            ));
        }
        bill
    }
}

/// Builder for test groups
pub struct TestGroupBuilder {
    name: String,
    members: Vec<Member>,
}

impl Default for TestGroupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGroupBuilder {
    /// Creates a builder with an empty group
    pub fn new() -> Self {
        Self {
            name: "Test Group".to_string(),
            members: Vec::new(),
        }
    }

    /// Sets the group name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a member
    pub fn with_member(mut self, display_name: impl Into<String>) -> Self {
        self.members.push(Member::new(display_name));
        self
    }

    /// Adds the acting user
    pub fn with_self_member(mut self, display_name: impl Into<String>) -> Self {
        self.members.push(Member::new(display_name).as_self());
        self
    }

    /// Adds `count` generically named members
    pub fn with_members(mut self, count: usize) -> Self {
        for i in 0..count {
            self.members.push(Member::new(format!("Member {}", i + 1)));
        }
        self
    }

    /// Builds the group
    pub fn build(self) -> Group {
        Group::new(self.name, self.members)
    }
}
