//! Bill model
//!
//! A bill is the parsed output of a merchant receipt: line items plus tax
//! and service charge. Items stay editable until a split computation
//! begins; every edit recomputes the stored subtotal and total so
//! `total == subtotal + tax + service_charge` always holds.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{BillId, Currency, Money};

use crate::error::BillError;

/// One priced, quantified entry on a bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item description as it appeared on the receipt
    pub name: String,
    /// Price per unit
    pub unit_price: Money,
    /// Number of units (at least 1 on a validated bill)
    pub quantity: u32,
}

impl LineItem {
    /// Creates a new line item
    pub fn new(name: impl Into<String>, unit_price: Money, quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Returns `unit_price × quantity`
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(Decimal::from(self.quantity))
    }
}

/// A merchant transaction ready to be split
///
/// Items are kept behind accessors so that every mutation goes through
/// [`Bill::recalculate_totals`]; the allocation engine reads the bill but
/// never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    /// Unique identifier
    pub id: BillId,
    /// Merchant name from the receipt
    pub merchant_name: String,
    /// Transaction date
    pub date: NaiveDate,
    /// Currency all amounts on this bill share
    pub currency: Currency,
    /// Line items
    items: Vec<LineItem>,
    /// Sum of line totals, recomputed on every item change
    subtotal: Money,
    /// Tax amount (zero when the receipt showed none)
    pub tax: Money,
    /// Service charge (zero when the receipt showed none)
    pub service_charge: Money,
    /// Authoritative amount to be fully allocated
    total: Money,
    /// How the bill was paid at the merchant (display only, not interpreted)
    pub payment_method: String,
}

impl Bill {
    /// Creates an empty bill with zero tax and service charge
    pub fn new(
        merchant_name: impl Into<String>,
        date: NaiveDate,
        currency: Currency,
    ) -> Self {
        Self {
            id: BillId::new_v7(),
            merchant_name: merchant_name.into(),
            date,
            currency,
            items: Vec::new(),
            subtotal: Money::zero(currency),
            tax: Money::zero(currency),
            service_charge: Money::zero(currency),
            total: Money::zero(currency),
            payment_method: String::new(),
        }
    }

    /// Sets the tax amount
    pub fn with_tax(mut self, tax: Money) -> Self {
        self.tax = tax;
        self.recalculate_totals();
        self
    }

    /// Sets the service charge
    pub fn with_service_charge(mut self, service_charge: Money) -> Self {
        self.service_charge = service_charge;
        self.recalculate_totals();
        self
    }

    /// Sets the payment method label
    pub fn with_payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = method.into();
        self
    }

    /// Returns the line items
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the stored subtotal
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Returns the authoritative total to be allocated
    pub fn total(&self) -> Money {
        self.total
    }

    /// Adds a line item and recomputes totals
    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
        self.recalculate_totals();
    }

    /// Replaces the item at `index` and recomputes totals
    pub fn replace_item(&mut self, index: usize, item: LineItem) -> Result<(), BillError> {
        let slot = self
            .items
            .get_mut(index)
            .ok_or(BillError::ItemIndexOutOfBounds(index))?;
        *slot = item;
        self.recalculate_totals();
        Ok(())
    }

    /// Removes the item at `index` and recomputes totals
    pub fn remove_item(&mut self, index: usize) -> Result<LineItem, BillError> {
        if index >= self.items.len() {
            return Err(BillError::ItemIndexOutOfBounds(index));
        }
        let removed = self.items.remove(index);
        self.recalculate_totals();
        Ok(removed)
    }

    /// Derives the subtotal from the current items
    pub fn computed_subtotal(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(self.currency), |acc, item| {
                acc + item.line_total()
            })
    }

    /// Derives the total: `computed_subtotal + tax + service_charge`
    pub fn computed_total(&self) -> Money {
        self.computed_subtotal() + self.tax + self.service_charge
    }

    fn recalculate_totals(&mut self) {
        self.subtotal = self.computed_subtotal();
        self.total = self.subtotal + self.tax + self.service_charge;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn inr(amount: Decimal) -> Money {
        Money::new(amount, Currency::INR)
    }

    fn pizza_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_line_total() {
        let item = LineItem::new("Garlic Bread", inr(dec!(180)), 2);
        assert_eq!(item.line_total().amount(), dec!(360));
    }

    #[test]
    fn test_add_item_recomputes_totals() {
        let mut bill = Bill::new("Pizza Palace", pizza_date(), Currency::INR)
            .with_tax(inr(dec!(161)))
            .with_service_charge(inr(dec!(67)));

        bill.add_item(LineItem::new("Margherita Pizza (Large)", inr(dec!(450)), 1));
        bill.add_item(LineItem::new("Chicken Wings (6 pcs)", inr(dec!(320)), 1));

        assert_eq!(bill.subtotal().amount(), dec!(770));
        assert_eq!(bill.total().amount(), dec!(998));
        assert_eq!(bill.computed_total(), bill.total());
    }

    #[test]
    fn test_replace_item_recomputes_totals() {
        let mut bill = Bill::new("Pizza Palace", pizza_date(), Currency::INR);
        bill.add_item(LineItem::new("Coca Cola (500ml)", inr(dec!(60)), 3));

        bill.replace_item(0, LineItem::new("Coca Cola (500ml)", inr(dec!(60)), 2))
            .unwrap();

        assert_eq!(bill.subtotal().amount(), dec!(120));
    }

    #[test]
    fn test_remove_item_recomputes_totals() {
        let mut bill = Bill::new("Pizza Palace", pizza_date(), Currency::INR)
            .with_tax(inr(dec!(10)));
        bill.add_item(LineItem::new("Brownie", inr(dec!(150)), 2));
        bill.add_item(LineItem::new("Coke", inr(dec!(60)), 1));

        let removed = bill.remove_item(1).unwrap();

        assert_eq!(removed.name, "Coke");
        assert_eq!(bill.subtotal().amount(), dec!(300));
        assert_eq!(bill.total().amount(), dec!(310));
    }

    #[test]
    fn test_item_index_out_of_bounds() {
        let mut bill = Bill::new("Pizza Palace", pizza_date(), Currency::INR);
        let result = bill.remove_item(0);
        assert!(matches!(result, Err(BillError::ItemIndexOutOfBounds(0))));
    }
}
