//! Scan-capture boundary
//!
//! The scanning/OCR collaborator is a black box that hands over a loosely
//! shaped [`CapturedBill`]. Everything is validated here, before the
//! allocation engine ever sees the data: malformed input is rejected at
//! the boundary rather than tolerated at read time.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{Currency, Money};

use crate::bill::{Bill, LineItem};
use crate::error::BillError;

/// Tolerance when comparing declared against recomputed totals
const TOTAL_TOLERANCE: Decimal = dec!(0.01);

/// One extracted receipt line, as the scanner reports it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapturedItem {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// The raw bill shape produced by the scanning collaborator
///
/// Field names mirror the collaborator's JSON payload; `tax` and
/// `service_charge` are optional there and default to zero here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedBill {
    pub merchant_name: String,
    pub date: NaiveDate,
    pub items: Vec<CapturedItem>,
    pub subtotal: Decimal,
    #[serde(default)]
    pub tax: Option<Decimal>,
    #[serde(default)]
    pub service_charge: Option<Decimal>,
    pub total: Decimal,
    pub payment_method: String,
}

impl CapturedBill {
    /// Validates the captured data and converts it into a [`Bill`]
    ///
    /// Rejects negative prices, zero quantities, negative surcharges, and
    /// declared totals that disagree with the recomputed ones by 0.01 or
    /// more. An empty item list is legal (the bill then allocates nothing
    /// in item mode).
    pub fn into_bill(self, currency: Currency) -> Result<Bill, BillError> {
        for item in &self.items {
            if item.price.is_sign_negative() {
                return Err(BillError::NegativeUnitPrice(item.name.clone()));
            }
            if item.quantity == 0 {
                return Err(BillError::ZeroQuantity(item.name.clone()));
            }
        }

        let tax = self.tax.unwrap_or(Decimal::ZERO);
        let service_charge = self.service_charge.unwrap_or(Decimal::ZERO);
        if tax.is_sign_negative() {
            return Err(BillError::NegativeSurcharge("tax"));
        }
        if service_charge.is_sign_negative() {
            return Err(BillError::NegativeSurcharge("service charge"));
        }

        let computed_subtotal: Decimal = self
            .items
            .iter()
            .map(|item| item.price * Decimal::from(item.quantity))
            .sum();
        if (computed_subtotal - self.subtotal).abs() >= TOTAL_TOLERANCE {
            return Err(BillError::InconsistentTotals {
                field: "subtotal",
                declared: self.subtotal,
                computed: computed_subtotal,
            });
        }

        let computed_total = computed_subtotal + tax + service_charge;
        if (computed_total - self.total).abs() >= TOTAL_TOLERANCE {
            return Err(BillError::InconsistentTotals {
                field: "total",
                declared: self.total,
                computed: computed_total,
            });
        }

        let mut bill = Bill::new(self.merchant_name, self.date, currency)
            .with_tax(Money::new(tax, currency))
            .with_service_charge(Money::new(service_charge, currency))
            .with_payment_method(self.payment_method);
        for item in self.items {
            bill.add_item(LineItem::new(
                item.name,
                Money::new(item.price, currency),
                item.quantity,
            ));
        }

        debug!(
            merchant = %bill.merchant_name,
            items = bill.items().len(),
            total = %bill.total(),
            "captured bill validated"
        );

        Ok(bill)
    }
}

/// Port for the scanning/OCR collaborator
///
/// The core does not care how the bill was captured; implementations may
/// call a vision service, parse an upload, or return canned data in tests.
#[async_trait]
pub trait BillCapture: Send + Sync {
    /// Extracts a bill from an uploaded receipt image
    async fn scan(&self, upload: &[u8]) -> Result<CapturedBill, BillError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza_palace() -> CapturedBill {
        CapturedBill {
            merchant_name: "Pizza Palace".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            items: vec![
                CapturedItem {
                    name: "Margherita Pizza (Large)".to_string(),
                    price: dec!(450),
                    quantity: 1,
                },
                CapturedItem {
                    name: "Chicken Wings (6 pcs)".to_string(),
                    price: dec!(320),
                    quantity: 1,
                },
                CapturedItem {
                    name: "Garlic Bread".to_string(),
                    price: dec!(180),
                    quantity: 2,
                },
                CapturedItem {
                    name: "Coca Cola (500ml)".to_string(),
                    price: dec!(60),
                    quantity: 3,
                },
                CapturedItem {
                    name: "Masala Dip".to_string(),
                    price: dec!(30),
                    quantity: 1,
                },
            ],
            subtotal: dec!(1340),
            tax: Some(dec!(161)),
            service_charge: Some(dec!(67)),
            total: dec!(1568),
            payment_method: "Card".to_string(),
        }
    }

    #[test]
    fn test_valid_capture_converts() {
        let bill = pizza_palace().into_bill(Currency::INR).unwrap();

        assert_eq!(bill.subtotal().amount(), dec!(1340));
        assert_eq!(bill.total().amount(), dec!(1568));
        assert_eq!(bill.items().len(), 5);
        assert_eq!(bill.payment_method, "Card");
    }

    #[test]
    fn test_missing_surcharges_default_to_zero() {
        let mut capture = pizza_palace();
        capture.tax = None;
        capture.service_charge = None;
        capture.total = dec!(1340);

        let bill = capture.into_bill(Currency::INR).unwrap();
        assert!(bill.tax.is_zero());
        assert!(bill.service_charge.is_zero());
        assert_eq!(bill.total().amount(), dec!(1340));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut capture = pizza_palace();
        capture.items[0].price = dec!(-450);

        assert!(matches!(
            capture.into_bill(Currency::INR),
            Err(BillError::NegativeUnitPrice(_))
        ));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut capture = pizza_palace();
        capture.items[2].quantity = 0;

        assert!(matches!(
            capture.into_bill(Currency::INR),
            Err(BillError::ZeroQuantity(_))
        ));
    }

    #[test]
    fn test_inconsistent_subtotal_rejected() {
        let mut capture = pizza_palace();
        capture.subtotal = dec!(1300);

        assert!(matches!(
            capture.into_bill(Currency::INR),
            Err(BillError::InconsistentTotals { field: "subtotal", .. })
        ));
    }

    #[test]
    fn test_inconsistent_total_rejected() {
        let mut capture = pizza_palace();
        capture.total = dec!(1570);

        assert!(matches!(
            capture.into_bill(Currency::INR),
            Err(BillError::InconsistentTotals { field: "total", .. })
        ));
    }

    #[test]
    fn test_capture_deserializes_collaborator_payload() {
        let json = r#"{
            "merchantName": "Pizza Palace",
            "date": "2024-01-15",
            "items": [{ "name": "Garlic Bread", "price": 180, "quantity": 2 }],
            "subtotal": 360,
            "tax": 18,
            "total": 378,
            "paymentMethod": "Card"
        }"#;

        let capture: CapturedBill = serde_json::from_str(json).unwrap();
        assert_eq!(capture.merchant_name, "Pizza Palace");
        assert_eq!(capture.service_charge, None);

        let bill = capture.into_bill(Currency::INR).unwrap();
        assert_eq!(bill.total().amount(), dec!(378));
    }
}
