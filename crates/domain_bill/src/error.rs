//! Bill domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::MoneyError;

/// Errors that can occur in the bill domain
#[derive(Debug, Error)]
pub enum BillError {
    #[error("Item '{0}' has a negative unit price")]
    NegativeUnitPrice(String),

    #[error("Item '{0}' has zero quantity")]
    ZeroQuantity(String),

    #[error("{0} must not be negative")]
    NegativeSurcharge(&'static str),

    #[error("Declared {field} {declared} disagrees with recomputed {computed}")]
    InconsistentTotals {
        field: &'static str,
        declared: Decimal,
        computed: Decimal,
    },

    #[error("No item at index {0}")]
    ItemIndexOutOfBounds(usize),

    #[error("Scan failed: {0}")]
    ScanFailed(String),

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}
