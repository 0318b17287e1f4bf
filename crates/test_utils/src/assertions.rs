//! Custom Test Assertions
//!
//! Specialized assertion helpers for domain types that give more
//! meaningful error messages than standard assertions.

use rust_decimal::Decimal;

use core_kernel::Money;
use domain_bill::Bill;
use domain_split::MemberShare;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than
/// the tolerance.
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that the rounded shares cover the bill total within the
/// documented rounding residue of `member_count × 0.005`
pub fn assert_shares_conserve_total(shares: &[MemberShare], bill: &Bill) {
    let allocated: Decimal = shares.iter().map(|s| s.amount.amount()).sum();
    let residue_bound = Decimal::new(5, 3) * Decimal::from(shares.len());
    let diff = (allocated - bill.total().amount()).abs();
    assert!(
        diff <= residue_bound,
        "Shares sum {} strays from bill total {} by {} (bound {})",
        allocated,
        bill.total().amount(),
        diff,
        residue_bound
    );
}
