//! Payment collaborator boundary
//!
//! Payment collection is a black box: the core hands over a settlement
//! and a chosen channel, and gets back a terminal status it does not
//! interpret beyond pass/fail. There is no retry policy here - a retry is
//! a user-initiated re-submission.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::PaymentId;
use domain_bill::Member;

use crate::error::SplitError;
use crate::settlement::Settlement;

/// Payment channels the collaborator accepts (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentChannel {
    /// Instant transfer via a UPI app
    Upi,
    /// Debit or credit card
    Card,
    /// Paid offline, marked as settled by hand
    Cash,
}

impl fmt::Display for PaymentChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentChannel::Upi => "UPI",
            PaymentChannel::Card => "Card",
            PaymentChannel::Cash => "Cash/Offline",
        };
        write!(f, "{}", label)
    }
}

/// Status reported back by the payment collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Still in flight
    Pending,
    /// Terminal success
    Succeeded,
    /// Terminal failure
    Failed,
}

impl PaymentStatus {
    /// Returns true once the collaborator will report nothing further
    pub fn is_terminal(&self) -> bool {
        matches!(self, PaymentStatus::Succeeded | PaymentStatus::Failed)
    }
}

/// The collaborator's receipt for one member's payment attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub payment_id: PaymentId,
    pub status: PaymentStatus,
    pub channel: PaymentChannel,
    pub paid_at: DateTime<Utc>,
}

/// Port for the payment collaborator
#[async_trait]
pub trait PaymentCollector: Send + Sync {
    /// Collects one member's share of a settlement over the given channel
    async fn collect(
        &self,
        settlement: &Settlement,
        payer: &Member,
        channel: PaymentChannel,
    ) -> Result<PaymentReceipt, SplitError>;
}

/// Builds a `upi://pay` deep link for a member's share
///
/// Returns `None` when the settlement carries no share for the payer.
pub fn upi_payment_link(
    settlement: &Settlement,
    payer: &Member,
    payee_vpa: &str,
) -> Option<String> {
    let share = settlement.share_for(payer)?;
    let note = encode_note(&format!(
        "BillBandhu: {} - {}",
        settlement.bill.merchant_name, settlement.group.name
    ));
    Some(format!(
        "upi://pay?pa={}&am={}&tn={}",
        payee_vpa,
        share.amount.amount(),
        note
    ))
}

// Minimal percent-encoding for the transaction-note query value
fn encode_note(note: &str) -> String {
    let mut encoded = String::with_capacity(note.len());
    for c in note.chars() {
        match c {
            ' ' => encoded.push_str("%20"),
            '&' => encoded.push_str("%26"),
            '=' => encoded.push_str("%3D"),
            '?' => encoded.push_str("%3F"),
            '#' => encoded.push_str("%23"),
            _ => encoded.push(c),
        }
    }
    encoded
}
