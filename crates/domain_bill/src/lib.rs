//! Bill Domain
//!
//! This crate owns the inputs to the split flow:
//!
//! - **Bill / LineItem**: the parsed merchant transaction, editable until a
//!   split computation begins, with totals recomputed on every change
//! - **Group / Member**: who can be allocated a share
//! - **Capture boundary**: validation of the scanning collaborator's raw
//!   output into a well-formed [`Bill`]
//!
//! The allocation engine (in `domain_split`) reads these types but never
//! mutates them.

pub mod bill;
pub mod capture;
pub mod error;
pub mod group;

pub use bill::{Bill, LineItem};
pub use capture::{BillCapture, CapturedBill, CapturedItem};
pub use error::BillError;
pub use group::{Group, Member};
