//! BillBandhu core - facade crate
//!
//! Re-exports the split-flow crates so callers (and the workspace
//! integration tests) can depend on a single entry point:
//!
//! - [`core_kernel`]: money arithmetic and typed identifiers
//! - [`domain_bill`]: bill, group, and capture-boundary types
//! - [`domain_split`]: allocation engine, settlement builder, payment port

pub use core_kernel;
pub use domain_bill;
pub use domain_split;
