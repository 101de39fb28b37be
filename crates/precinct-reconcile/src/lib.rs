//! Cross-checking precinct sums against independently sourced
//! constituency-level totals.

pub mod normalize;
pub mod totals;

pub use normalize::normalize_candidate;
pub use totals::{ReconciliationReport, ReconciliationRow, office_label, reconcile};
