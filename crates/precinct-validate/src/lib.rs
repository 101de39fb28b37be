//! Advisory data-quality checks for precinct returns.
//!
//! Every check is read-only and produces findings for a human reviewer;
//! none of them halts the pipeline. The one fatal condition in this crate
//! is a seat-count table with no entry for an (office, state) the data
//! contains, which is a configuration error rather than a data finding.

pub mod checks;
pub mod engine;
pub mod util;

pub use engine::Validator;
