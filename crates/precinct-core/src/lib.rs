//! Assembly and partitioning of the combined precinct returns dataset.
//!
//! The assembler owns the combined dataset for the duration of a release run;
//! everything downstream works on read-only partition views derived from it.

pub mod assemble;
pub mod frequencies;
pub mod partition;
pub mod release;

pub use assemble::assemble;
pub use frequencies::{FrequencyRow, frequencies, frequencies_csv};
pub use partition::partition;
pub use release::{check_documentation, release_version};
