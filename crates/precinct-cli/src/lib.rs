//! Library surface of the precinct CLI: logging setup, the pipeline stages,
//! and console rendering. The binary in `main.rs` wires these to clap.

pub mod logging;
pub mod pipeline;
pub mod summary;
