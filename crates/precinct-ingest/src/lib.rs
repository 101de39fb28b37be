//! Typed reading of per-state precinct returns files.

pub mod error;
pub mod paths;
pub mod reader;
pub mod schema;

pub use error::{IngestError, Result};
pub use paths::state_csv_path;
pub use reader::{read_precinct_csv, read_state_table};
pub use schema::{empty_precinct_frame, precinct_schema};
