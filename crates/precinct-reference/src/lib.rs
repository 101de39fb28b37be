//! Reference tables for validating precinct returns.
//!
//! Everything here is immutable input loaded once per run: gazetteers, seat
//! counts, the race calendar, constituency-level totals, release coverage,
//! and dataset/variable metadata.

pub mod constituency;
pub mod coverage;
pub mod csv;
pub mod districts;
pub mod gazetteer;
pub mod metadata;
pub mod paths;
pub mod races;

pub use constituency::{ConstituencyRow, load_constituency_totals};
pub use coverage::{Coverage, CoverageEntry};
pub use csv::{read_csv_rows, read_file_as_utf8, read_rows};
pub use districts::SeatCounts;
pub use gazetteer::{CountyEntry, CountyGazetteer, StateEntry, StateGazetteer};
pub use metadata::{load_dataset_metadata, load_variable_metadata};
pub use paths::{REFERENCE_ENV_VAR, ReferencePaths};
pub use races::{Race, RaceCalendar};
