//! Canonical column layout for precinct-level returns.
//!
//! Every released dataset carries exactly these columns in this order. The
//! layout is a release contract: downstream consumers diff releases row by
//! row and column by column, so neither order nor names may drift.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical type of a canonical column.
///
/// `Float` doubles as the nullable-numeric representation: identifier columns
/// that are legitimately absent for some rows (coordinates, ANSI codes) must
/// not be forced to integers or reading real-world files fails outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Int,
    Float,
    Bool,
    Str,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Int => "int",
            ColumnType::Float => "float",
            ColumnType::Bool => "bool",
            ColumnType::Str => "str",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A canonical column: name plus logical type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub column_type: ColumnType,
}

const fn col(name: &'static str, column_type: ColumnType) -> Column {
    Column { name, column_type }
}

/// The canonical precinct-record layout, in release order.
pub const PRECINCT_COLUMNS: &[Column] = &[
    col("year", ColumnType::Int),
    col("stage", ColumnType::Str),
    col("special", ColumnType::Bool),
    col("state", ColumnType::Str),
    col("state_postal", ColumnType::Str),
    col("state_fips", ColumnType::Int),
    col("state_icpsr", ColumnType::Int),
    col("county_name", ColumnType::Str),
    col("county_fips", ColumnType::Float),
    col("county_ansi", ColumnType::Float),
    col("county_lat", ColumnType::Float),
    col("county_long", ColumnType::Float),
    col("jurisdiction", ColumnType::Str),
    col("precinct", ColumnType::Str),
    col("candidate", ColumnType::Str),
    col("candidate_last", ColumnType::Str),
    col("candidate_first", ColumnType::Str),
    col("candidate_middle", ColumnType::Str),
    col("candidate_full", ColumnType::Str),
    col("candidate_suffix", ColumnType::Str),
    col("candidate_nickname", ColumnType::Str),
    col("candidate_fec", ColumnType::Str),
    col("candidate_fec_name", ColumnType::Str),
    col("candidate_google", ColumnType::Str),
    col("candidate_govtrack", ColumnType::Str),
    col("candidate_icpsr", ColumnType::Float),
    col("candidate_maplight", ColumnType::Str),
    col("candidate_normalized", ColumnType::Str),
    col("candidate_opensecrets", ColumnType::Str),
    col("candidate_wikidata", ColumnType::Str),
    col("candidate_party", ColumnType::Str),
    col("office", ColumnType::Str),
    col("district", ColumnType::Str),
    col("writein", ColumnType::Bool),
    col("party", ColumnType::Str),
    col("mode", ColumnType::Str),
    col("votes", ColumnType::Int),
    col("dataverse", ColumnType::Str),
];

/// Combined-dataset sort key, applied after assembly. Stable and
/// locale-agnostic; consumers rely on deterministic row order for diffing.
pub const SORT_COLUMNS: &[&str] = &[
    "dataverse",
    "state",
    "jurisdiction",
    "precinct",
    "candidate",
    "party",
];

/// Column names in canonical order.
pub fn column_names() -> Vec<&'static str> {
    PRECINCT_COLUMNS.iter().map(|c| c.name).collect()
}

/// Look up the logical type of a canonical column.
pub fn column_type(name: &str) -> Option<ColumnType> {
    PRECINCT_COLUMNS
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.column_type)
}

pub fn is_canonical(name: &str) -> bool {
    column_type(name).is_some()
}
