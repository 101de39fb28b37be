//! Polars schema for the canonical precinct layout.

use std::sync::Arc;

use polars::prelude::*;

use precinct_model::schema::{ColumnType, PRECINCT_COLUMNS};

fn data_type(column_type: ColumnType) -> DataType {
    match column_type {
        ColumnType::Int => DataType::Int64,
        ColumnType::Float => DataType::Float64,
        ColumnType::Bool => DataType::Boolean,
        ColumnType::Str => DataType::String,
    }
}

/// Read schema for per-state files: every canonical column with its typed
/// dtype. Applied as an overwrite so files are parsed strictly rather than
/// inferred row by row.
pub fn precinct_schema() -> SchemaRef {
    Arc::new(Schema::from_iter(PRECINCT_COLUMNS.iter().map(|c| {
        (
            PlSmallStr::from_static(c.name),
            data_type(c.column_type),
        )
    })))
}

/// Zero-row frame carrying the full typed layout. Stands in for a state
/// whose file is not on disk yet, so assembly can proceed with partial data.
pub fn empty_precinct_frame() -> DataFrame {
    DataFrame::empty_with_schema(&precinct_schema())
}
