//! Row and column access helpers shared by the checks.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, DataFrame};

use precinct_common::{any_to_string, is_missing};

/// Cell value as a rendered string, empty for nulls and absent columns.
pub fn cell_string(df: &DataFrame, column: &str, idx: usize) -> String {
    let Ok(column) = df.column(column) else {
        return String::new();
    };
    any_to_string(column.get(idx).unwrap_or(AnyValue::Null))
}

/// Distinct non-missing values of a column, rendered as strings. Returns
/// `None` when the column is absent so checks can skip quietly.
pub fn distinct_values(df: &DataFrame, column: &str) -> Option<BTreeSet<String>> {
    let column = df.column(column).ok()?;
    let mut values = BTreeSet::new();
    for idx in 0..df.height() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        if is_missing(&value) {
            continue;
        }
        values.insert(any_to_string(value));
    }
    Some(values)
}

/// Distinct values including a rendered placeholder for missing cells.
pub fn distinct_values_with_missing(df: &DataFrame, column: &str) -> Option<BTreeSet<String>> {
    let column = df.column(column).ok()?;
    let mut values = BTreeSet::new();
    for idx in 0..df.height() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        if is_missing(&value) {
            values.insert("NA".to_string());
        } else {
            values.insert(any_to_string(value));
        }
    }
    Some(values)
}
