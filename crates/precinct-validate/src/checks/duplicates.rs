//! Fully duplicated row tally.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, DataFrame};

use precinct_common::any_to_string;
use precinct_model::Finding;

/// Count rows identical across every column. Legitimate data can repeat
/// (two write-in lines with the same zero count), so this reports rather
/// than dedupes.
pub fn check(df: &DataFrame) -> Vec<Finding> {
    if df.height() == 0 {
        return Vec::new();
    }
    let mut seen = BTreeSet::new();
    let mut duplicates = 0u64;
    for idx in 0..df.height() {
        let mut composite = String::new();
        for (pos, column) in df.get_columns().iter().enumerate() {
            if pos > 0 {
                composite.push('\u{1f}');
            }
            composite.push_str(&any_to_string(column.get(idx).unwrap_or(AnyValue::Null)));
        }
        if !seen.insert(composite) {
            duplicates += 1;
        }
    }
    if duplicates == 0 {
        return Vec::new();
    }
    vec![Finding::new("duplicates", "fully duplicated rows").with_count(duplicates)]
}
