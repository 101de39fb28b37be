//! Write-in flag domain: the two boolean values and nothing else.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, DataFrame};

use precinct_common::{any_to_bool, any_to_string, is_missing};
use precinct_model::Finding;

pub fn check(df: &DataFrame) -> Vec<Finding> {
    let Ok(writeins) = df.column("writein") else {
        return Vec::new();
    };
    let mut offending = BTreeSet::new();
    for idx in 0..df.height() {
        let value = writeins.get(idx).unwrap_or(AnyValue::Null);
        if any_to_bool(value.clone()).is_some() {
            continue;
        }
        if is_missing(&value) {
            offending.insert("NA".to_string());
        } else {
            offending.insert(any_to_string(value));
        }
    }
    if offending.is_empty() {
        return Vec::new();
    }
    vec![
        Finding::new("writein", "non-boolean writein values")
            .with_column("writein")
            .with_values(offending.into_iter().collect()),
    ]
}
