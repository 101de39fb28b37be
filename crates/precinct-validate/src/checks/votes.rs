//! Vote counts must reduce to non-negative integers.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, DataFrame};

use precinct_common::{any_to_f64, any_to_string, is_missing};
use precinct_model::Finding;

pub fn check(df: &DataFrame) -> Vec<Finding> {
    let Ok(votes) = df.column("votes") else {
        return Vec::new();
    };
    let mut offending = BTreeSet::new();
    for idx in 0..df.height() {
        let value = votes.get(idx).unwrap_or(AnyValue::Null);
        if is_missing(&value) {
            offending.insert("NA".to_string());
            continue;
        }
        match any_to_f64(value.clone()) {
            Some(v) if v >= 0.0 && v.fract() == 0.0 => {}
            _ => {
                offending.insert(any_to_string(value));
            }
        }
    }
    if offending.is_empty() {
        return Vec::new();
    }
    vec![
        Finding::new("votes", "votes not reducible to a non-negative integer")
            .with_column("votes")
            .with_values(offending.into_iter().collect()),
    ]
}
