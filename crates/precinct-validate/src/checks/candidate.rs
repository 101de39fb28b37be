//! Candidate presence: empty only for write-ins.

use polars::prelude::{AnyValue, DataFrame};

use precinct_common::{any_to_bool, is_missing};
use precinct_model::Finding;

pub fn check(df: &DataFrame) -> Vec<Finding> {
    let (Ok(candidates), Ok(writeins)) = (df.column("candidate"), df.column("writein")) else {
        return Vec::new();
    };
    let mut count = 0u64;
    for idx in 0..df.height() {
        let candidate = candidates.get(idx).unwrap_or(AnyValue::Null);
        if !is_missing(&candidate) {
            continue;
        }
        let writein = any_to_bool(writeins.get(idx).unwrap_or(AnyValue::Null));
        if writein != Some(true) {
            count += 1;
        }
    }
    if count == 0 {
        return Vec::new();
    }
    vec![
        Finding::new("candidate", "empty candidate outside of write-ins")
            .with_column("candidate")
            .with_count(count),
    ]
}
