//! Per-column value counts for release documentation review.

use std::collections::BTreeMap;

use anyhow::Result;
use polars::prelude::*;

use precinct_common::any_to_string;

/// One (variable, value, count) row of the frequencies table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyRow {
    pub variable: String,
    pub value: String,
    pub count: u64,
}

/// Tally distinct values per column, sorted by variable then value. The
/// `votes` column is skipped; counting one row per vote count is noise.
pub fn frequencies(df: &DataFrame) -> Result<Vec<FrequencyRow>> {
    let mut rows = Vec::new();
    for column in df.get_columns() {
        let name = column.name().to_string();
        if name == "votes" {
            continue;
        }
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for idx in 0..df.height() {
            let value = any_to_string(column.get(idx).unwrap_or(AnyValue::Null));
            *counts.entry(value).or_insert(0) += 1;
        }
        for (value, count) in counts {
            rows.push(FrequencyRow {
                variable: name.clone(),
                value,
                count,
            });
        }
    }
    rows.sort_by(|a, b| (a.variable.as_str(), a.value.as_str()).cmp(&(b.variable.as_str(), b.value.as_str())));
    Ok(rows)
}

/// Render the frequencies table as CSV text for the release directory.
pub fn frequencies_csv(rows: &[FrequencyRow]) -> String {
    let mut out = String::from("variable,value,count\n");
    for row in rows {
        let value = if row.value.contains(',') || row.value.contains('"') {
            format!("\"{}\"", row.value.replace('"', "\"\""))
        } else {
            row.value.clone()
        };
        out.push_str(&format!("{},{},{}\n", row.variable, value, row.count));
    }
    out
}
