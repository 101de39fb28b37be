//! Unique-value listings for eyeball review.

use polars::prelude::DataFrame;

use precinct_model::Finding;

use crate::util::distinct_values_with_missing;

/// The low-cardinality columns worth listing in a review run.
pub const REVIEW_COLUMNS: &[&str] = &[
    "dataverse",
    "district",
    "mode",
    "party",
    "special",
    "stage",
    "state",
    "writein",
    "year",
];

/// List each requested column's distinct values. These findings are purely
/// informational; a reviewer scans them for values that look wrong without
/// tripping any specific rule.
pub fn check(df: &DataFrame, columns: &[&str]) -> Vec<Finding> {
    let mut findings = Vec::new();
    for column in columns {
        let Some(values) = distinct_values_with_missing(df, column) else {
            continue;
        };
        findings.push(
            Finding::new("values", "distinct values")
                .with_column(*column)
                .with_values(values.into_iter().collect()),
        );
    }
    findings
}
