//! Schema conformance: data columns versus documented variables.

use std::collections::BTreeSet;

use polars::prelude::DataFrame;

use precinct_model::Finding;

/// Compare the frame's columns with the expected set. Reports missing and
/// unexpected columns as two separate findings. Unlike the release gate,
/// this is advisory; during collection a state file may be mid-migration.
pub fn check(df: &DataFrame, expected: &[String]) -> Vec<Finding> {
    let expected: BTreeSet<&str> = expected.iter().map(String::as_str).collect();
    let actual: BTreeSet<&str> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();

    let missing: Vec<String> = expected
        .difference(&actual)
        .map(|name| (*name).to_string())
        .collect();
    let unexpected: Vec<String> = actual
        .difference(&expected)
        .map(|name| (*name).to_string())
        .collect();

    let mut findings = Vec::new();
    if !missing.is_empty() {
        findings.push(
            Finding::new("schema", "missing expected columns").with_values(missing),
        );
    }
    if !unexpected.is_empty() {
        findings.push(Finding::new("schema", "unexpected columns").with_values(unexpected));
    }
    findings
}
