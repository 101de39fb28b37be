//! Major-party label presence and known misspellings.

use polars::prelude::DataFrame;

use precinct_model::Finding;

use crate::util::{cell_string, distinct_values};

/// Canonical labels both of which should appear in any full dataset.
pub const MAJOR_PARTIES: &[&str] = &["republican", "democratic"];

/// The recurring wrong spelling of the Democratic label.
const KNOWN_MISSPELLING: &str = "democrat";

pub fn check(df: &DataFrame) -> Vec<Finding> {
    let Some(observed) = distinct_values(df, "party") else {
        return Vec::new();
    };
    let mut findings = Vec::new();

    let absent: Vec<String> = MAJOR_PARTIES
        .iter()
        .filter(|party| !observed.contains(**party))
        .map(|party| (*party).to_string())
        .collect();
    if !absent.is_empty() {
        findings.push(
            Finding::new("party", "major party label absent")
                .with_column("party")
                .with_values(absent),
        );
    }

    if observed.contains(KNOWN_MISSPELLING) {
        let mut count = 0u64;
        for idx in 0..df.height() {
            if cell_string(df, "party", idx) == KNOWN_MISSPELLING {
                count += 1;
            }
        }
        findings.push(
            Finding::new("party", "label 'democrat' should be 'democratic'")
                .with_column("party")
                .with_count(count),
        );
    }

    findings
}
