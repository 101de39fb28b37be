//! Red-flag value screening.
//!
//! Mis-scraped aggregate rows tend to leak words like "total" or
//! "registered" into the office, precinct, district, or candidate columns.
//! A precinct literally named "Total" would be flagged here too; that is the
//! point of an advisory check, a human decides.

use std::collections::BTreeSet;

use polars::prelude::DataFrame;

use precinct_model::Finding;

use crate::util::cell_string;

/// Columns screened for red-flag substrings.
pub const SUSPECT_COLUMNS: &[&str] = &["office", "precinct", "district", "candidate"];

/// Substrings that historically mark aggregate rows rather than precincts.
pub const SUSPECT_PATTERNS: &[&str] = &["total", "registered", "cast", "votes", "ballot", "write"];

pub fn check(df: &DataFrame) -> Vec<Finding> {
    let mut findings = Vec::new();
    for column in SUSPECT_COLUMNS {
        if df.column(column).is_err() {
            continue;
        }
        for pattern in SUSPECT_PATTERNS {
            let mut matches = BTreeSet::new();
            for idx in 0..df.height() {
                let value = cell_string(df, column, idx);
                if value.to_lowercase().contains(pattern) {
                    matches.insert(value);
                }
            }
            if !matches.is_empty() {
                findings.push(
                    Finding::new("suspect", format!("values matching '{pattern}'"))
                        .with_column(*column)
                        .with_values(matches.into_iter().collect()),
                );
            }
        }
        // Text tagged absentee outside the mode column means the mode was
        // mis-assigned upstream.
        let mut mismatched = BTreeSet::new();
        for idx in 0..df.height() {
            let value = cell_string(df, column, idx);
            if !value.to_lowercase().contains("absentee") {
                continue;
            }
            let mode = cell_string(df, "mode", idx);
            if !mode.to_lowercase().contains("absentee") {
                mismatched.insert(value);
            }
        }
        if !mismatched.is_empty() {
            findings.push(
                Finding::new("suspect", "'absentee' text where mode is not absentee")
                    .with_column(*column)
                    .with_values(mismatched.into_iter().collect()),
            );
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;

    #[test]
    fn flags_aggregate_words_case_insensitively() {
        let df = df!(
            "precinct" => ["Ward 1", "TOTAL VOTES CAST"],
            "mode" => ["election day", "election day"],
        )
        .unwrap();
        let findings = check(&df);
        let patterns: Vec<&str> = findings.iter().map(|f| f.message.as_str()).collect();
        assert!(patterns.contains(&"values matching 'total'"));
        assert!(patterns.contains(&"values matching 'cast'"));
        assert!(patterns.contains(&"values matching 'votes'"));
        assert!(findings.iter().all(|f| f.column.as_deref() == Some("precinct")));
    }

    #[test]
    fn flags_absentee_text_with_mismatched_mode() {
        let df = df!(
            "precinct" => ["Absentee Ward 3", "Absentee Ward 4"],
            "mode" => ["election day", "absentee"],
        )
        .unwrap();
        let findings = check(&df);
        let mismatch = findings
            .iter()
            .find(|f| f.message.contains("mode is not absentee"))
            .expect("mismatch finding");
        assert_eq!(mismatch.values, vec!["Absentee Ward 3"]);
    }

    #[test]
    fn clean_precinct_names_pass() {
        let df = df!(
            "precinct" => ["Ward 1", "Ward 2"],
            "candidate" => ["Jane Doe", "John Roe"],
            "mode" => ["election day", "election day"],
        )
        .unwrap();
        assert!(check(&df).is_empty());
    }
}
