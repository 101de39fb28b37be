//! District label validity.
//!
//! The two statewide offices admit only the literal `statewide`. Every
//! office the seat-count table defines admits `0` for a single seat, else
//! the string integers `1..=n`. A state the table does not define for an
//! office is a configuration error and fails the run.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;
use polars::prelude::DataFrame;

use precinct_model::Finding;
use precinct_reference::SeatCounts;

use crate::util::cell_string;

/// Offices whose district label must be the literal `statewide`.
pub const STATEWIDE_OFFICES: &[&str] = &["US President", "US Senate"];

/// Offices whose districts may never be null.
const DISTRICTED_OFFICES: &[&str] = &["State Senate", "State House"];

pub fn check(df: &DataFrame, seats: &SeatCounts) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();

    for office in STATEWIDE_OFFICES {
        let mut invalid = BTreeSet::new();
        for idx in 0..df.height() {
            if cell_string(df, "office", idx) != *office {
                continue;
            }
            let district = cell_string(df, "district", idx);
            if district != "statewide" {
                invalid.insert(render(district));
            }
        }
        if !invalid.is_empty() {
            findings.push(
                Finding::new("district", format!("non-statewide districts for {office}"))
                    .with_column("district")
                    .with_values(invalid.into_iter().collect()),
            );
        }
    }

    let mut valid_cache: BTreeMap<(String, String), Vec<String>> = BTreeMap::new();
    for office in seats.offices() {
        let mut invalid = BTreeSet::new();
        for idx in 0..df.height() {
            if cell_string(df, "office", idx) != office {
                continue;
            }
            let postal = cell_string(df, "state_postal", idx);
            let key = (office.to_string(), postal.clone());
            if !valid_cache.contains_key(&key) {
                let valid = seats.valid_districts(office, &postal)?;
                valid_cache.insert(key.clone(), valid);
            }
            let valid = &valid_cache[&key];
            let district = cell_string(df, "district", idx);
            if !valid.contains(&district) {
                invalid.insert(render(district));
            }
        }
        if !invalid.is_empty() {
            findings.push(
                Finding::new("district", format!("invalid districts for {office}"))
                    .with_column("district")
                    .with_values(invalid.into_iter().collect()),
            );
        }
    }

    for office in DISTRICTED_OFFICES {
        let mut nulls = 0u64;
        for idx in 0..df.height() {
            if cell_string(df, "office", idx) == *office && cell_string(df, "district", idx).is_empty()
            {
                nulls += 1;
            }
        }
        if nulls > 0 {
            findings.push(
                Finding::new("district", format!("null districts for {office}"))
                    .with_column("district")
                    .with_count(nulls),
            );
        }
    }

    Ok(findings)
}

fn render(district: String) -> String {
    if district.is_empty() {
        "NA".to_string()
    } else {
        district
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;
    use tempfile::TempDir;

    fn seats() -> SeatCounts {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("districts.csv");
        std::fs::write(
            &path,
            "office,state_postal,seats\n\
             State Senate,VT,1\n\
             State House,VT,3\n",
        )
        .unwrap();
        SeatCounts::load(&path).unwrap()
    }

    #[test]
    fn single_seat_admits_only_district_zero() {
        let df = df!(
            "office" => ["State Senate", "State Senate"],
            "state_postal" => ["VT", "VT"],
            "district" => ["0", "2"],
        )
        .unwrap();
        let findings = check(&df, &seats()).unwrap();
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("State Senate"));
        assert_eq!(findings[0].values, vec!["2"]);
    }

    #[test]
    fn multi_seat_admits_one_through_n() {
        let df = df!(
            "office" => ["State House", "State House", "State House"],
            "state_postal" => ["VT", "VT", "VT"],
            "district" => ["1", "3", "0"],
        )
        .unwrap();
        let findings = check(&df, &seats()).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].values, vec!["0"]);
    }

    #[test]
    fn statewide_offices_admit_only_the_literal() {
        let df = df!(
            "office" => ["US President", "US Senate"],
            "state_postal" => ["VT", "VT"],
            "district" => ["statewide", "1"],
        )
        .unwrap();
        let findings = check(&df, &seats()).unwrap();
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("US Senate"));
        assert_eq!(findings[0].values, vec!["1"]);
    }

    #[test]
    fn undefined_state_for_a_known_office_is_fatal() {
        let df = df!(
            "office" => ["State Senate"],
            "state_postal" => ["NH"],
            "district" => ["0"],
        )
        .unwrap();
        let err = check(&df, &seats()).unwrap_err();
        assert!(err.to_string().contains("NH"));
    }

    #[test]
    fn null_districts_for_state_legislature_are_counted() {
        let df = df!(
            "office" => ["State House", "State House"],
            "state_postal" => ["VT", "VT"],
            "district" => [Some("1"), None],
        )
        .unwrap();
        let findings = check(&df, &seats()).unwrap();
        let nulls = findings
            .iter()
            .find(|f| f.message.contains("null districts"))
            .expect("null finding");
        assert_eq!(nulls.count, Some(1));
    }
}
