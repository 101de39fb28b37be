//! County membership and coverage against the Census gazetteer.

use std::collections::BTreeSet;

use polars::prelude::DataFrame;

use precinct_common::parse_f64;
use precinct_model::Finding;
use precinct_reference::CountyGazetteer;

use crate::util::distinct_values;

/// County names and ANSI codes must lie within the gazetteer, scoped to the
/// active state(s) by the caller. Two distinct findings separate unexpected
/// values (likely typos or mis-joins) from counties the gazetteer expects
/// but the data never mentions (a coverage gap).
pub fn check(df: &DataFrame, gazetteer: &CountyGazetteer) -> Vec<Finding> {
    let mut findings = Vec::new();
    let known_names = gazetteer.names();
    let known_fips = gazetteer.fips();

    if let Some(names) = distinct_values(df, "county_name") {
        let unexpected: Vec<String> = names
            .iter()
            .filter(|name| !known_names.contains(name.as_str()))
            .cloned()
            .collect();
        if !unexpected.is_empty() {
            findings.push(
                Finding::new("county", "county name not in the gazetteer")
                    .with_column("county_name")
                    .with_values(unexpected),
            );
        }
        let missing: Vec<String> = known_names
            .iter()
            .filter(|name| !names.contains(**name))
            .map(|name| (*name).to_string())
            .collect();
        if !missing.is_empty() {
            findings.push(
                Finding::new("county", "county in the gazetteer but absent from the data")
                    .with_column("county_name")
                    .with_values(missing),
            );
        }
    }

    if let Some(codes) = distinct_values(df, "county_ansi") {
        // GEOID strings keep leading zeros; the data column is numeric.
        // Compare as numbers so "01001" matches 1001.0.
        let known_codes: BTreeSet<i64> = known_fips
            .iter()
            .filter_map(|code| parse_f64(code).map(|v| v as i64))
            .collect();
        let unexpected: Vec<String> = codes
            .into_iter()
            .filter(|code| match parse_f64(code) {
                Some(v) => !known_codes.contains(&(v as i64)),
                None => true,
            })
            .collect();
        if !unexpected.is_empty() {
            findings.push(
                Finding::new("county", "county code not in the gazetteer")
                    .with_column("county_ansi")
                    .with_values(unexpected),
            );
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;
    use tempfile::TempDir;

    fn gazetteer() -> CountyGazetteer {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gaz.txt");
        std::fs::write(
            &path,
            "USPS\tGEOID\tNAME\n\
             VT\t50001\tAddison County\n\
             VT\t50003\tBennington County\n",
        )
        .unwrap();
        CountyGazetteer::load(&path).unwrap()
    }

    #[test]
    fn separates_unexpected_from_missing() {
        let df = df!(
            "county_name" => ["Addison County", "Windham County"],
            "county_ansi" => [Some(50001.0f64), Some(99999.0)],
        )
        .unwrap();
        let findings = check(&df, &gazetteer());
        assert_eq!(findings.len(), 3);
        assert_eq!(findings[0].values, vec!["Windham County"]);
        assert!(findings[1].message.contains("absent from the data"));
        assert_eq!(findings[1].values, vec!["Bennington County"]);
        assert_eq!(findings[2].column.as_deref(), Some("county_ansi"));
        assert_eq!(findings[2].values, vec!["99999"]);
    }

    #[test]
    fn leading_zero_geoids_match_numeric_codes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gaz.txt");
        std::fs::write(
            &path,
            "USPS\tGEOID\tNAME\nAL\t01001\tAutauga County\n",
        )
        .unwrap();
        let gazetteer = CountyGazetteer::load(&path).unwrap();
        let df = df!(
            "county_name" => ["Autauga County"],
            "county_ansi" => [Some(1001.0f64)],
        )
        .unwrap();
        assert!(check(&df, &gazetteer).is_empty());
    }

    #[test]
    fn codes_ending_in_zero_are_not_false_positives() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gaz.txt");
        std::fs::write(
            &path,
            "USPS\tGEOID\tNAME\n\
             VT\t50010\tEssex County\n\
             VA\t51790\tStaunton city\n",
        )
        .unwrap();
        let gazetteer = CountyGazetteer::load(&path).unwrap();
        let df = df!(
            "county_name" => ["Essex County", "Staunton city"],
            "county_ansi" => [Some(50010.0f64), Some(51790.0)],
        )
        .unwrap();
        assert!(check(&df, &gazetteer).is_empty());
    }

    #[test]
    fn null_codes_are_not_unexpected() {
        let df = df!(
            "county_name" => ["Addison County", "Bennington County"],
            "county_ansi" => [Some(50001.0f64), None],
        )
        .unwrap();
        assert!(check(&df, &gazetteer()).is_empty());
    }
}
