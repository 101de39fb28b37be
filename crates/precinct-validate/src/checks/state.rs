//! State identifier validity against the gazetteer.

use std::collections::BTreeSet;

use polars::prelude::DataFrame;

use precinct_model::Finding;
use precinct_reference::StateGazetteer;

use crate::util::distinct_values;

/// Every state identifier value must appear in the gazetteer. Values are
/// reported, never corrected. Callers scope the gazetteer first when
/// checking a single state's file.
pub fn check(df: &DataFrame, gazetteer: &StateGazetteer) -> Vec<Finding> {
    let mut findings = Vec::new();
    report_unknown(df, "state", &gazetteer.names(), &mut findings);
    report_unknown(df, "state_postal", &gazetteer.postals(), &mut findings);
    report_unknown(df, "state_fips", &gazetteer.fips(), &mut findings);
    report_unknown(df, "state_icpsr", &gazetteer.icpsr(), &mut findings);
    findings
}

fn report_unknown(
    df: &DataFrame,
    column: &str,
    known: &BTreeSet<&str>,
    findings: &mut Vec<Finding>,
) {
    let Some(observed) = distinct_values(df, column) else {
        return;
    };
    let unknown: Vec<String> = observed
        .into_iter()
        .filter(|value| !known.contains(value.as_str()))
        .collect();
    if !unknown.is_empty() {
        findings.push(
            Finding::new("state", "value not in the state gazetteer")
                .with_column(column)
                .with_values(unknown),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;
    use tempfile::TempDir;

    fn gazetteer() -> StateGazetteer {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("states.csv");
        std::fs::write(
            &path,
            "state,state_postal,state_fips,state_icpsr\nVermont,VT,50,6\n",
        )
        .unwrap();
        StateGazetteer::load(&path).unwrap()
    }

    #[test]
    fn reports_each_unknown_identifier_column() {
        let df = df!(
            "state" => ["Vermont", "Vermont Republic"],
            "state_postal" => ["VT", "VR"],
            "state_fips" => [50i64, 99],
            "state_icpsr" => [6i64, 6],
        )
        .unwrap();
        let findings = check(&df, &gazetteer());
        assert_eq!(findings.len(), 3);
        assert_eq!(findings[0].column.as_deref(), Some("state"));
        assert_eq!(findings[0].values, vec!["Vermont Republic"]);
        assert_eq!(findings[1].values, vec!["VR"]);
        assert_eq!(findings[2].values, vec!["99"]);
    }

    #[test]
    fn known_identifiers_pass() {
        let df = df!(
            "state" => ["Vermont"],
            "state_postal" => ["VT"],
            "state_fips" => [50i64],
            "state_icpsr" => [6i64],
        )
        .unwrap();
        assert!(check(&df, &gazetteer()).is_empty());
    }
}
