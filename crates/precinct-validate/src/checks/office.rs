//! Expected-office coverage against the race calendar.

use polars::prelude::DataFrame;

use precinct_model::Finding;
use precinct_reference::RaceCalendar;

use crate::util::{cell_string, distinct_values};

/// Report offices the race calendar expects but the data never mentions.
/// For a national dataset an entirely absent US President office is its own
/// finding; no state skips a presidential election year.
pub fn check(
    df: &DataFrame,
    calendar: &RaceCalendar,
    postals: &[String],
    year: i64,
    national: bool,
) -> Vec<Finding> {
    let mut findings = Vec::new();
    let observed = distinct_values(df, "office").unwrap_or_default();

    if national && !observed.contains("US President") {
        findings.push(
            Finding::new("office", "US President absent from the dataset").with_column("office"),
        );
    }

    for postal in postals {
        for office in calendar.expected_offices(postal, year) {
            let mut present = false;
            for idx in 0..df.height() {
                if cell_string(df, "state_postal", idx) == *postal
                    && cell_string(df, "office", idx) == office
                {
                    present = true;
                    break;
                }
            }
            if !present {
                findings.push(
                    Finding::new(
                        "office",
                        format!("expected returns for '{office}' in {postal}, none found"),
                    )
                    .with_column("office"),
                );
            }
        }
    }

    findings
}
