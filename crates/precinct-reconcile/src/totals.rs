//! (state, candidate) totals comparison.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, DataFrame};
use tracing::debug;

use precinct_common::{any_to_i64, any_to_string};
use precinct_model::Dataverse;
use precinct_reference::ConstituencyRow;

use crate::normalize::normalize_candidate;

/// One joined totals row. A missing side is the reconciliation signal: the
/// key exists in only one dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciliationRow {
    pub state: String,
    pub candidate: String,
    pub precinct_votes: Option<i64>,
    pub reference_votes: Option<i64>,
    /// Present only when both sides are.
    pub votes_diff: Option<i64>,
}

/// Totals comparison for one office family, with a synthetic `Total` row
/// summing each side independently.
#[derive(Debug, Clone)]
pub struct ReconciliationReport {
    pub office: String,
    pub rows: Vec<ReconciliationRow>,
}

impl ReconciliationReport {
    /// Keys present on only one side of the join.
    pub fn unmatched(&self) -> Vec<&ReconciliationRow> {
        self.rows
            .iter()
            .filter(|row| {
                row.candidate != "Total"
                    && (row.precinct_votes.is_none() || row.reference_votes.is_none())
            })
            .collect()
    }

    /// Plain-text rendering for review files.
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "aggregates for {}:\nstate,candidate,precinct_votes,reference_votes,votes_diff\n",
            self.office
        );
        for row in &self.rows {
            out.push_str(&format!(
                "{},{},{},{},{}\n",
                row.state,
                row.candidate,
                render(row.precinct_votes),
                render(row.reference_votes),
                render(row.votes_diff),
            ));
        }
        out
    }
}

fn render(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "NA".to_string())
}

/// The office label rows of one family carry in the `office` column.
pub fn office_label(family: Dataverse) -> &'static str {
    match family {
        Dataverse::President => "US President",
        Dataverse::Senate => "US Senate",
        Dataverse::House => "US House",
        Dataverse::State | Dataverse::Local => "",
    }
}

/// Compare a partition's precinct sums against constituency totals.
///
/// The partition is restricted to the family's office rows; the reference
/// table is restricted to the run year and to states the partition covers.
/// Both sides aggregate to (state, normalized candidate) and outer-join on
/// that key, so a name mismatch surfaces as two rows each missing one side
/// rather than disappearing.
pub fn reconcile(
    partition: &DataFrame,
    reference: &[ConstituencyRow],
    family: Dataverse,
    year: i64,
) -> Result<ReconciliationReport> {
    let office = office_label(family);
    let states = partition
        .column("state")
        .context("partition is missing the state column")?;
    let candidates = partition
        .column("candidate")
        .context("partition is missing the candidate column")?;
    let offices = partition
        .column("office")
        .context("partition is missing the office column")?;
    let votes = partition
        .column("votes")
        .context("partition is missing the votes column")?;

    let mut precinct_totals: BTreeMap<(String, String), i64> = BTreeMap::new();
    let mut covered_states = BTreeSet::new();
    for idx in 0..partition.height() {
        if any_to_string(offices.get(idx).unwrap_or(AnyValue::Null)) != office {
            continue;
        }
        let state = any_to_string(states.get(idx).unwrap_or(AnyValue::Null));
        let candidate = normalize_candidate(&any_to_string(
            candidates.get(idx).unwrap_or(AnyValue::Null),
        ));
        covered_states.insert(state.clone());
        let count = any_to_i64(votes.get(idx).unwrap_or(AnyValue::Null)).unwrap_or(0);
        *precinct_totals.entry((state, candidate)).or_insert(0) += count;
    }

    let mut reference_totals: BTreeMap<(String, String), i64> = BTreeMap::new();
    for row in reference {
        if row.year != year || !covered_states.contains(&row.state) {
            continue;
        }
        let candidate = normalize_candidate(&row.candidate);
        let key = (row.state.clone(), candidate);
        *reference_totals.entry(key).or_insert(0) += row.votes.unwrap_or(0);
    }

    let keys: BTreeSet<&(String, String)> =
        precinct_totals.keys().chain(reference_totals.keys()).collect();
    let mut rows = Vec::new();
    let mut precinct_sum = 0i64;
    let mut reference_sum = 0i64;
    for key in keys {
        let precinct = precinct_totals.get(key).copied();
        let reference = reference_totals.get(key).copied();
        precinct_sum += precinct.unwrap_or(0);
        reference_sum += reference.unwrap_or(0);
        rows.push(ReconciliationRow {
            state: key.0.clone(),
            candidate: key.1.clone(),
            precinct_votes: precinct,
            reference_votes: reference,
            votes_diff: match (precinct, reference) {
                (Some(p), Some(r)) => Some(p - r),
                _ => None,
            },
        });
    }
    rows.push(ReconciliationRow {
        state: String::new(),
        candidate: "Total".to_string(),
        precinct_votes: Some(precinct_sum),
        reference_votes: Some(reference_sum),
        votes_diff: Some(precinct_sum - reference_sum),
    });

    debug!(office, rows = rows.len(), "reconciled aggregates");
    Ok(ReconciliationReport {
        office: office.to_string(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;

    fn reference_row(state: &str, candidate: &str, votes: i64) -> ConstituencyRow {
        ConstituencyRow {
            year: 2016,
            state: state.to_string(),
            candidate: candidate.to_string(),
            party: "democratic".to_string(),
            district: None,
            votes: Some(votes),
        }
    }

    #[test]
    fn normalized_names_aggregate_to_one_key() {
        let partition = df!(
            "state" => ["X"],
            "candidate" => ["Jane Doe"],
            "office" => ["US President"],
            "votes" => [100i64],
        )
        .unwrap();
        let reference = vec![reference_row("X", "Doe, Jane M.", 50)];
        let report = reconcile(&partition, &reference, Dataverse::President, 2016).unwrap();

        assert_eq!(report.rows.len(), 2);
        let row = &report.rows[0];
        assert_eq!(row.state, "X");
        assert_eq!(row.candidate, "jane doe");
        assert_eq!(row.precinct_votes, Some(100));
        assert_eq!(row.reference_votes, Some(50));
        assert_eq!(row.votes_diff, Some(50));
    }

    #[test]
    fn unmatched_keys_survive_the_outer_join() {
        let partition = df!(
            "state" => ["X", "X"],
            "candidate" => ["Jane Doe", "Only In Precincts"],
            "office" => ["US Senate", "US Senate"],
            "votes" => [100i64, 10],
        )
        .unwrap();
        let reference = vec![
            reference_row("X", "Jane Doe", 100),
            reference_row("X", "Only In Reference", 7),
        ];
        let report = reconcile(&partition, &reference, Dataverse::Senate, 2016).unwrap();
        let unmatched = report.unmatched();
        assert_eq!(unmatched.len(), 2);
        assert_eq!(unmatched[0].candidate, "only in precincts");
        assert_eq!(unmatched[0].reference_votes, None);
        assert_eq!(unmatched[0].votes_diff, None);
        assert_eq!(unmatched[1].candidate, "only in reference");
        assert_eq!(unmatched[1].precinct_votes, None);
    }

    #[test]
    fn total_row_sums_each_side_independently() {
        let partition = df!(
            "state" => ["X", "X"],
            "candidate" => ["A", "B"],
            "office" => ["US Senate", "US Senate"],
            "votes" => [60i64, 40],
        )
        .unwrap();
        let reference = vec![reference_row("X", "A", 55)];
        let report = reconcile(&partition, &reference, Dataverse::Senate, 2016).unwrap();
        let total = report.rows.last().unwrap();
        assert_eq!(total.candidate, "Total");
        assert_eq!(total.precinct_votes, Some(100));
        assert_eq!(total.reference_votes, Some(55));
        assert_eq!(total.votes_diff, Some(45));
    }

    #[test]
    fn reference_rows_outside_year_and_states_are_ignored() {
        let partition = df!(
            "state" => ["X"],
            "candidate" => ["A"],
            "office" => ["US President"],
            "votes" => [10i64],
        )
        .unwrap();
        let mut stale = reference_row("X", "A", 99);
        stale.year = 2012;
        let elsewhere = reference_row("Y", "A", 99);
        let report = reconcile(
            &partition,
            &[stale, elsewhere],
            Dataverse::President,
            2016,
        )
        .unwrap();
        assert_eq!(report.rows[0].reference_votes, None);
    }

    #[test]
    fn rows_from_other_offices_are_excluded() {
        let partition = df!(
            "state" => ["X", "X"],
            "candidate" => ["A", "A"],
            "office" => ["US President", "Governor"],
            "votes" => [10i64, 90],
        )
        .unwrap();
        let report = reconcile(&partition, &[], Dataverse::President, 2016).unwrap();
        assert_eq!(report.rows[0].precinct_votes, Some(10));
    }
}
