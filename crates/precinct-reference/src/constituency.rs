//! Constituency-level totals, independently sourced.
//!
//! Reconciliation sums precinct returns up to (state, candidate) and compares
//! them against these tables. Two layouts exist: state-level files for the
//! president and senate families, and a district-level file for house races
//! with an extra `district` column. Both carry their vote counts in a
//! `candidatevotes` column.

use std::path::Path;

use anyhow::{Context, Result};

use crate::csv::read_csv_rows;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstituencyRow {
    pub year: i64,
    pub state: String,
    pub candidate: String,
    pub party: String,
    /// Present only in the district-level layout.
    pub district: Option<String>,
    pub votes: Option<i64>,
}

/// Load one constituency totals table. Rows without a parseable year are
/// skipped; they cannot match any run's year filter.
pub fn load_constituency_totals(path: &Path) -> Result<Vec<ConstituencyRow>> {
    let rows = read_csv_rows(path)
        .with_context(|| format!("load constituency totals: {}", path.display()))?;
    let mut totals = Vec::new();
    for row in rows {
        let Some(year) = row.get("year").and_then(|v| v.parse::<i64>().ok()) else {
            continue;
        };
        let district = row
            .get("district")
            .filter(|v| !v.is_empty())
            .cloned();
        let votes = row
            .get("candidatevotes")
            .and_then(|v| v.parse::<f64>().ok())
            .map(|v| v as i64);
        totals.push(ConstituencyRow {
            year,
            state: row.get("state").cloned().unwrap_or_default(),
            candidate: row.get("candidate").cloned().unwrap_or_default(),
            party: row.get("party").cloned().unwrap_or_default(),
            district,
            votes,
        });
    }
    Ok(totals)
}
