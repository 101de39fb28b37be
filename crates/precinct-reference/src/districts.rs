//! Seat counts per (office, state).
//!
//! The district check derives each office's valid district labels from these
//! counts. A combination the table does not define is a configuration error,
//! not a data finding: callers fail fast instead of silently skipping the
//! office.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::csv::read_csv_rows;

#[derive(Debug, Clone, Default)]
pub struct SeatCounts {
    by_office: BTreeMap<String, BTreeMap<String, u32>>,
}

impl SeatCounts {
    /// Load from a CSV with `office`, `state_postal`, `seats` columns.
    pub fn load(path: &Path) -> Result<Self> {
        let rows =
            read_csv_rows(path).with_context(|| format!("load seat counts: {}", path.display()))?;
        let mut by_office: BTreeMap<String, BTreeMap<String, u32>> = BTreeMap::new();
        for row in rows {
            let office = row.get("office").cloned().unwrap_or_default();
            let postal = row.get("state_postal").cloned().unwrap_or_default();
            if office.is_empty() || postal.is_empty() {
                continue;
            }
            let seats_raw = row.get("seats").cloned().unwrap_or_default();
            let seats: u32 = seats_raw.parse().with_context(|| {
                format!("seat count for {office}/{postal} is not a number: '{seats_raw}'")
            })?;
            by_office.entry(office).or_default().insert(postal, seats);
        }
        Ok(Self { by_office })
    }

    pub fn offices(&self) -> Vec<&str> {
        self.by_office.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.by_office.is_empty()
    }

    /// Seat count for one (office, state). Undefined combinations are a
    /// configuration error.
    pub fn seats_for(&self, office: &str, state_postal: &str) -> Result<u32> {
        let Some(per_state) = self.by_office.get(office) else {
            bail!("no seat counts defined for office '{office}'");
        };
        match per_state.get(state_postal) {
            Some(seats) => Ok(*seats),
            None => bail!("no seat count defined for office '{office}' in state '{state_postal}'"),
        }
    }

    /// Valid district labels for one (office, state): `{"0"}` for a single
    /// seat, else the string integers `1..=n`.
    pub fn valid_districts(&self, office: &str, state_postal: &str) -> Result<Vec<String>> {
        let seats = self.seats_for(office, state_postal)?;
        if seats == 1 {
            return Ok(vec!["0".to_string()]);
        }
        Ok((1..=seats).map(|n| n.to_string()).collect())
    }
}
