//! Race calendar: which offices were on the ballot in which state and year.
//!
//! The office check reports an expected office with zero returns as a
//! coverage gap.

use std::path::Path;

use anyhow::{Context, Result};

use crate::csv::read_csv_rows;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Race {
    pub year: i64,
    pub office: String,
    pub state_postal: String,
}

#[derive(Debug, Clone, Default)]
pub struct RaceCalendar {
    races: Vec<Race>,
}

impl RaceCalendar {
    /// Load from a CSV with `year`, `office`, `state_postal` columns.
    pub fn load(path: &Path) -> Result<Self> {
        let rows = read_csv_rows(path)
            .with_context(|| format!("load race calendar: {}", path.display()))?;
        let mut races = Vec::new();
        for row in rows {
            let office = row.get("office").cloned().unwrap_or_default();
            let state_postal = row.get("state_postal").cloned().unwrap_or_default();
            if office.is_empty() || state_postal.is_empty() {
                continue;
            }
            let year_raw = row.get("year").cloned().unwrap_or_default();
            let year: i64 = year_raw
                .parse()
                .with_context(|| format!("race year is not a number: '{year_raw}'"))?;
            races.push(Race {
                year,
                office,
                state_postal,
            });
        }
        Ok(Self { races })
    }

    pub fn races(&self) -> &[Race] {
        &self.races
    }

    /// Offices expected on the ballot in one state for one year.
    pub fn expected_offices(&self, state_postal: &str, year: i64) -> Vec<&str> {
        self.races
            .iter()
            .filter(|r| r.year == year && r.state_postal == state_postal)
            .map(|r| r.office.as_str())
            .collect()
    }
}
