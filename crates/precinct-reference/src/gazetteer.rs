//! State and county gazetteers.
//!
//! The state gazetteer carries the four identifier columns every precinct
//! row repeats (name, postal, FIPS, ICPSR). The county gazetteer is the
//! Census national file, tab-delimited, with `USPS`/`GEOID`/`NAME` headers
//! renamed at load. Identifier values stay as trimmed strings; the checks
//! decide how to compare them.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::csv::{read_csv_rows, read_rows};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateEntry {
    pub state: String,
    pub state_postal: String,
    pub state_fips: String,
    pub state_icpsr: String,
}

#[derive(Debug, Clone, Default)]
pub struct StateGazetteer {
    entries: Vec<StateEntry>,
}

impl StateGazetteer {
    pub fn load(path: &Path) -> Result<Self> {
        let rows = read_csv_rows(path)
            .with_context(|| format!("load state gazetteer: {}", path.display()))?;
        let mut entries = Vec::new();
        for row in rows {
            let state = row.get("state").cloned().unwrap_or_default();
            if state.is_empty() {
                continue;
            }
            entries.push(StateEntry {
                state,
                state_postal: row.get("state_postal").cloned().unwrap_or_default(),
                state_fips: row.get("state_fips").cloned().unwrap_or_default(),
                state_icpsr: row.get("state_icpsr").cloned().unwrap_or_default(),
            });
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[StateEntry] {
        &self.entries
    }

    /// Restrict to the given postal codes, for single-state check runs.
    pub fn scoped(&self, postals: &[String]) -> Self {
        let entries = self
            .entries
            .iter()
            .filter(|e| postals.contains(&e.state_postal))
            .cloned()
            .collect();
        Self { entries }
    }

    pub fn names(&self) -> BTreeSet<&str> {
        self.entries.iter().map(|e| e.state.as_str()).collect()
    }

    pub fn postals(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .map(|e| e.state_postal.as_str())
            .collect()
    }

    pub fn fips(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .map(|e| e.state_fips.as_str())
            .collect()
    }

    pub fn icpsr(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .map(|e| e.state_icpsr.as_str())
            .collect()
    }

    pub fn postal_for_name(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.state == name)
            .map(|e| e.state_postal.as_str())
    }

    pub fn name_for_postal(&self, postal: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.state_postal == postal)
            .map(|e| e.state.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountyEntry {
    pub state_postal: String,
    pub county_fips: String,
    pub county_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct CountyGazetteer {
    entries: Vec<CountyEntry>,
}

impl CountyGazetteer {
    /// Load the national Census gazetteer. The file is tab-delimited and may
    /// be in a legacy encoding; `GEOID` stays a string to preserve leading
    /// zeros.
    pub fn load(path: &Path) -> Result<Self> {
        let rows = read_rows(path, b'\t')
            .with_context(|| format!("load county gazetteer: {}", path.display()))?;
        let mut entries = Vec::new();
        for row in rows {
            let county_name = row.get("NAME").cloned().unwrap_or_default();
            if county_name.is_empty() {
                continue;
            }
            entries.push(CountyEntry {
                state_postal: row.get("USPS").cloned().unwrap_or_default(),
                county_fips: row.get("GEOID").cloned().unwrap_or_default(),
                county_name,
            });
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CountyEntry] {
        &self.entries
    }

    /// Restrict to counties of the given states.
    pub fn scoped(&self, postals: &[String]) -> Self {
        let entries = self
            .entries
            .iter()
            .filter(|e| postals.contains(&e.state_postal))
            .cloned()
            .collect();
        Self { entries }
    }

    pub fn fips(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .map(|e| e.county_fips.as_str())
            .collect()
    }

    pub fn names(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .map(|e| e.county_name.as_str())
            .collect()
    }
}
