//! Release coverage: which states are ready for release.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CoverageEntry {
    pub included: bool,
    #[serde(default)]
    pub note: Option<String>,
}

/// Coverage table keyed by state name.
#[derive(Debug, Clone, Default)]
pub struct Coverage {
    entries: BTreeMap<String, CoverageEntry>,
}

impl Coverage {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read coverage: {}", path.display()))?;
        let entries: BTreeMap<String, CoverageEntry> = serde_json::from_str(&text)
            .with_context(|| format!("parse coverage: {}", path.display()))?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &BTreeMap<String, CoverageEntry> {
        &self.entries
    }

    /// State names marked ready for release, in name order.
    pub fn included_states(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.included)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn included_states_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("precinct-coverage.json");
        std::fs::write(
            &path,
            r#"{
                "Vermont": {"included": true},
                "Maine": {"included": true, "note": "awaiting town-level fixes"},
                "Texas": {"included": false}
            }"#,
        )
        .unwrap();
        let coverage = Coverage::load(&path).unwrap();
        assert_eq!(coverage.included_states(), vec!["Maine", "Vermont"]);
        assert_eq!(coverage.entries().len(), 3);
    }
}
