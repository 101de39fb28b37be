//! Reference directory path resolution.
//!
//! All reference tables live under one root, resolved once and passed to the
//! loaders as explicit configuration. Nothing in this workspace reads paths
//! from process-wide state.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the reference directory.
pub const REFERENCE_ENV_VAR: &str = "PRECINCT_REFERENCE_DIR";

/// Locations of the reference tables used by validation and reconciliation.
#[derive(Debug, Clone)]
pub struct ReferencePaths {
    root: PathBuf,
}

impl ReferencePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the reference root.
    ///
    /// Resolution order:
    /// 1. `PRECINCT_REFERENCE_DIR` environment variable
    /// 2. `reference/` directory relative to the workspace root
    pub fn resolve() -> Self {
        if let Ok(root) = std::env::var(REFERENCE_ENV_VAR) {
            return Self::new(root);
        }
        Self::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../reference"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// State gazetteer: name, postal, FIPS, and ICPSR codes.
    pub fn states_csv(&self) -> PathBuf {
        self.root.join("gazetteers/states.csv")
    }

    /// National county gazetteer (tab-delimited Census file).
    pub fn county_gazetteer(&self) -> PathBuf {
        self.root.join("gazetteers/2017_Gaz_counties_national.txt")
    }

    /// Seat counts per (office, state).
    pub fn districts_csv(&self) -> PathBuf {
        self.root.join("metadata/districts.csv")
    }

    /// Race calendar: which offices were on the ballot per state and year.
    pub fn races_csv(&self) -> PathBuf {
        self.root.join("metadata/races.csv")
    }

    /// Constituency-level totals for one office family
    /// (`president`, `senate`, or `house`).
    pub fn constituency_csv(&self, family: &str) -> PathBuf {
        self.root
            .join("constituency")
            .join(format!("1976-2016-{family}.csv"))
    }

    /// Release coverage: which states are ready for release.
    pub fn coverage_json(&self) -> PathBuf {
        self.root.join("metadata/dataset/common/precinct-coverage.json")
    }

    /// Metadata for one dataset release.
    pub fn dataset_metadata_json(&self, year: i64, dataverse: &str) -> PathBuf {
        self.root
            .join("metadata/dataset")
            .join(format!("{year}-precinct-{dataverse}.json"))
    }

    /// Directory holding metadata files datasets inherit from.
    pub fn common_metadata_dir(&self) -> PathBuf {
        self.root.join("metadata/dataset/common")
    }

    /// Shared variable definitions for all returns datasets.
    pub fn variables_json(&self) -> PathBuf {
        self.root.join("metadata/variables.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_nest_under_root() {
        let paths = ReferencePaths::new("/tmp/reference");
        assert_eq!(
            paths.states_csv(),
            PathBuf::from("/tmp/reference/gazetteers/states.csv")
        );
        assert_eq!(
            paths.constituency_csv("senate"),
            PathBuf::from("/tmp/reference/constituency/1976-2016-senate.csv")
        );
        assert_eq!(
            paths.dataset_metadata_json(2016, "house"),
            PathBuf::from("/tmp/reference/metadata/dataset/2016-precinct-house.json")
        );
    }
}
