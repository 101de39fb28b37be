//! File naming conventions for per-state source data.

use std::path::{Path, PathBuf};

/// Path to one state's final returns file:
/// `<data_root>/<POSTAL>/final/<year>-<postal>-precinct.csv`.
pub fn state_csv_path(data_root: &Path, year: i64, state_postal: &str) -> PathBuf {
    data_root
        .join(state_postal.to_uppercase())
        .join("final")
        .join(format!(
            "{year}-{}-precinct.csv",
            state_postal.to_lowercase()
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_the_final_csv_convention() {
        let path = state_csv_path(Path::new("/data"), 2016, "vt");
        assert_eq!(
            path,
            PathBuf::from("/data/VT/final/2016-vt-precinct.csv")
        );
    }
}
