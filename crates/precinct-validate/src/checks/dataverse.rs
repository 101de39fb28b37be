//! Partition-tag domain check.

use polars::prelude::DataFrame;

use precinct_model::{Finding, is_valid_tag};

use crate::util::distinct_values_with_missing;

pub fn check(df: &DataFrame) -> Vec<Finding> {
    let Some(observed) = distinct_values_with_missing(df, "dataverse") else {
        return Vec::new();
    };
    let unexpected: Vec<String> = observed
        .into_iter()
        .filter(|tag| !is_valid_tag(tag))
        .collect();
    if unexpected.is_empty() {
        return Vec::new();
    }
    vec![
        Finding::new("dataverse", "unexpected dataverse tags")
            .with_column("dataverse")
            .with_values(unexpected),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;

    #[test]
    fn known_tags_pass() {
        let df = df!("dataverse" => ["president", "all", "local"]).unwrap();
        assert!(check(&df).is_empty());
    }

    #[test]
    fn stray_and_missing_tags_are_reported() {
        let df = df!("dataverse" => [Some("federal"), Some("senate"), None]).unwrap();
        let findings = check(&df);
        assert_eq!(findings[0].values, vec!["NA", "federal"]);
    }
}
