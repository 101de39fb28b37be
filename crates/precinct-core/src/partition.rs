//! Per-dataverse subsets of the combined dataset.

use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::debug;

use precinct_model::{ALL_TAG, Dataverse};

/// Derive the release partition for one dataverse.
///
/// Keeps rows tagged with the target dataverse or with the shared `all` tag,
/// then drops the tag column. A row tagged `all` therefore appears verbatim
/// in every partition; overlap between partitions is the intended fan-out of
/// shared rows, not duplication to fix.
pub fn partition(combined: &DataFrame, dataverse: Dataverse) -> Result<DataFrame> {
    let target = dataverse.as_str();
    let tags = combined
        .column("dataverse")
        .context("combined dataset is missing the dataverse tag column")?
        .str()
        .context("dataverse tag column is not a string column")?;
    let keep: Vec<bool> = tags
        .into_iter()
        .map(|tag| matches!(tag, Some(t) if t == target || t == ALL_TAG))
        .collect();
    let mask = BooleanChunked::from_slice("partition".into(), &keep);
    let subset = combined
        .filter(&mask)
        .with_context(|| format!("select rows for dataverse '{target}'"))?;
    let subset = subset
        .drop("dataverse")
        .context("drop the dataverse tag column")?;
    debug!(dataverse = target, rows = subset.height(), "derived partition");
    Ok(subset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combined_fixture() -> DataFrame {
        df!(
            "state" => ["Vermont", "Vermont", "Maine", "Maine"],
            "office" => ["US President", "US Senate", "Governor", "US President"],
            "votes" => [100i64, 200, 300, 400],
            "dataverse" => ["all", "senate", "state", "president"],
        )
        .unwrap()
    }

    #[test]
    fn keeps_target_and_all_rows_and_drops_the_tag() {
        let combined = combined_fixture();
        let senate = partition(&combined, Dataverse::Senate).unwrap();
        assert_eq!(senate.height(), 2);
        assert!(senate.column("dataverse").is_err());
        let offices: Vec<Option<&str>> = senate
            .column("office")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(offices, vec![Some("US President"), Some("US Senate")]);
    }

    #[test]
    fn all_rows_appear_in_every_partition() {
        let combined = combined_fixture();
        for dataverse in precinct_model::RELEASE_DATAVERSES {
            let subset = partition(&combined, *dataverse).unwrap();
            let votes: Vec<Option<i64>> = subset
                .column("votes")
                .unwrap()
                .i64()
                .unwrap()
                .into_iter()
                .collect();
            assert!(votes.contains(&Some(100)), "{dataverse} lost the shared row");
        }
    }

    #[test]
    fn every_partition_row_exists_in_the_combined_dataset() {
        let combined = combined_fixture();
        let subset = partition(&combined, Dataverse::President).unwrap();
        let source = combined.drop("dataverse").unwrap();
        for idx in 0..subset.height() {
            let row: Vec<String> = subset
                .get_columns()
                .iter()
                .map(|col| precinct_common::any_to_string(col.get(idx).unwrap()))
                .collect();
            let mut found = false;
            for src_idx in 0..source.height() {
                let src_row: Vec<String> = source
                    .get_columns()
                    .iter()
                    .map(|col| precinct_common::any_to_string(col.get(src_idx).unwrap()))
                    .collect();
                if src_row == row {
                    found = true;
                    break;
                }
            }
            assert!(found, "partition row {row:?} missing from combined dataset");
        }
    }

    #[test]
    fn partitioning_twice_is_idempotent() {
        let combined = combined_fixture();
        let first = partition(&combined, Dataverse::President).unwrap();
        let second = partition(&combined, Dataverse::President).unwrap();
        assert!(first.equals_missing(&second));
    }
}
