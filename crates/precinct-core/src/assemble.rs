//! Combining per-state tables into the canonical combined dataset.

use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::info;

use precinct_ingest::empty_precinct_frame;
use precinct_model::schema::{SORT_COLUMNS, column_names};

/// Concatenate state tables into the combined dataset.
///
/// Every table is projected onto the canonical column list first: columns
/// outside the layout are dropped silently, a missing canonical column is
/// fatal. Rows are kept as-is (no deduplication) and sorted by the fixed
/// release key. The sort is stable, so rows that tie on the full key keep
/// their within-state input order and re-running assembly on a shuffled
/// state ordering yields identical output.
pub fn assemble(tables: &[DataFrame]) -> Result<DataFrame> {
    let mut combined = empty_precinct_frame();
    for table in tables {
        let projected = table
            .select(column_names())
            .context("project state table onto the canonical columns")?;
        combined
            .vstack_mut(&projected)
            .context("concatenate state tables")?;
    }
    let sorted = combined
        .sort(
            SORT_COLUMNS.to_vec(),
            SortMultipleOptions::default().with_maintain_order(true),
        )
        .context("sort the combined dataset")?;
    info!(rows = sorted.height(), "assembled combined dataset");
    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use precinct_common::any_to_string;

    fn state_frame(state: &str, precincts: &[&str], dataverse: &str) -> DataFrame {
        let mut columns = Vec::new();
        for column in precinct_model::schema::PRECINCT_COLUMNS {
            let n = precincts.len();
            let series: Series = match column.name {
                "year" => Series::new("year".into(), vec![2016i64; n]),
                "state" => Series::new("state".into(), vec![state; n]),
                "state_postal" => Series::new("state_postal".into(), vec![&state[..2]; n]),
                "precinct" => Series::new("precinct".into(), precincts.to_vec()),
                "dataverse" => Series::new("dataverse".into(), vec![dataverse; n]),
                "votes" => Series::new("votes".into(), vec![10i64; n]),
                name => {
                    use precinct_model::schema::ColumnType;
                    match column.column_type {
                        ColumnType::Int => Series::new(name.into(), vec![1i64; n]),
                        ColumnType::Float => Series::new(name.into(), vec![Some(1.0f64); n]),
                        ColumnType::Bool => Series::new(name.into(), vec![false; n]),
                        ColumnType::Str => Series::new(name.into(), vec!["x"; n]),
                    }
                }
            };
            columns.push(series.into_column());
        }
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn concatenates_and_sorts_by_release_key() {
        let vt = state_frame("Vermont", &["Burlington 1"], "president");
        let me = state_frame("Maine", &["Portland 2", "Portland 1"], "president");
        let combined = assemble(&[vt, me]).unwrap();
        assert_eq!(combined.height(), 3);
        let states: Vec<String> = (0..3)
            .map(|i| any_to_string(combined.column("state").unwrap().get(i).unwrap()))
            .collect();
        assert_eq!(states, vec!["Maine", "Maine", "Vermont"]);
        let precincts: Vec<String> = (0..3)
            .map(|i| any_to_string(combined.column("precinct").unwrap().get(i).unwrap()))
            .collect();
        assert_eq!(precincts, vec!["Portland 1", "Portland 2", "Burlington 1"]);
    }

    #[test]
    fn shuffled_input_order_yields_identical_output() {
        let vt = state_frame("Vermont", &["A", "B"], "senate");
        let me = state_frame("Maine", &["C"], "house");
        let forward = assemble(&[vt.clone(), me.clone()]).unwrap();
        let backward = assemble(&[me, vt]).unwrap();
        assert!(forward.equals_missing(&backward));
    }

    #[test]
    fn extra_columns_are_dropped_silently() {
        let mut frame = state_frame("Vermont", &["A"], "local");
        frame
            .with_column(Series::new("scratch_note".into(), vec!["tmp"]))
            .unwrap();
        let combined = assemble(&[frame]).unwrap();
        assert!(combined.column("scratch_note").is_err());
        assert_eq!(combined.width(), precinct_model::schema::column_names().len());
    }

    #[test]
    fn missing_canonical_column_is_fatal() {
        let frame = state_frame("Vermont", &["A"], "local");
        let frame = frame.drop("votes").unwrap();
        assert!(assemble(&[frame]).is_err());
    }

    #[test]
    fn empty_input_yields_typed_empty_dataset() {
        let combined = assemble(&[]).unwrap();
        assert_eq!(combined.height(), 0);
        assert_eq!(combined.width(), precinct_model::schema::column_names().len());
    }
}
