//! Per-state returns reading.
//!
//! Reads are strict: the canonical layout is applied as a schema overwrite so
//! malformed files fail at the door instead of drifting downstream. Two
//! failure modes are tolerated, matching how collection actually runs:
//!
//! - a state with no file yet reads as an empty typed table, so a partial
//!   assembly can proceed while collection is underway;
//! - a file in a legacy encoding is re-decoded as Windows-1252.
//!
//! A type-coercion failure is fatal. Before propagating it, the reader
//! re-reads just the header so the error names the columns the file actually
//! has.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::*;
use tracing::{debug, error, warn};

use crate::error::{IngestError, Result};
use crate::paths::state_csv_path;
use crate::schema::{empty_precinct_frame, precinct_schema};

/// Read one state's returns for the given year, substituting an empty typed
/// table when the file does not exist yet.
pub fn read_state_table(data_root: &Path, year: i64, state_postal: &str) -> Result<DataFrame> {
    let path = state_csv_path(data_root, year, state_postal);
    if !path.exists() {
        warn!(
            state = state_postal,
            path = %path.display(),
            "no returns file; substituting an empty table"
        );
        return Ok(empty_precinct_frame());
    }
    debug!(state = state_postal, path = %path.display(), "reading returns");
    read_precinct_csv(&path)
}

/// Read a returns file into the canonical typed layout.
pub fn read_precinct_csv(path: &Path) -> Result<DataFrame> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data = decode(bytes, path);

    let typed = CsvReadOptions::default()
        .with_has_header(true)
        .with_schema_overwrite(Some(precinct_schema()))
        .into_reader_with_file_handle(Cursor::new(data.clone()))
        .finish();

    match typed {
        Ok(df) => Ok(df),
        Err(source) => match read_header_columns(data) {
            Ok(columns) => {
                error!(
                    path = %path.display(),
                    columns = columns.join(", "),
                    "typed read failed"
                );
                Err(IngestError::Coerce {
                    path: path.to_path_buf(),
                    columns,
                    source,
                })
            }
            Err(_) => Err(IngestError::Read {
                path: path.to_path_buf(),
                source,
            }),
        },
    }
}

/// Decode file bytes as UTF-8, falling back to Windows-1252. Some state
/// offices still export returns in the legacy encoding.
fn decode(bytes: Vec<u8>, path: &Path) -> Vec<u8> {
    match String::from_utf8(bytes) {
        Ok(s) => s.into_bytes(),
        Err(e) => {
            warn!(path = %path.display(), "not valid UTF-8; re-decoding as windows-1252");
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            decoded.into_owned().into_bytes()
        }
    }
}

/// Header-only re-read, used to surface the file's actual columns when the
/// typed read fails.
fn read_header_columns(data: Vec<u8>) -> PolarsResult<Vec<String>> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_n_rows(Some(0))
        .into_reader_with_file_handle(Cursor::new(data))
        .finish()?;
    Ok(df
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use precinct_model::schema::column_names;
    use tempfile::TempDir;

    fn fixture_value(column: &str) -> &'static str {
        match column {
            "year" => "2016",
            "stage" => "gen",
            "special" => "false",
            "state" => "Vermont",
            "state_postal" => "VT",
            "state_fips" => "50",
            "state_icpsr" => "6",
            "county_name" => "Addison County",
            "county_fips" => "50001",
            "county_ansi" => "50001",
            "county_lat" => "44.03",
            "county_long" => "-73.14",
            "jurisdiction" => "Addison",
            "precinct" => "Addison 1",
            "candidate" => "Jane Doe",
            "office" => "US President",
            "district" => "statewide",
            "writein" => "false",
            "party" => "democratic",
            "mode" => "election day",
            "votes" => "100",
            "dataverse" => "president",
            _ => "",
        }
    }

    fn fixture_csv(overrides: &[(&str, &str)]) -> String {
        let names = column_names();
        let header = names.join(",");
        let row: Vec<&str> = names
            .iter()
            .map(|name| {
                overrides
                    .iter()
                    .find(|(col, _)| col == name)
                    .map(|(_, value)| *value)
                    .unwrap_or_else(|| fixture_value(name))
            })
            .collect();
        format!("{header}\n{}\n", row.join(","))
    }

    #[test]
    fn reads_typed_columns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("2016-vt-precinct.csv");
        std::fs::write(&path, fixture_csv(&[])).unwrap();
        let df = read_precinct_csv(&path).unwrap();
        assert_eq!(df.height(), 1);
        assert_eq!(df.column("votes").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("writein").unwrap().dtype(), &DataType::Boolean);
        assert_eq!(
            df.column("county_ansi").unwrap().dtype(),
            &DataType::Float64
        );
    }

    #[test]
    fn gappy_identifiers_read_as_null() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gaps.csv");
        std::fs::write(
            &path,
            fixture_csv(&[("county_ansi", ""), ("county_lat", ""), ("county_long", "")]),
        )
        .unwrap();
        let df = read_precinct_csv(&path).unwrap();
        assert_eq!(df.column("county_ansi").unwrap().null_count(), 1);
        assert_eq!(df.column("county_lat").unwrap().null_count(), 1);
    }

    #[test]
    fn missing_file_substitutes_empty_table() {
        let dir = TempDir::new().unwrap();
        let df = read_state_table(dir.path(), 2016, "VT").unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), column_names().len());
        assert_eq!(df.column("votes").unwrap().dtype(), &DataType::Int64);
    }

    #[test]
    fn resolves_the_state_path_convention() {
        let dir = TempDir::new().unwrap();
        let final_dir = dir.path().join("VT/final");
        std::fs::create_dir_all(&final_dir).unwrap();
        std::fs::write(final_dir.join("2016-vt-precinct.csv"), fixture_csv(&[])).unwrap();
        let df = read_state_table(dir.path(), 2016, "vt").unwrap();
        assert_eq!(df.height(), 1);
    }

    #[test]
    fn coercion_failure_names_file_columns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad-votes.csv");
        std::fs::write(&path, fixture_csv(&[("votes", "one hundred")])).unwrap();
        let err = read_precinct_csv(&path).unwrap_err();
        match &err {
            IngestError::Coerce { columns, .. } => {
                assert!(columns.contains(&"votes".to_string()));
                assert!(columns.contains(&"dataverse".to_string()));
            }
            other => panic!("expected coerce error, got {other}"),
        }
        assert!(err.to_string().contains("votes"));
    }

    #[test]
    fn legacy_encoding_is_re_decoded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin.csv");
        let contents = fixture_csv(&[("candidate", "JoseMARKER")]);
        let mut bytes = contents.into_bytes();
        // Patch the candidate to "José" with 0xE9, the Windows-1252 é
        let marker = bytes
            .windows(10)
            .position(|w| w == b"JoseMARKER")
            .expect("fixture contains candidate");
        bytes.splice(marker..marker + 10, b"Jos\xE9".iter().copied());
        std::fs::write(&path, &bytes).unwrap();

        let df = read_precinct_csv(&path).unwrap();
        assert_eq!(
            df.column("candidate").unwrap().str().unwrap().get(0),
            Some("Jos\u{e9}")
        );
    }
}
