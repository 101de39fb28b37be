//! Row-map CSV reading for reference tables.
//!
//! Reference tables are small, so each loader reads the whole file into
//! `BTreeMap` rows keyed by header. Census gazetteer files ship in a legacy
//! encoding, so reads go through a Windows-1252 fallback rather than assuming
//! UTF-8.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

/// Read a file as UTF-8, falling back to Windows-1252 when the bytes do not
/// decode. Legacy gazetteer exports carry accented county names in the old
/// encoding.
pub fn read_file_as_utf8(path: &Path) -> Result<String> {
    let mut file = std::fs::File::open(path).with_context(|| format!("open: {}", path.display()))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .with_context(|| format!("read: {}", path.display()))?;
    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

/// Read a delimited file into one `BTreeMap` per row, keyed by header.
pub fn read_rows(path: &Path, delimiter: u8) -> Result<Vec<BTreeMap<String, String>>> {
    let contents = read_file_as_utf8(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_reader(contents.as_bytes());
    let headers = reader
        .headers()
        .with_context(|| format!("read headers: {}", path.display()))?
        .clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let mut row = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            let key = headers
                .get(idx)
                .unwrap_or("")
                .trim_matches('\u{feff}')
                .trim()
                .to_string();
            row.insert(key, value.trim().to_string());
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Comma-delimited convenience wrapper.
pub fn read_csv_rows(path: &Path) -> Result<Vec<BTreeMap<String, String>>> {
    read_rows(path, b',')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn reads_rows_keyed_by_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("states.csv");
        std::fs::write(&path, "state,state_postal\nVermont,VT\nMaine,ME\n").unwrap();
        let rows = read_csv_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["state"], "Vermont");
        assert_eq!(rows[1]["state_postal"], "ME");
    }

    #[test]
    fn strips_byte_order_mark_from_headers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bom.csv");
        std::fs::write(&path, "\u{feff}state,state_postal\nVermont,VT\n").unwrap();
        let rows = read_csv_rows(&path).unwrap();
        assert_eq!(rows[0]["state"], "Vermont");
    }

    #[test]
    fn decodes_windows_1252_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gaz.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        // "Doña Ana" with 0xF1 for ñ, as the Census export encodes it
        file.write_all(b"USPS\tNAME\nNM\tDo\xF1a Ana County\n").unwrap();
        drop(file);
        let rows = read_rows(&path, b'\t').unwrap();
        assert_eq!(rows[0]["NAME"], "Do\u{f1}a Ana County");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = read_csv_rows(&dir.path().join("absent.csv")).unwrap_err();
        assert!(err.to_string().contains("absent.csv"));
    }
}
