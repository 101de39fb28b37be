//! Release-time gates and stamps.

use std::collections::BTreeSet;

use chrono::Local;

use precinct_model::{PrecinctError, VariableMetadata};

/// The hard documentation gate: a partition's columns must exactly match the
/// documented variable names. Shipping an undocumented variable, or
/// documenting one the data no longer carries, blocks the release.
pub fn check_documentation(
    dataverse: &str,
    columns: &[String],
    variables: &[VariableMetadata],
) -> Result<(), PrecinctError> {
    let data: BTreeSet<&str> = columns.iter().map(String::as_str).collect();
    let documented: BTreeSet<&str> = variables.iter().map(|v| v.name.as_str()).collect();
    let not_in_docs: Vec<&str> = data.difference(&documented).copied().collect();
    let not_in_data: Vec<&str> = documented.difference(&data).copied().collect();
    if not_in_docs.is_empty() && not_in_data.is_empty() {
        return Ok(());
    }
    let mut detail = String::new();
    if !not_in_docs.is_empty() {
        detail.push_str(&format!(
            "undocumented variables in data: {}. ",
            not_in_docs.join(", ")
        ));
    }
    if !not_in_data.is_empty() {
        detail.push_str(&format!(
            "documented variables missing from data: {}.",
            not_in_data.join(", ")
        ));
    }
    Err(PrecinctError::Documentation {
        dataverse: dataverse.to_string(),
        detail: detail.trim_end().to_string(),
    })
}

/// Release version stamp: today's date in ISO form.
pub fn release_version() -> String {
    Local::now().date_naive().to_string()
}
