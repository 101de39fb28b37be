//! Dataset and variable metadata loading.
//!
//! A dataset file may name common files it inherits from; inherited keys fill
//! in only where the dataset file is silent, resolved with the explicit
//! layered merge from the model crate.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use precinct_model::{DatasetMetadata, VariableMetadata, merge_metadata};

use crate::paths::ReferencePaths;

fn read_json_map(path: &Path) -> Result<Map<String, Value>> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse: {}", path.display()))
}

/// Load metadata for one dataset release, resolving inheritance.
pub fn load_dataset_metadata(
    paths: &ReferencePaths,
    year: i64,
    dataverse: &str,
) -> Result<DatasetMetadata> {
    let path = paths.dataset_metadata_json(year, dataverse);
    let mut fields = read_json_map(&path)?;
    let inherits = DatasetMetadata::new(fields.clone()).inherits();
    for inherited in inherits {
        let common_path = paths.common_metadata_dir().join(&inherited);
        let base = read_json_map(&common_path)
            .with_context(|| format!("inherited metadata: {inherited}"))?;
        fields = merge_metadata(&base, &fields);
    }
    Ok(DatasetMetadata::new(fields))
}

/// Load the shared variable definitions for all returns datasets.
pub fn load_variable_metadata(paths: &ReferencePaths) -> Result<Vec<VariableMetadata>> {
    let path = paths.variables_json();
    let text =
        std::fs::read_to_string(&path).with_context(|| format!("read: {}", path.display()))?;
    let variables: Vec<VariableMetadata> =
        serde_json::from_str(&text).with_context(|| format!("parse: {}", path.display()))?;
    Ok(variables)
}
