//! Dataset and variable metadata models.
//!
//! Dataset metadata is an open-keyed mapping (title, variables, notes, and
//! whatever else a release carries) resolved from layered files: a dataset
//! file may name common files it inherits from, and inherited keys fill in
//! only where the dataset file is silent. Variable metadata documents the
//! released columns; the release gate checks data columns against it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Documentation for one released variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableMetadata {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Open-keyed metadata for one dataset (one dataverse release).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetMetadata {
    fields: Map<String, Value>,
}

impl DatasetMetadata {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// Files this dataset inherits metadata from, in declaration order.
    pub fn inherits(&self) -> Vec<String> {
        self.string_list("inherits")
    }

    /// Names of the variables that appear in this dataset.
    pub fn variables(&self) -> Vec<String> {
        self.string_list("variables")
    }

    /// Dataset-specific variable notes as (name, note) pairs.
    pub fn variable_notes(&self) -> Vec<(String, String)> {
        let Some(Value::Array(notes)) = self.fields.get("variable_notes") else {
            return Vec::new();
        };
        notes
            .iter()
            .filter_map(|entry| {
                let name = entry.get("name")?.as_str()?;
                let note = entry.get("note")?.as_str()?;
                Some((name.to_string(), note.to_string()))
            })
            .collect()
    }

    fn string_list(&self, key: &str) -> Vec<String> {
        let Some(Value::Array(items)) = self.fields.get(key) else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect()
    }
}

/// Layered metadata resolution: every key of `overlay` wins; `base` fills in
/// only where `overlay` is silent. An explicit two-argument merge, applied
/// once per inherited file.
pub fn merge_metadata(base: &Map<String, Value>, overlay: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, value) in overlay {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Restrict the shared variable definitions to those a dataset declares, then
/// apply the dataset's own variable notes on top.
pub fn documented_variables(
    all_variables: &[VariableMetadata],
    dataset: &DatasetMetadata,
) -> Vec<VariableMetadata> {
    let declared = dataset.variables();
    let notes = dataset.variable_notes();
    let mut variables: Vec<VariableMetadata> = all_variables
        .iter()
        .filter(|var| declared.contains(&var.name))
        .cloned()
        .collect();
    for var in &mut variables {
        if let Some((_, note)) = notes.iter().find(|(name, _)| *name == var.name) {
            var.note = Some(note.clone());
        }
    }
    variables
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn overlay_wins_on_collision() {
        let base = as_map(json!({"title": "common", "license": "CC0"}));
        let overlay = as_map(json!({"title": "senate returns"}));
        let merged = merge_metadata(&base, &overlay);
        assert_eq!(merged["title"], json!("senate returns"));
        assert_eq!(merged["license"], json!("CC0"));
    }

    #[test]
    fn merge_does_not_mutate_inputs() {
        let base = as_map(json!({"a": 1}));
        let overlay = as_map(json!({"a": 2}));
        let merged = merge_metadata(&base, &overlay);
        assert_eq!(base["a"], json!(1));
        assert_eq!(merged["a"], json!(2));
    }

    #[test]
    fn documented_variables_filters_and_annotates() {
        let all = vec![
            VariableMetadata {
                name: "votes".to_string(),
                description: Some("vote count".to_string()),
                note: None,
            },
            VariableMetadata {
                name: "party".to_string(),
                description: None,
                note: None,
            },
            VariableMetadata {
                name: "dataverse".to_string(),
                description: None,
                note: None,
            },
        ];
        let dataset = DatasetMetadata::new(as_map(json!({
            "variables": ["votes", "party"],
            "variable_notes": [{"name": "party", "note": "as reported"}],
        })));
        let documented = documented_variables(&all, &dataset);
        assert_eq!(documented.len(), 2);
        assert_eq!(documented[0].name, "votes");
        assert_eq!(documented[1].note.as_deref(), Some("as reported"));
    }

    #[test]
    fn missing_keys_read_as_empty() {
        let dataset = DatasetMetadata::default();
        assert!(dataset.inherits().is_empty());
        assert!(dataset.variables().is_empty());
        assert!(dataset.variable_notes().is_empty());
    }
}
