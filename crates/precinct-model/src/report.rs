use serde::{Deserialize, Serialize};
use std::fmt;

/// A single validation finding.
///
/// Findings are advisory: they describe discrepancies for a human reviewer
/// and never halt the pipeline. Fatal conditions (schema coercion failures,
/// the release documentation gate) are errors, not findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Name of the check that produced this finding (e.g. "district").
    pub check: String,
    /// Column the finding concerns, if any.
    pub column: Option<String>,
    /// Human-readable description of the discrepancy.
    pub message: String,
    /// Offending values, when enumerable.
    pub values: Vec<String>,
    /// Occurrence count, when the finding is a tally rather than a value list.
    pub count: Option<u64>,
}

impl Finding {
    pub fn new(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            column: None,
            message: message.into(),
            values: Vec::new(),
            count: None,
        }
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn with_values(mut self, values: Vec<String>) -> Self {
        self.values = values;
        self
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.check)?;
        if let Some(column) = &self.column {
            write!(f, " {column}:")?;
        }
        write!(f, " {}", self.message)?;
        if let Some(count) = self.count {
            write!(f, " (n={count})")?;
        }
        if !self.values.is_empty() {
            write!(f, ": {}", self.values.join(", "))?;
        }
        Ok(())
    }
}

/// Ordered collection of findings for one validation target (a state during
/// collection, or a dataverse at release time).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// What was validated (state postal code or dataverse short name).
    pub target: String,
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            findings: Vec::new(),
        }
    }

    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn extend(&mut self, findings: Vec<Finding>) {
        self.findings.extend(findings);
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Findings produced by one named check, in insertion order.
    pub fn for_check(&self, check: &str) -> Vec<&Finding> {
        self.findings.iter().filter(|f| f.check == check).collect()
    }

    /// Plain-text rendering for review files: one finding per line, grouped
    /// under the target heading.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("checks: {}\n", self.target));
        if self.findings.is_empty() {
            out.push_str("no findings\n");
            return out;
        }
        for finding in &self.findings {
            out.push_str(&format!("{finding}\n"));
        }
        out
    }
}
