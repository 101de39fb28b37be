//! Candidate-name normalization applied to both sides of the join.
//!
//! The constituency tables write names as `Last, First M.` while precinct
//! files carry `First Last`; the transforms below fold both into one key.
//! The transform order is fixed: reorder before stripping the initial, case
//! last so every literal strip sees the original casing.

use std::sync::LazyLock;

use regex::Regex;

static LAST_FIRST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^,]+), ([^,]+)").expect("last-first pattern"));
static MIDDLE_INITIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" [A-Z]\. ").expect("middle-initial pattern"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Literal substrings to strip, accumulated from past reconciliation runs.
const LITERAL_STRIPS: &[(&str, &str)] = &[("Estella ", ""), ("Roque \"Rocky\"", "Rocky")];

/// Fold a candidate name into its comparison key.
pub fn normalize_candidate(name: &str) -> String {
    let name = name.trim();
    let name = LAST_FIRST.replace(name, "$2 $1");
    let name = MIDDLE_INITIAL.replace_all(&name, " ");
    let mut name = name.into_owned();
    for (literal, replacement) in LITERAL_STRIPS {
        name = name.replace(literal, replacement);
    }
    let name = name.to_lowercase();
    WHITESPACE.replace_all(name.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorders_last_first() {
        assert_eq!(normalize_candidate("Doe, Jane"), "jane doe");
    }

    #[test]
    fn collapses_a_middle_initial() {
        assert_eq!(normalize_candidate("Jane M. Doe"), "jane doe");
    }

    #[test]
    fn reorder_happens_before_initial_collapse() {
        // The initial sits mid-name only after the reorder puts it there.
        assert_eq!(normalize_candidate("Doe, Jane M."), "jane doe");
    }

    #[test]
    fn strips_known_literals() {
        assert_eq!(
            normalize_candidate("Roque \"Rocky\" De La Fuente"),
            "rocky de la fuente"
        );
        assert_eq!(normalize_candidate("Estella Maria Diaz"), "maria diaz");
    }

    #[test]
    fn collapses_runs_of_whitespace() {
        assert_eq!(normalize_candidate("  Jane   Doe "), "jane doe");
    }

    #[test]
    fn both_spellings_from_the_totals_comparison_agree() {
        assert_eq!(
            normalize_candidate("Doe, Jane M."),
            normalize_candidate("Jane M. Doe")
        );
        assert_eq!(normalize_candidate("Jane Doe"), "jane doe");
    }
}
