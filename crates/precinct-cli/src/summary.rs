//! Console rendering of check and release results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use precinct_core::frequencies::FrequencyRow;
use precinct_model::ValidationReport;
use precinct_reconcile::ReconciliationReport;

use crate::pipeline::{CheckOutcome, ReleaseOutcome};

/// Categorical columns worth eyeballing after a check run. Vote counts and
/// free-text identifiers are excluded; their frequency tables are noise.
const EYEBALL_COLUMNS: [&str; 5] = ["mode", "special", "writein", "office", "dataverse"];

pub fn print_check_summary(outcome: &CheckOutcome) {
    print_report(&outcome.report);
    print_frequencies(&outcome.frequencies);
    for reconciliation in &outcome.reconciliations {
        print_reconciliation(reconciliation);
    }
}

pub fn print_report(report: &ValidationReport) {
    println!("Checks: {}", report.target);
    if report.is_clean() {
        println!("No findings.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Check"),
        header_cell("Column"),
        header_cell("Message"),
        header_cell("Count"),
        header_cell("Values"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for finding in &report.findings {
        table.add_row(vec![
            Cell::new(&finding.check).fg(Color::Yellow),
            match &finding.column {
                Some(column) => Cell::new(column),
                None => dim_cell("-"),
            },
            Cell::new(&finding.message),
            match finding.count {
                Some(count) => Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold),
                None => dim_cell("-"),
            },
            value_cell(&finding.values),
        ]);
    }
    println!("{table}");
    println!("{} finding(s).", report.len());
}

pub fn print_frequencies(rows: &[FrequencyRow]) {
    let eyeball: Vec<&FrequencyRow> = rows
        .iter()
        .filter(|row| EYEBALL_COLUMNS.contains(&row.variable.as_str()))
        .collect();
    if eyeball.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Variable"),
        header_cell("Value"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in eyeball {
        let value_cell = if row.value.is_empty() {
            dim_cell("(missing)")
        } else {
            Cell::new(&row.value)
        };
        table.add_row(vec![Cell::new(&row.variable), value_cell, Cell::new(row.count)]);
    }
    println!();
    println!("Frequencies:");
    println!("{table}");
}

pub fn print_reconciliation(report: &ReconciliationReport) {
    println!();
    println!("Reconciliation: {}", report.office);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("State"),
        header_cell("Candidate"),
        header_cell("Precinct"),
        header_cell("Reference"),
        header_cell("Diff"),
    ]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for row in &report.rows {
        let state_cell = if row.state.is_empty() {
            Cell::new("TOTAL").fg(Color::Cyan).add_attribute(Attribute::Bold)
        } else {
            Cell::new(&row.state)
        };
        table.add_row(vec![
            state_cell,
            Cell::new(&row.candidate),
            votes_cell(row.precinct_votes),
            votes_cell(row.reference_votes),
            diff_cell(row.votes_diff),
        ]);
    }
    println!("{table}");
    let unmatched = report.unmatched().len();
    if unmatched > 0 {
        println!("{unmatched} row(s) matched on one side only.");
    }
}

pub fn print_release_summary(outcome: &ReleaseOutcome) {
    println!("Release version: {}", outcome.version);
    println!(
        "States: {} | Combined rows: {}",
        outcome.postals.len(),
        outcome.combined_rows
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataverse"),
        header_cell("Rows"),
        header_cell("Findings"),
        header_cell("Report"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total_rows = 0usize;
    let mut total_findings = 0usize;
    for release in &outcome.releases {
        total_rows += release.rows;
        total_findings += release.report.len();
        table.add_row(vec![
            Cell::new(release.dataverse.as_str()).fg(Color::Yellow),
            Cell::new(release.rows),
            finding_count_cell(release.report.len()),
            Cell::new(release.report_path.display()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL").fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        finding_count_cell(total_findings).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
    if !outcome.combined_report.is_clean() {
        println!();
        println!("Combined dataset:");
        print_report(&outcome.combined_report);
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::Cyan).add_attribute(Attribute::Bold)
}

fn dim_cell(text: impl ToString) -> Cell {
    Cell::new(text.to_string()).add_attribute(Attribute::Dim)
}

fn value_cell(values: &[String]) -> Cell {
    if values.is_empty() {
        return dim_cell("-");
    }
    // Cap the listing; the full set lives in the written report.
    const MAX_SHOWN: usize = 8;
    if values.len() > MAX_SHOWN {
        Cell::new(format!(
            "{}, … ({} total)",
            values[..MAX_SHOWN].join(", "),
            values.len()
        ))
    } else {
        Cell::new(values.join(", "))
    }
}

fn votes_cell(votes: Option<i64>) -> Cell {
    match votes {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn diff_cell(diff: Option<i64>) -> Cell {
    match diff {
        Some(0) => dim_cell(0),
        Some(value) => Cell::new(value).fg(Color::Red).add_attribute(Attribute::Bold),
        None => Cell::new("unmatched").fg(Color::Yellow),
    }
}

fn finding_count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count).fg(Color::Green)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_wide_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
