//! The release pipeline, stage by stage.
//!
//! Stages run in order: read per-state tables, assemble the combined
//! dataset, derive each dataverse partition, pass the documentation gate,
//! run the check battery, and reconcile aggregates. The gate is the one
//! release-blocking step; everything the battery and reconciliation find
//! is written out for review and never halts the run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, warn};

use precinct_core::{assemble, check_documentation, frequencies, frequencies_csv, partition, release_version};
use precinct_core::frequencies::FrequencyRow;
use precinct_ingest::read_state_table;
use precinct_model::{
    Dataverse, RELEASE_DATAVERSES, ValidationReport, VariableMetadata, documented_variables,
};
use precinct_reconcile::{ReconciliationReport, reconcile};
use precinct_reference::{
    Coverage, CountyGazetteer, RaceCalendar, ReferencePaths, SeatCounts, StateGazetteer,
    load_constituency_totals, load_dataset_metadata, load_variable_metadata,
};
use precinct_validate::Validator;

/// Explicit run configuration; nothing here is process-wide state.
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    pub data_root: PathBuf,
    pub reference: ReferencePaths,
    pub year: i64,
}

/// All reference tables, loaded once per run.
pub struct Reference {
    pub states: StateGazetteer,
    pub counties: CountyGazetteer,
    pub seats: SeatCounts,
    pub races: RaceCalendar,
    pub variables: Vec<VariableMetadata>,
    pub coverage: Coverage,
}

pub fn load_reference(paths: &ReferencePaths) -> Result<Reference> {
    Ok(Reference {
        states: StateGazetteer::load(&paths.states_csv()).context("state gazetteer")?,
        counties: CountyGazetteer::load(&paths.county_gazetteer()).context("county gazetteer")?,
        seats: SeatCounts::load(&paths.districts_csv()).context("seat counts")?,
        races: RaceCalendar::load(&paths.races_csv()).context("race calendar")?,
        variables: load_variable_metadata(paths).context("variable metadata")?,
        coverage: Coverage::load(&paths.coverage_json()).context("coverage")?,
    })
}

/// Postal codes of the states marked ready for release.
pub fn covered_postals(reference: &Reference) -> Vec<String> {
    reference
        .coverage
        .included_states()
        .iter()
        .filter_map(|name| reference.states.postal_for_name(name))
        .map(str::to_string)
        .collect()
}

/// Read one table per state, substituting empty tables for absent files.
pub fn read_states(config: &ReleaseConfig, postals: &[String]) -> Result<Vec<DataFrame>> {
    let mut tables = Vec::with_capacity(postals.len());
    for postal in postals {
        let table = read_state_table(&config.data_root, config.year, postal)
            .with_context(|| format!("read returns for {postal}"))?;
        tables.push(table);
    }
    Ok(tables)
}

/// Expected columns during collection: the documented variables plus the
/// `dataverse` tag, which state files carry but releases drop.
fn collection_columns(variables: &[VariableMetadata]) -> Vec<String> {
    let mut columns: Vec<String> = variables.iter().map(|v| v.name.clone()).collect();
    if !columns.iter().any(|name| name == "dataverse") {
        columns.push("dataverse".to_string());
    }
    columns
}

/// Outcome of a mid-collection `check` run over one or more states.
pub struct CheckOutcome {
    pub report: ValidationReport,
    pub frequencies: Vec<FrequencyRow>,
    pub reconciliations: Vec<ReconciliationReport>,
}

/// Validate the given states' files as assembled, without releasing.
pub fn check_states(
    config: &ReleaseConfig,
    reference: &Reference,
    postals: &[String],
    list_values: bool,
) -> Result<CheckOutcome> {
    let tables = read_states(config, postals)?;
    let combined = assemble(&tables)?;

    let validator = Validator::new(config.year)
        .with_expected_columns(collection_columns(&reference.variables))
        .with_state_gazetteer(&reference.states)
        .with_county_gazetteer(&reference.counties)
        .with_seat_counts(&reference.seats)
        .with_race_calendar(&reference.races)
        .with_scope(postals.to_vec())
        .with_value_listings(list_values);
    let report = validator.run(&postals.join(","), &combined)?;

    let frequencies = frequencies(&combined)?;
    let reconciliations = reconcile_families(config, &combined)?;

    Ok(CheckOutcome {
        report,
        frequencies,
        reconciliations,
    })
}

/// Reconcile the three federal office families against their constituency
/// totals. A missing totals file is logged and skipped; reconciliation is
/// advisory and a partial reference set should not block a check run.
fn reconcile_families(
    config: &ReleaseConfig,
    combined: &DataFrame,
) -> Result<Vec<ReconciliationReport>> {
    let mut reports = Vec::new();
    for family in [Dataverse::President, Dataverse::Senate, Dataverse::House] {
        let path = config.reference.constituency_csv(family.as_str());
        if !path.exists() {
            warn!(
                family = family.as_str(),
                path = %path.display(),
                "no constituency totals; skipping reconciliation"
            );
            continue;
        }
        let totals = load_constituency_totals(&path)?;
        reports.push(reconcile(combined, &totals, family, config.year)?);
    }
    Ok(reports)
}

/// One dataverse's release outputs.
#[derive(Debug)]
pub struct DataverseRelease {
    pub dataverse: Dataverse,
    pub rows: usize,
    pub report: ValidationReport,
    pub report_path: PathBuf,
}

/// Outcome of a full release run.
#[derive(Debug)]
pub struct ReleaseOutcome {
    pub version: String,
    pub postals: Vec<String>,
    pub combined_rows: usize,
    /// Battery run over the combined dataset, tag column included.
    pub combined_report: ValidationReport,
    pub releases: Vec<DataverseRelease>,
}

/// Assemble the covered states and validate every dataverse release.
///
/// Fails on the documentation gate or on missing seat-count configuration;
/// collects everything else into per-dataverse reports under `output_dir`.
/// The race-calendar office check runs against the combined dataset only;
/// a partition deliberately excludes other topics' offices.
pub fn run_release(
    config: &ReleaseConfig,
    reference: &Reference,
    output_dir: &Path,
) -> Result<ReleaseOutcome> {
    let postals = covered_postals(reference);
    info!(states = postals.len(), "assembling covered states");
    let tables = read_states(config, &postals)?;
    let combined = assemble(&tables)?;

    let combined_validator = Validator::new(config.year)
        .with_expected_columns(collection_columns(&reference.variables))
        .with_state_gazetteer(&reference.states)
        .with_county_gazetteer(&reference.counties)
        .with_seat_counts(&reference.seats)
        .with_race_calendar(&reference.races)
        .with_scope(postals.clone())
        .with_national(true);
    let combined_report = combined_validator.run("combined", &combined)?;
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory: {}", output_dir.display()))?;
    std::fs::write(output_dir.join("checks.txt"), combined_report.to_text())
        .context("write combined findings")?;

    let mut releases = Vec::new();
    for dataverse in RELEASE_DATAVERSES {
        let subset = partition(&combined, *dataverse)?;
        let metadata = load_dataset_metadata(&config.reference, config.year, dataverse.as_str())
            .with_context(|| format!("dataset metadata for {dataverse}"))?;
        let documented = documented_variables(&reference.variables, &metadata);
        let columns: Vec<String> = subset
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();
        check_documentation(dataverse.as_str(), &columns, &documented)?;

        let validator = Validator::new(config.year)
            .with_expected_columns(documented.iter().map(|v| v.name.clone()).collect())
            .with_state_gazetteer(&reference.states)
            .with_county_gazetteer(&reference.counties)
            .with_seat_counts(&reference.seats)
            .with_scope(postals.clone());
        let report = validator.run(dataverse.as_str(), &subset)?;

        let report_path = write_release_reports(output_dir, config.year, *dataverse, &report, &subset)?;
        releases.push(DataverseRelease {
            dataverse: *dataverse,
            rows: subset.height(),
            report,
            report_path,
        });
    }

    Ok(ReleaseOutcome {
        version: release_version(),
        postals,
        combined_rows: combined.height(),
        combined_report,
        releases,
    })
}

/// Write one dataverse's review files: the findings text and the
/// frequencies table. Returns the findings path.
fn write_release_reports(
    output_dir: &Path,
    year: i64,
    dataverse: Dataverse,
    report: &ValidationReport,
    subset: &DataFrame,
) -> Result<PathBuf> {
    let dir = output_dir.join(format!("{year}-precinct-{dataverse}"));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("create release directory: {}", dir.display()))?;

    let report_path = dir.join("checks.txt");
    std::fs::write(&report_path, report.to_text())
        .with_context(|| format!("write findings: {}", report_path.display()))?;

    let freq_path = dir.join(format!("frequencies-{year}-precinct-{dataverse}.csv"));
    let rows = frequencies(subset)?;
    std::fs::write(&freq_path, frequencies_csv(&rows))
        .with_context(|| format!("write frequencies: {}", freq_path.display()))?;

    Ok(report_path)
}
