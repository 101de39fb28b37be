use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info, info_span};

use precinct_model::{Dataverse, RELEASE_DATAVERSES};
use precinct_reference::ReferencePaths;

use precinct_cli::pipeline::{
    CheckOutcome, ReleaseConfig, ReleaseOutcome, check_states, covered_postals, load_reference,
    run_release,
};
use precinct_cli::summary::apply_table_style;

use crate::cli::{CheckArgs, ReleaseArgs};

pub fn run_dataverses() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Dataverse", "Contents"]);
    apply_table_style(&mut table);
    for dataverse in RELEASE_DATAVERSES {
        table.add_row(vec![dataverse.to_string(), describe(*dataverse).to_string()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_check(args: &CheckArgs) -> Result<CheckOutcome> {
    let config = ReleaseConfig {
        data_root: args.data_root.clone(),
        reference: reference_paths(args.reference_dir.clone()),
        year: args.year,
    };
    let reference = load_reference(&config.reference)?;

    let postals = if args.states.is_empty() {
        covered_postals(&reference)
    } else {
        normalize_postals(&args.states)
    };
    if postals.is_empty() {
        bail!("no states to check; coverage is empty and none were named");
    }

    let span = info_span!("check", states = postals.len());
    let _guard = span.enter();
    let started = Instant::now();
    let outcome = check_states(&config, &reference, &postals, args.values)?;
    info!(
        findings = outcome.report.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "check finished"
    );
    Ok(outcome)
}

pub fn run_release_command(args: &ReleaseArgs) -> Result<ReleaseOutcome> {
    let config = ReleaseConfig {
        data_root: args.data_root.clone(),
        reference: reference_paths(args.reference_dir.clone()),
        year: args.year,
    };
    let reference = load_reference(&config.reference)?;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.data_root.join("release"));

    let span = info_span!("release", year = config.year);
    let _guard = span.enter();
    let started = Instant::now();
    let outcome = run_release(&config, &reference, &output_dir)
        .with_context(|| format!("release for {}", config.year))?;
    info!(
        dataverses = outcome.releases.len(),
        rows = outcome.combined_rows,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "release finished"
    );
    Ok(outcome)
}

fn reference_paths(dir: Option<PathBuf>) -> ReferencePaths {
    match dir {
        Some(root) => ReferencePaths::new(root),
        None => ReferencePaths::resolve(),
    }
}

fn describe(dataverse: Dataverse) -> &'static str {
    match dataverse {
        Dataverse::President => "US President returns",
        Dataverse::Senate => "US Senate returns",
        Dataverse::House => "US House returns",
        Dataverse::State => "Statewide and state legislative returns",
        Dataverse::Local => "County and local office returns",
    }
}

fn normalize_postals(states: &[String]) -> Vec<String> {
    states.iter().map(|s| s.trim().to_uppercase()).collect()
}
