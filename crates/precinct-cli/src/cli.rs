//! CLI argument definitions for the precinct returns pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "precinct",
    version,
    about = "Assemble, validate, and release precinct-level election returns",
    long_about = "Assemble per-state precinct returns into a combined dataset,\n\
                  run the check battery against reference tables, and cut\n\
                  per-dataverse releases gated on documentation coverage."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "text", global = true)]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate one or more states' returns without releasing.
    Check(CheckArgs),

    /// Assemble the covered states and cut every dataverse release.
    Release(ReleaseArgs),

    /// List the release dataverses.
    Dataverses,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Postal codes of the states to check (all covered states if omitted).
    #[arg(value_name = "STATE")]
    pub states: Vec<String>,

    /// Root of the per-state data tree.
    #[arg(long = "data-root", value_name = "DIR", default_value = ".")]
    pub data_root: PathBuf,

    /// Reference table directory (default: PRECINCT_REFERENCE_DIR or reference/).
    #[arg(long = "reference-dir", value_name = "DIR")]
    pub reference_dir: Option<PathBuf>,

    /// Election year of the returns.
    #[arg(long = "year", default_value_t = 2016)]
    pub year: i64,

    /// List every distinct value of the small categorical columns.
    #[arg(long = "values")]
    pub values: bool,
}

#[derive(Parser)]
pub struct ReleaseArgs {
    /// Root of the per-state data tree.
    #[arg(long = "data-root", value_name = "DIR", default_value = ".")]
    pub data_root: PathBuf,

    /// Reference table directory (default: PRECINCT_REFERENCE_DIR or reference/).
    #[arg(long = "reference-dir", value_name = "DIR")]
    pub reference_dir: Option<PathBuf>,

    /// Election year of the returns.
    #[arg(long = "year", default_value_t = 2016)]
    pub year: i64,

    /// Directory for release review files (default: <DATA_ROOT>/release).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}
