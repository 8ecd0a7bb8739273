//! CLI argument definitions for the admissions migration tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "admit",
    version,
    about = "Hospital admissions migration - validate a CSV export and load it into the document store",
    long_about = "Validate a flat CSV export of hospital admission records and migrate it\n\
                  into a schema-enforcing document store.\n\n\
                  `check` produces an integrity report without touching the store.\n\
                  `load` gates on the same report, then recreates the destination\n\
                  collection and inserts one nested document per source row,\n\
                  deduplicating on the patient natural key."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow patient-level values in log output.
    ///
    /// Off by default: logs show [REDACTED] wherever a cell value would
    /// otherwise appear.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the integrity checks and print the report.
    Check(CheckArgs),

    /// Validate, then migrate the CSV into the document store.
    Load(LoadArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the admissions CSV export.
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,

    /// Treat soft type mismatches as fatal.
    #[arg(long = "fail-on-type-errors")]
    pub fail_on_type_errors: bool,

    /// Treat missing expected columns as fatal.
    #[arg(long = "fail-on-missing-columns")]
    pub fail_on_missing_columns: bool,
}

#[derive(Parser)]
pub struct LoadArgs {
    /// Path to the admissions CSV export.
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,

    /// Destination database name.
    #[arg(long = "database", value_name = "NAME")]
    pub database: Option<String>,

    /// Destination collection name.
    #[arg(long = "collection", value_name = "NAME")]
    pub collection: Option<String>,

    /// Treat soft type mismatches as fatal at the gate.
    #[arg(long = "fail-on-type-errors")]
    pub fail_on_type_errors: bool,

    /// Treat missing expected columns as fatal at the gate.
    #[arg(long = "fail-on-missing-columns")]
    pub fail_on_missing_columns: bool,

    /// Stop on the first document the destination schema rejects.
    ///
    /// By default rejected documents are counted, logged, and skipped.
    #[arg(long = "abort-on-rejection")]
    pub abort_on_rejection: bool,
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
    Pretty,
    Compact,
    Json,
}
