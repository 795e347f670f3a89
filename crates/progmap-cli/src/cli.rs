//! CLI argument definitions for the program mapper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use progmap_model::StatusFilter;

#[derive(Parser)]
#[command(
    name = "progmap",
    version,
    about = "Reconcile free-text program names against a canonical catalog",
    long_about = "Reconcile free-text program-of-interest values from form exports\n\
                  against a canonical program catalog.\n\n\
                  Scores every distinct value, classifies it as confident, uncertain,\n\
                  or unmapped, and exports contact rows with canonical program names."
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

    /// Allow row-level contact data (emails, phones) in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a matching pass over a contact export and report the decisions.
    Map(MapArgs),

    /// Show which column roles are detected in a contact export.
    Columns(ColumnsArgs),

    /// Parse and list the canonical program catalog.
    Programs(ProgramsArgs),
}

#[derive(Parser)]
pub struct MapArgs {
    /// Contact export CSV file.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Canonical program list (plain lines or DAX DATATABLE text).
    #[arg(value_name = "REFERENCE")]
    pub reference: PathBuf,

    /// Program column header (overrides automatic detection).
    #[arg(long = "column", value_name = "HEADER")]
    pub column: Option<String>,

    /// JSON file of manual overrides to apply after the pass.
    #[arg(long = "overrides", value_name = "PATH")]
    pub overrides: Option<PathBuf>,

    /// Restrict the report to one status bucket.
    #[arg(long = "filter", value_enum, default_value = "all")]
    pub filter: StatusFilterArg,

    /// Write the contact export with mapped program names.
    ///
    /// Without a value, writes `mapped_programs_<date>.csv` in the
    /// current directory.
    #[arg(long = "export", value_name = "PATH", num_args = 0..=1)]
    pub export: Option<Option<PathBuf>>,

    /// Write the per-value review CSV to this path.
    #[arg(long = "review", value_name = "PATH")]
    pub review: Option<PathBuf>,

    /// Maximum number of rows shown in the report table.
    #[arg(long = "limit", value_name = "N", default_value_t = 40)]
    pub limit: usize,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Contact export CSV file.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,
}

#[derive(Parser)]
pub struct ProgramsArgs {
    /// Canonical program list (plain lines or DAX DATATABLE text).
    #[arg(value_name = "REFERENCE")]
    pub reference: PathBuf,
}

/// Status filter choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum StatusFilterArg {
    All,
    Confident,
    Uncertain,
    Unmapped,
}

impl From<StatusFilterArg> for StatusFilter {
    fn from(arg: StatusFilterArg) -> Self {
        match arg {
            StatusFilterArg::All => StatusFilter::All,
            StatusFilterArg::Confident => StatusFilter::Confident,
            StatusFilterArg::Uncertain => StatusFilter::Uncertain,
            StatusFilterArg::Unmapped => StatusFilter::Unmapped,
        }
    }
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
