//! CLI argument definitions for the pivot report generator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pivotgen",
    version,
    about = "Pivot report generator - per-scheme summaries from claims exports",
    long_about = "Generate per-scheme pivot report workbooks from insurance claims exports.\n\n\
                  The preprocessor derives benefit categories and occurrence flags;\n\
                  the report stage slices the table per scheme and writes one\n\
                  worksheet of pivot blocks per selection."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Derive benefit categories and occurrence flags for a raw export.
    Preprocess(PreprocessArgs),

    /// Build the per-scheme pivot workbook from an enriched table.
    Report(ReportArgs),

    /// Run both stages: raw export in, pivot workbook out.
    Run(RunArgs),

    /// List the schemes in a workbook with their row counts.
    Schemes(SchemesArgs),
}

#[derive(Parser)]
pub struct PreprocessArgs {
    /// Path to the claims export workbook.
    #[arg(value_name = "WORKBOOK")]
    pub input: PathBuf,

    /// Output workbook path (default: <WORKBOOK stem>-enriched.xlsx).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Worksheet holding the raw export.
    #[arg(long = "sheet", value_name = "NAME", default_value = "Export")]
    pub sheet: String,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the enriched workbook.
    #[arg(value_name = "WORKBOOK")]
    pub input: PathBuf,

    /// Output workbook path.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = "Pivot_Tables_By_Scheme.xlsx"
    )]
    pub output: PathBuf,

    /// Worksheet holding the enriched table.
    #[arg(long = "sheet", value_name = "NAME", default_value = "Sheet1")]
    pub sheet: String,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the claims export workbook.
    #[arg(value_name = "WORKBOOK")]
    pub input: PathBuf,

    /// Output workbook path.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = "Pivot_Tables_By_Scheme.xlsx"
    )]
    pub output: PathBuf,

    /// Worksheet holding the raw export.
    #[arg(long = "sheet", value_name = "NAME", default_value = "Export")]
    pub sheet: String,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

#[derive(Parser)]
pub struct SchemesArgs {
    /// Path to the workbook to inspect.
    #[arg(value_name = "WORKBOOK")]
    pub input: PathBuf,

    /// Worksheet holding the table.
    #[arg(long = "sheet", value_name = "NAME", default_value = "Sheet1")]
    pub sheet: String,
}

/// How the schemes to report on are chosen.
#[derive(Args)]
pub struct SelectionArgs {
    /// Scheme to report on: NAME or NAME=YYYY-MM-DD..YYYY-MM-DD (repeatable).
    #[arg(long = "scheme", value_name = "SPEC")]
    pub schemes: Vec<String>,

    /// JSON file holding an array of scheme selections.
    #[arg(
        long = "selections",
        value_name = "PATH",
        conflicts_with_all = ["schemes", "all"]
    )]
    pub selections_file: Option<PathBuf>,

    /// Report on every scheme in the table, unfiltered.
    #[arg(long = "all", conflicts_with = "schemes")]
    pub all: bool,
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
