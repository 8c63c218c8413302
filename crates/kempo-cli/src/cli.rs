//! CLI argument definitions for the premium table converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "kempo",
    version,
    about = "Convert health insurance premium rate tables to JSON and YAML",
    long_about = "Convert prefecture health insurance and pension premium rate tables\n\
                  (CSV exports of the published schedules) to JSON and YAML.\n\n\
                  Each table is checked against the expected column layout before\n\
                  any figure is extracted."
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
    /// Convert every CSV table in a directory.
    Convert(ConvertArgs),

    /// Parse one table and print its ranks.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Directory containing the prefecture CSV files.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Month the tables take effect, e.g. "2024.4" or "2024年4月".
    #[arg(long = "effective-date", value_name = "DATE")]
    pub effective_date: Option<String>,

    /// Output directory for generated files (default: <DIR>).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "both")]
    pub format: OutputFormatArg,

    /// Parse and validate without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Continue with the remaining files when one fails.
    ///
    /// Failed files are listed in the summary and the exit status is still
    /// non-zero.
    #[arg(long = "keep-going")]
    pub keep_going: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// CSV table to parse.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Month the table takes effect.
    #[arg(long = "effective-date", value_name = "DATE")]
    pub effective_date: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Both,
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
