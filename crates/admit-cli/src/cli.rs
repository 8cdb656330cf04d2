//! CLI argument definitions for the admission-result parser.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "admit",
    version,
    about = "Extract degree level and program from admission-result lines",
    long_about = "Extract a degree level (MS, PhD) and a canonical program code (MSCS, MSEE, ...)\n\
                  from free-text admission-result lines.\n\n\
                  Reference data is embedded; --standards-dir or ADMIT_STANDARDS_DIR\n\
                  points at a directory with programs.json and majors.csv to replace it."
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

    /// Allow input lines to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Directory with programs.json and majors.csv (default: embedded data).
    #[arg(long = "standards-dir", value_name = "DIR", global = true)]
    pub standards_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse admission-result lines.
    Parse(ParseArgs),

    /// Show reference catalog statistics.
    Catalog,
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Lines to parse. When empty, lines are read from --input or stdin.
    #[arg(value_name = "LINE")]
    pub lines: Vec<String>,

    /// Read lines from a file.
    #[arg(long = "input", short = 'i', value_name = "FILE", conflicts_with = "lines")]
    pub input: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Exit with status 1 when any line has no recognizable program.
    #[arg(long = "fail-on-unmatched")]
    pub fail_on_unmatched: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
