//! CLI argument definitions for schemamap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "schemamap",
    version,
    about = "Suggest column mappings between two table schemas",
    long_about = "Suggest a best-effort one-to-one column mapping between two\n\
                  table schemas from heterogeneous relational systems.\n\n\
                  Schemas are plain text files (one column name per line) or\n\
                  CSV files whose header row names the columns."
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
    /// Map every source column to its best target column.
    Map(MapArgs),

    /// Score a single (source, target) name pair and show the breakdown.
    Score(ScoreArgs),
}

#[derive(Parser)]
pub struct MapArgs {
    /// Source schema file (plain list or .csv header).
    #[arg(value_name = "SOURCE_SCHEMA")]
    pub source_schema: PathBuf,

    /// Target schema file (plain list or .csv header).
    #[arg(value_name = "TARGET_SCHEMA")]
    pub target_schema: PathBuf,

    /// Minimum score for a pair to be reported as a match.
    #[arg(long = "threshold", default_value_t = schemamap_match::DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Assignment mode.
    #[arg(long = "mode", value_enum, default_value = "one-to-one")]
    pub mode: ModeArg,

    /// Directory for report files; nothing is written when omitted.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Report files to write.
    #[arg(long = "format", value_enum, default_value = "both")]
    pub format: ReportFormatArg,

    /// Print the summary without writing report files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ScoreArgs {
    /// Source column name.
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Target column name.
    #[arg(value_name = "TARGET")]
    pub target: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Each target column is claimed by at most one source.
    OneToOne,
    /// Sources pick independently; targets may repeat.
    ManyToOne,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Csv,
    Json,
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
