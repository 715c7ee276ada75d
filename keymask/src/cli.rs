//! Command-line interface definition for keymask.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "keymask",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Mask sensitive keywords in text with asterisks",
    long_about = "keymask replaces every literal occurrence of the given keywords with a run of asterisks, either one per matched character or a fixed number per match. Keywords can be given on the command line, in a keywords file (one per line) or in a YAML configuration.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress the summary and all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `keymask` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Masks keywords in an input file or stdin.
    #[command(about = "Masks keywords in an input file or stdin.")]
    Mask(MaskCommand),

    /// Reports keyword occurrences without masking.
    #[command(about = "Reports keyword occurrences in an input without masking it.")]
    Scan(ScanCommand),
}

/// Keyword sources and matching options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct KeywordArgs {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Keyword to mask (repeatable). Commas are part of the keyword.
    #[arg(long = "keyword", short = 'k', value_name = "KEYWORD", help = "Keyword to mask; repeat the flag for more. Commas are kept literally.")]
    pub keywords: Vec<String>,

    /// File holding one keyword per line.
    #[arg(long = "keywords-file", value_name = "FILE", help = "Read keywords from a file, one per line.")]
    pub keywords_file: Option<PathBuf>,

    /// Path to a YAML mask configuration.
    #[arg(long = "config", value_name = "FILE", help = "Path to a YAML mask configuration file.")]
    pub config: Option<PathBuf>,

    /// Ignore letter case when matching keywords.
    #[arg(long = "ignore-case", short = 'I', help = "Match keywords regardless of letter case.")]
    pub ignore_case: bool,
}

/// Arguments for the `mask` command.
#[derive(Parser, Debug)]
pub struct MaskCommand {
    #[command(flatten)]
    pub keyword_args: KeywordArgs,

    /// Write masked output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Replace every match with exactly N asterisks.
    #[arg(long = "fixed", value_name = "N", help = "Replace every match with exactly N asterisks (0 deletes matches).")]
    pub fixed: Option<usize>,

    /// Suppress the mask summary.
    #[arg(long = "no-summary", help = "Suppress the mask summary.")]
    pub no_summary: bool,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    #[command(flatten)]
    pub keyword_args: KeywordArgs,

    /// Exit with a non-zero code if the number of matches exceeds this threshold.
    #[arg(long = "fail-over-threshold", value_name = "N", help = "Exit with a non-zero code if the total number of matches exceeds this threshold.")]
    pub fail_over_threshold: Option<usize>,

    /// Print the scan report as JSON to stdout.
    #[arg(long = "json-stdout", help = "Print the scan report to stdout as JSON.")]
    pub json_stdout: bool,
}
