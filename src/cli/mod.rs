//! CLI argument parsing for mindiff.
//!
//! Uses clap derive macros for declarative argument definitions. The run
//! itself lives in the `commands` module.

use clap::{ArgAction, Parser};
use mindiff::config::OutputFormat;
use std::path::PathBuf;

/// Mindiff: full-context line diff.
///
/// Prints every line of NEW, prefixed with "  " (unchanged), "+ " (added),
/// "! " (changed), or "- " (removed line of OLD).
#[derive(Parser, Debug)]
#[command(name = "mindiff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Old file, or `-` for standard input.
    pub old: PathBuf,

    /// New file, or `-` for standard input.
    pub new: PathBuf,

    /// Write the diff to this file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format (overrides the config file).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// YAML config file.
    #[arg(long, value_name = "PATH", env = "MINDIFF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Refuse inputs with more lines than this (overrides the config file).
    #[arg(long, value_name = "N")]
    pub max_lines: Option<usize>,

    /// Exit with status 1 when the inputs differ.
    #[arg(long)]
    pub exit_code: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
