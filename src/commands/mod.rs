//! The diff command.
//!
//! Merges config and flags, loads both inputs, runs the diff engine and
//! writes the rendered stream. Inputs are fully loaded and size-checked
//! before the engine runs.

use crate::cli::Cli;
use log::{debug, info};
use mindiff::config::{Config, OutputFormat};
use mindiff::diff;
use mindiff::error::{MindiffError, Result};
use mindiff::exit_codes;
use mindiff::format::{write_json, write_text};
use mindiff::fs::atomic_write;
use mindiff::loader::{self, Source};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[cfg(test)]
mod tests;

/// Settings for one run, after config and flags are merged.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub old: Source,
    pub new: Source,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub config: Config,
    pub exit_code: bool,
}

impl RunOptions {
    /// Apply command-line overrides on top of `config`.
    pub fn from_cli(cli: Cli, mut config: Config) -> Result<Self> {
        if let Some(max_lines) = cli.max_lines {
            if max_lines == 0 {
                return Err(MindiffError::UserError(
                    "--max-lines must be greater than 0".to_string(),
                ));
            }
            config.max_lines = Some(max_lines);
        }

        let old = Source::from_operand(&cli.old);
        let new = Source::from_operand(&cli.new);
        if old.is_stdin() && new.is_stdin() {
            return Err(MindiffError::UserError(
                "only one of OLD and NEW can be read from standard input".to_string(),
            ));
        }

        Ok(Self {
            old,
            new,
            output: cli.output,
            format: cli.format.unwrap_or(config.format),
            config,
            exit_code: cli.exit_code,
        })
    }
}

/// Run the diff described by the parsed command line.
///
/// Returns the exit code for a completed run.
pub fn run(cli: Cli) -> Result<i32> {
    let config = Config::resolve(cli.config.as_deref())?;
    let options = RunOptions::from_cli(cli, config)?;
    execute(&options)
}

/// Diff `options.old` against `options.new` and write the result.
pub fn execute(options: &RunOptions) -> Result<i32> {
    let old = load_checked(&options.old, &options.config)?;
    let new = load_checked(&options.new, &options.config)?;

    let rendered = diff::compare(&old, &new);
    let differs = diff::has_differences(&rendered);
    info!(
        "{} vs {}: {} rendered lines, {}",
        options.old,
        options.new,
        rendered.len(),
        if differs { "inputs differ" } else { "inputs identical" }
    );

    match &options.output {
        Some(path) => {
            let mut buffer = Vec::new();
            write_rendered(&mut buffer, &rendered, options)?;
            atomic_write(path, &buffer)?;
            debug!("wrote {} bytes to {}", buffer.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_rendered(&mut out, &rendered, options)?;
            out.flush()
                .map_err(|e| MindiffError::Output(e.to_string()))?;
        }
    }

    if options.exit_code && differs {
        Ok(exit_codes::DIFFERENCES_FOUND)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

fn load_checked(source: &Source, config: &Config) -> Result<Vec<String>> {
    let lines = loader::load(source)?;
    config.check_line_limit(&source.to_string(), lines.len())?;
    Ok(lines)
}

fn write_rendered<W: Write>(
    out: &mut W,
    rendered: &[diff::RenderedLine<'_>],
    options: &RunOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Text => write_text(out, rendered, &options.config.prefixes),
        OutputFormat::Json => write_json(out, rendered),
    }
}
