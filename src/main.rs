//! Mindiff: full-context line diff.
//!
//! This is the main entry point for the `mindiff` CLI. It parses arguments,
//! sets up logging, runs the diff, and maps errors to exit codes.

mod cli;
mod commands;
mod logging;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_logging(logging::level_for(cli.verbose, cli.quiet));

    match commands::run(cli) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
