//! Logging setup for the mindiff binary.
//!
//! Records go to stderr so they never mix with the diff on stdout.

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Map `-q` / `-v` flags to a level filter.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Initialize the global logger. `RUST_LOG` wins over the flag level.
pub fn init_logging(level: LevelFilter) {
    let mut builder = Builder::new();

    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    } else {
        builder.filter_level(level);
    }

    builder.format_timestamp(None);
    builder.target(Target::Stderr);

    // A second init (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
}
