//! Mindiff: full-context line diff.
//!
//! Every line of the new input is shown in order, marked as unchanged,
//! added, or changed, with removed old lines interleaved where they
//! disappeared. The engine lives in [`diff`]; the other modules are the
//! loading, configuration and output layers the CLI wraps around it.

pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod format;
pub mod fs;
pub mod loader;
