//! Configuration model for mindiff.
//!
//! Config is an optional YAML file passed with `--config` (or the
//! `MINDIFF_CONFIG` env var). Unknown fields are ignored for forward
//! compatibility, every field has a default, and command-line flags take
//! precedence over file values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::OutputFormat;
