//! Configuration enums for mindiff.

use serde::{Deserialize, Serialize};

/// How the rendered diff is written.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Prefixed text, one line per rendered line (default).
    #[default]
    Text,
    /// Newline-delimited JSON objects with `marker` and `content`.
    Json,
}
