//! Config struct definition.

use super::types::OutputFormat;
use crate::format::Prefixes;
use serde::{Deserialize, Serialize};

/// Configuration for a mindiff run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefixes used by the text format. Missing entries keep their default.
    pub prefixes: Prefixes,

    /// Output format when `--format` is not given.
    pub format: OutputFormat,

    /// Maximum number of lines accepted per input. Unset means no limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<usize>,
}
