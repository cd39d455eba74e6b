//! Error types for mindiff.
//!
//! The diff core is infallible; every variant here belongs to the surfaces
//! around it (arguments, config, loading inputs, writing output).

use crate::exit_codes;
use thiserror::Error;

/// Main error type for mindiff operations.
#[derive(Error, Debug)]
pub enum MindiffError {
    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),

    /// Config file could not be read, parsed, or validated.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// An input source could not be read.
    #[error("failed to read '{source_name}': {message}")]
    Input {
        source_name: String,
        message: String,
    },

    /// An input source exceeds the configured line limit.
    #[error("'{source_name}' has {lines} lines, exceeding the limit of {limit}")]
    InputTooLarge {
        source_name: String,
        lines: usize,
        limit: usize,
    },

    /// The rendered diff could not be written.
    #[error("failed to write output: {0}")]
    Output(String),
}

impl MindiffError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MindiffError::UserError(_) | MindiffError::Config(_) => exit_codes::USER_ERROR,
            MindiffError::Input { .. } | MindiffError::InputTooLarge { .. } => {
                exit_codes::INPUT_FAILURE
            }
            MindiffError::Output(_) => exit_codes::OUTPUT_FAILURE,
        }
    }
}

/// Result type alias for mindiff operations.
pub type Result<T> = std::result::Result<T, MindiffError>;
