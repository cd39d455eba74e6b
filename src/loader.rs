//! Input loading for mindiff.
//!
//! Turns a command-line operand into an ordered sequence of lines. A
//! source is read completely before diffing starts, so the diff core never
//! sees partial input.

use crate::error::{MindiffError, Result};
use log::debug;
use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Operand that selects standard input.
pub const STDIN_OPERAND: &str = "-";

/// Where a line sequence comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Stdin,
}

impl Source {
    /// Interpret a command-line operand; `-` selects standard input.
    pub fn from_operand(operand: &Path) -> Self {
        if operand.as_os_str() == STDIN_OPERAND {
            Source::Stdin
        } else {
            Source::Path(operand.to_path_buf())
        }
    }

    pub fn is_stdin(&self) -> bool {
        matches!(self, Source::Stdin)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Path(path) => write!(f, "{}", path.display()),
            Source::Stdin => f.write_str("<stdin>"),
        }
    }
}

/// Read `source` into lines.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Lines without their terminators
/// * `Err(MindiffError::Input)` - Missing file, permission, or invalid UTF-8
pub fn load(source: &Source) -> Result<Vec<String>> {
    let lines = match source {
        Source::Path(path) => {
            let file = std::fs::File::open(path).map_err(|e| input_error(source, e))?;
            load_from_reader(file, source)?
        }
        Source::Stdin => load_from_reader(io::stdin().lock(), source)?,
    };

    debug!("read {} lines from {}", lines.len(), source);
    Ok(lines)
}

/// Read all of `reader` as UTF-8 text and split it into lines.
pub fn load_from_reader<R: Read>(mut reader: R, source: &Source) -> Result<Vec<String>> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| input_error(source, e))?;

    Ok(split_lines(&text))
}

/// Split text into lines, dropping `\n` and `\r\n` terminators.
///
/// A final terminator does not start an extra empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

fn input_error(source: &Source, err: io::Error) -> MindiffError {
    MindiffError::Input {
        source_name: source.to_string(),
        message: err.to_string(),
    }
}
