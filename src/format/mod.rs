//! Output formatting for rendered diff lines.
//!
//! Two formats are supported:
//! - text: `prefix + content` per line, one line terminator each
//! - json: NDJSON, one `{"marker": ..., "content": ...}` object per line
//!
//! The default text prefixes are `"  "`, `"+ "`, `"- "` and `"! "`.

use crate::diff::{Marker, RenderedLine};
use crate::error::{MindiffError, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;


/// Prefix written before the content of each rendered line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prefixes {
    pub unchanged: String,
    pub added: String,
    pub removed: String,
    pub changed: String,
}

impl Default for Prefixes {
    fn default() -> Self {
        Self {
            unchanged: "  ".to_string(),
            added: "+ ".to_string(),
            removed: "- ".to_string(),
            changed: "! ".to_string(),
        }
    }
}

impl Prefixes {
    /// Prefix for a marker.
    pub fn for_marker(&self, marker: Marker) -> &str {
        match marker {
            Marker::Unchanged => &self.unchanged,
            Marker::Added => &self.added,
            Marker::Removed => &self.removed,
            Marker::Changed => &self.changed,
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Marker, &str)> {
        [
            Marker::Unchanged,
            Marker::Added,
            Marker::Removed,
            Marker::Changed,
        ]
        .into_iter()
        .map(move |m| (m, self.for_marker(m)))
    }
}

/// Format a single rendered line without its terminator.
pub fn format_line(line: &RenderedLine<'_>, prefixes: &Prefixes) -> String {
    let prefix = prefixes.for_marker(line.marker);
    let mut out = String::with_capacity(prefix.len() + line.content.len());
    out.push_str(prefix);
    out.push_str(line.content);
    out
}

/// Write rendered lines as prefixed text, one `\n`-terminated line each.
pub fn write_text<W: Write>(
    out: &mut W,
    lines: &[RenderedLine<'_>],
    prefixes: &Prefixes,
) -> Result<()> {
    for line in lines {
        writeln!(out, "{}{}", prefixes.for_marker(line.marker), line.content)
            .map_err(|e| MindiffError::Output(e.to_string()))?;
    }
    Ok(())
}

/// Write rendered lines as NDJSON.
pub fn write_json<W: Write>(out: &mut W, lines: &[RenderedLine<'_>]) -> Result<()> {
    for line in lines {
        serde_json::to_writer(&mut *out, line).map_err(|e| {
            MindiffError::Output(format!("failed to serialize rendered line: {}", e))
        })?;
        out.write_all(b"\n")
            .map_err(|e| MindiffError::Output(e.to_string()))?;
    }
    Ok(())
}
