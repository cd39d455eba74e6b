//! Full-context line diff engine.
//!
//! The pipeline runs strictly in order:
//! - [`align`]: LCS alignment of the old and new sequences
//! - [`build`]: edit script of `Equal` lines and `Block` gaps
//! - [`render`]: marker assignment per edit operation
//!
//! Every function here is pure and infallible. Inputs of any length,
//! including empty ones, produce a well-defined result.

mod align;
mod render;
mod script;
mod types;


// Re-export public API
pub use align::align;
pub use render::render;
pub use script::build;
pub use types::{Alignment, EditOp, Marker, RenderedLine};

use log::debug;

/// Diff two line sequences and return the rendered stream in display order.
///
/// Runs align, build and render back to back. The result walks the new
/// sequence top to bottom, with removed old lines interleaved where they
/// disappeared.
pub fn compare<'a, T>(old: &'a [T], new: &'a [T]) -> Vec<RenderedLine<'a>>
where
    T: AsRef<str> + PartialEq,
{
    let alignment = align(old, new);
    let script = build(old, new, &alignment);
    debug!(
        "edit script has {} ops for {} old / {} new lines",
        script.len(),
        old.len(),
        new.len()
    );

    script.iter().flat_map(|op| render(op)).collect()
}

/// Whether any rendered line marks a difference.
pub fn has_differences(lines: &[RenderedLine<'_>]) -> bool {
    lines.iter().any(RenderedLine::is_difference)
}
