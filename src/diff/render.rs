//! Marker assignment for edit operations.

use super::types::{EditOp, Marker, RenderedLine};

/// Render one edit operation into display lines.
///
/// Inside a block, old and new lines pair up by position. Each pair shows
/// only the new text as `Changed`. Surplus new lines follow as `Added`;
/// surplus old lines follow as `Removed` with their old text.
pub fn render<'a, T: AsRef<str>>(op: &EditOp<'a, T>) -> Vec<RenderedLine<'a>> {
    match *op {
        EditOp::Equal(line) => vec![RenderedLine::new(Marker::Unchanged, line.as_ref())],
        EditOp::Block { removed, added } => {
            let paired = removed.len().min(added.len());
            let mut out = Vec::with_capacity(removed.len().max(added.len()));

            out.extend(
                added[..paired]
                    .iter()
                    .map(|line| RenderedLine::new(Marker::Changed, line.as_ref())),
            );
            out.extend(
                added[paired..]
                    .iter()
                    .map(|line| RenderedLine::new(Marker::Added, line.as_ref())),
            );
            out.extend(
                removed[paired..]
                    .iter()
                    .map(|line| RenderedLine::new(Marker::Removed, line.as_ref())),
            );

            out
        }
    }
}
