//! Data model shared by the diff stages.

use serde::Serialize;
use std::fmt;

/// Index pairing that realizes one longest common subsequence.
///
/// Pairs are `(old_index, new_index)`, strictly increasing in both
/// components, and only ever pair content-equal lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    pairs: Vec<(usize, usize)>,
}

impl Alignment {
    pub(super) fn from_pairs(pairs: Vec<(usize, usize)>) -> Self {
        debug_assert!(
            pairs
                .windows(2)
                .all(|w| w[0].0 < w[1].0 && w[0].1 < w[1].1),
            "alignment pairs must strictly increase"
        );
        Self { pairs }
    }

    /// Matched `(old_index, new_index)` pairs in increasing order.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Length of the LCS.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// One step of the edit script.
///
/// Blocks borrow contiguous runs straight out of the input sequences. A
/// block always has at least one non-empty side.
#[derive(Debug, PartialEq, Eq)]
pub enum EditOp<'a, T> {
    /// A line common to both sequences.
    Equal(&'a T),
    /// Unmatched old lines and unmatched new lines sharing one alignment gap.
    Block { removed: &'a [T], added: &'a [T] },
}

impl<T> Clone for EditOp<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EditOp<'_, T> {}

impl<'a, T> EditOp<'a, T> {
    /// Lines this op consumes from the old sequence.
    pub fn old_lines(&self) -> &'a [T] {
        match *self {
            EditOp::Equal(line) => std::slice::from_ref(line),
            EditOp::Block { removed, .. } => removed,
        }
    }

    /// Lines this op consumes from the new sequence.
    pub fn new_lines(&self) -> &'a [T] {
        match *self {
            EditOp::Equal(line) => std::slice::from_ref(line),
            EditOp::Block { added, .. } => added,
        }
    }
}

/// How a rendered line relates to the old sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    /// Present and identical in both sequences.
    Unchanged,
    /// Only in the new sequence.
    Added,
    /// Only in the old sequence; content is the old text.
    Removed,
    /// New text standing in for one old line.
    Changed,
}

impl Marker {
    pub fn as_str(self) -> &'static str {
        match self {
            Marker::Unchanged => "unchanged",
            Marker::Added => "added",
            Marker::Removed => "removed",
            Marker::Changed => "changed",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A marker paired with the line content it annotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderedLine<'a> {
    pub marker: Marker,
    pub content: &'a str,
}

impl<'a> RenderedLine<'a> {
    pub fn new(marker: Marker, content: &'a str) -> Self {
        Self { marker, content }
    }

    pub fn is_difference(&self) -> bool {
        self.marker != Marker::Unchanged
    }
}
