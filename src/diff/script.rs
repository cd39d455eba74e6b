//! Edit script construction from an alignment.

use super::types::{Alignment, EditOp};

/// Walk `alignment` and emit the edit script for `old` -> `new`.
///
/// Each gap before, between, or after matched pairs becomes at most one
/// `Block`; empty gaps emit nothing. Each matched pair becomes one `Equal`
/// holding the new-side line.
///
/// # Panics
///
/// Panics if `alignment` indexes past the end of `old` or `new`, i.e. it was
/// computed for different sequences.
pub fn build<'a, T>(old: &'a [T], new: &'a [T], alignment: &Alignment) -> Vec<EditOp<'a, T>> {
    let mut ops = Vec::with_capacity(alignment.len() * 2 + 1);
    let (mut i, mut j) = (0, 0);

    for &(old_idx, new_idx) in alignment.pairs() {
        push_gap(&mut ops, &old[i..old_idx], &new[j..new_idx]);
        ops.push(EditOp::Equal(&new[new_idx]));
        i = old_idx + 1;
        j = new_idx + 1;
    }

    push_gap(&mut ops, &old[i..], &new[j..]);
    ops
}

fn push_gap<'a, T>(ops: &mut Vec<EditOp<'a, T>>, removed: &'a [T], added: &'a [T]) {
    if removed.is_empty() && added.is_empty() {
        return;
    }
    ops.push(EditOp::Block { removed, added });
}
