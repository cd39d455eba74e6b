//! LCS alignment via the classic dynamic-programming table.

use log::debug;

use super::types::Alignment;

/// Align `old` and `new` on a longest common subsequence.
///
/// Builds the full `(n+1) x (m+1)` length table, then walks back from the
/// bottom-right corner. When skipping an old line and skipping a new line
/// keep the same LCS length, the walk skips the new line. Which of several
/// equally long subsequences gets picked depends on that rule, so it must
/// not change.
///
/// Memory is `O(n * m)`.
pub fn align<T: PartialEq>(old: &[T], new: &[T]) -> Alignment {
    let n = old.len();
    let m = new.len();
    let table = lcs_table(old, new);

    let mut pairs = Vec::with_capacity(table[n][m]);
    let (mut i, mut j) = (n, m);

    while i > 0 && j > 0 {
        if old[i - 1] == new[j - 1] && table[i][j] == table[i - 1][j - 1] + 1 {
            pairs.push((i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if table[i - 1][j] > table[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    pairs.reverse();
    debug!("aligned {}x{} lines, lcs length {}", n, m, pairs.len());

    Alignment::from_pairs(pairs)
}

/// `table[i][j]` is the LCS length of `old[..i]` and `new[..j]`.
fn lcs_table<T: PartialEq>(old: &[T], new: &[T]) -> Vec<Vec<usize>> {
    let n = old.len();
    let m = new.len();
    let mut table = vec![vec![0usize; m + 1]; n + 1];

    for i in 1..=n {
        for j in 1..=m {
            table[i][j] = if old[i - 1] == new[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }

    table
}
