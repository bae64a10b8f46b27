// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shift tables for the Boyer-Moore scan.
//!
//! Three tables are derived from the pattern at compile time: the
//! positional bad-character table (rightmost prior occurrence of each byte
//! value), the good-suffix table `L` (where a matched suffix reoccurs
//! inside the pattern), and the full-shift table `F` (longest suffix that
//! is also a pattern prefix). `L` and `F` both come out of the Z-array.

use crate::zarray::z_array;

/// Byte-value alphabet. Matching is byte-exact, so the alphabet is the
/// 256 possible byte values regardless of text encoding.
pub const ALPHABET_SIZE: usize = 256;

/// Positional bad-character table.
///
/// For a pattern of length `m`, stores for every position `i in [0, m]`
/// and byte value `c` the rightmost index `< i` at which `c` occurs in
/// the pattern, or `-1` if it does not. Columns are laid out flat with a
/// 256-entry stride, so a lookup is one multiply and one index.
#[derive(Debug, Clone)]
pub struct BadCharTable {
    cells: Vec<i64>,
}

impl BadCharTable {
    /// Build the table in a single left-to-right pass: keep a 256-entry
    /// "last seen" vector and snapshot it after each pattern index.
    pub fn build(pattern: &[u8]) -> Self {
        let mut cells = Vec::with_capacity(ALPHABET_SIZE * (pattern.len() + 1));
        let mut last_seen = [-1i64; ALPHABET_SIZE];

        // Column 0: nothing lies left of position 0.
        cells.extend_from_slice(&last_seen);

        for (i, &byte) in pattern.iter().enumerate() {
            last_seen[byte as usize] = i as i64;
            cells.extend_from_slice(&last_seen);
        }

        Self { cells }
    }

    /// Rightmost index `< pos` at which `byte` occurs, or `-1`.
    #[inline]
    pub fn rightmost_before(&self, byte: u8, pos: usize) -> i64 {
        self.cells[pos * ALPHABET_SIZE + byte as usize]
    }
}

/// Good-suffix table `L`.
///
/// `L[i]` is the largest `k < m` such that the suffix of the pattern
/// starting at `i` matches a suffix of `pattern[..=k]`, the strongest
/// provably safe shift after a mismatch at `i - 1`. Only proper suffixes
/// count, so `L[0] = -1` always; `-1` elsewhere means the suffix reoccurs
/// nowhere and the full-shift table decides instead.
pub fn good_suffix_table(pattern: &[u8]) -> Vec<i64> {
    let m = pattern.len();
    let mut table = vec![-1i64; m];

    let reversed: Vec<u8> = pattern.iter().rev().copied().collect();
    let mut n = z_array(&reversed);
    n.reverse();

    for (j, &nj) in n.iter().enumerate().take(m.saturating_sub(1)) {
        let i = m - nj;
        if i != m {
            table[i] = j as i64;
        }
    }

    table
}

/// Full-shift table `F`.
///
/// `F[i]` is the length of the longest suffix of `pattern[i..]` that is
/// also a prefix of the whole pattern. Used when the matched suffix does
/// not reoccur anywhere else, and for the post-match advance that keeps
/// overlapping occurrences reachable.
pub fn full_shift_table(pattern: &[u8]) -> Vec<u64> {
    let m = pattern.len();
    let mut table = vec![0u64; m];
    let z = z_array(pattern);

    // Scanning Z from the right: wherever a Z-value reaches the end of
    // the pattern (z[j] == m - j, i.e. j + 1 positions from the back),
    // that suffix is a prefix; carry the running maximum leftward.
    let mut longest = 0u64;
    for (i, &zv) in z.iter().rev().enumerate() {
        if zv == i + 1 {
            longest = longest.max(zv as u64);
        }
        table[m - 1 - i] = longest;
    }

    table
}

#[cfg(test)]
#[path = "tables_tests.rs"]
mod tests;
