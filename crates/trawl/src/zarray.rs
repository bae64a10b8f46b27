// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Z-algorithm (fundamental preprocessing).
//!
//! For a byte sequence `s`, `Z[i]` is the length of the longest substring
//! starting at `i` that is also a prefix of `s`. Both good-suffix table
//! builders are derived from this array.

/// Length of the common prefix of `s[idx1..]` and `s[idx2..]`.
fn match_length(s: &[u8], mut idx1: usize, mut idx2: usize) -> usize {
    if idx1 == idx2 {
        return s.len() - idx1;
    }

    let mut count = 0;
    while idx1 < s.len() && idx2 < s.len() && s[idx1] == s[idx2] {
        count += 1;
        idx1 += 1;
        idx2 += 1;
    }

    count
}

/// Compute the Z-array of `s` in amortized O(n).
///
/// By convention `Z[0] = n`. Empty input yields an empty array and a
/// single byte yields `[1]`.
///
/// The implementation keeps a "Z-box" `[l, r]`, the most recently matched
/// prefix region. Positions inside the box reuse previously computed
/// values (truncated at the box edge); positions outside it are matched
/// explicitly against the prefix.
pub fn z_array(s: &[u8]) -> Vec<usize> {
    let n = s.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![1];
    }

    let mut z = vec![0; n];
    z[0] = n;
    z[1] = match_length(s, 0, 1);

    // Warm start: every position covered by the initial match at 1 is a
    // shortening prefix run.
    for i in 2..=z[1] {
        z[i] = z[1] - i + 1;
    }

    // Lower and upper limits of the Z-box.
    let mut l = 0;
    let mut r = 0;

    for i in (2 + z[1])..n {
        if i <= r {
            // i falls within the existing Z-box.
            let k = i - l;
            let b = z[k];
            let a = r - i + 1;
            if b < a {
                // The mirrored value ends inside the box.
                z[i] = b;
            } else {
                // Reaches the box edge; extend by explicit comparison.
                z[i] = a + match_length(s, a, r + 1);
                l = i;
                r = i + z[i] - 1;
            }
        } else {
            z[i] = match_length(s, 0, i);
            if z[i] > 0 {
                l = i;
                r = i + z[i] - 1;
            }
        }
    }

    z
}

#[cfg(test)]
#[path = "zarray_tests.rs"]
mod tests;
