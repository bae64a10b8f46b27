// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Boyer-Moore scan loop.
//!
//! Compares the pattern right-to-left against successive alignments of
//! the haystack, shifting by the stronger of the bad-character and
//! good-suffix rules after each mismatch. Galil's rule skips re-reading
//! haystack bytes verified in an earlier alignment, which bounds the
//! worst case to O(n); in practice large shifts make the scan sub-linear.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Error, Result};
use crate::pattern::CompiledPattern;
use crate::source::ByteSource;

/// Find occurrences of `pattern` in `source`.
///
/// Greedy mode returns every occurrence in ascending order, overlapping
/// ones included; otherwise the scan stops at the first occurrence. An
/// empty pattern, an empty source, or a source shorter than the pattern
/// yields an empty result without touching the source.
pub fn scan<S: ByteSource>(
    pattern: &CompiledPattern,
    source: &mut S,
    greedy: bool,
) -> Result<Vec<u64>> {
    scan_impl(pattern, source, greedy, None)
}

/// Like [`scan`], but checks `cancel` once per alignment step.
///
/// A set flag aborts with [`Error::Cancelled`], discarding any matches
/// accumulated so far. Intended for very large haystacks where the caller
/// wants to bail out of a long-running search.
pub fn scan_cancellable<S: ByteSource>(
    pattern: &CompiledPattern,
    source: &mut S,
    greedy: bool,
    cancel: &AtomicBool,
) -> Result<Vec<u64>> {
    scan_impl(pattern, source, greedy, Some(cancel))
}

fn scan_impl<S: ByteSource>(
    pattern: &CompiledPattern,
    source: &mut S,
    greedy: bool,
    cancel: Option<&AtomicBool>,
) -> Result<Vec<u64>> {
    let pat = pattern.pattern();
    let m = pat.len() as i64;
    let n = source.len() as i64;

    let mut matches = Vec::new();
    if m == 0 || n == 0 || n < m {
        return Ok(matches);
    }

    // Haystack offset aligned with the pattern's last byte.
    let mut k = m - 1;
    // Rightmost haystack offset verified in an earlier alignment
    // (Galil's rule); -1 means nothing is verified yet.
    let mut previous_k: i64 = -1;

    while k < n {
        if let Some(flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                return Err(Error::Cancelled);
            }
        }

        let mut i = m - 1; // pattern index under comparison
        let mut h = k; // haystack offset under comparison
        let mut byte = source.peek(h as u64)?;

        while i >= 0 && h > previous_k && pat[i as usize] == byte {
            i -= 1;
            h -= 1;
            byte = source.peek(h.max(0) as u64)?;
        }

        if i == -1 || h == previous_k {
            // Full match, or the comparison ran into a region already
            // verified by an earlier alignment.
            matches.push((k - m + 1) as u64);

            if !greedy {
                return Ok(matches);
            }

            // Post-match advance; F[1] keeps overlapping occurrences
            // reachable.
            k += if m > 1 {
                m - pattern.full_shift[1] as i64
            } else {
                1
            };
        } else {
            let at = (i + 1) as usize;
            let char_shift = i - pattern.bad_char.rightmost_before(byte, i as usize);
            let suffix_shift = if i + 1 == m {
                // Mismatch on the very first comparison.
                1
            } else if pattern.good_suffix[at] == -1 {
                // Matched suffix reoccurs nowhere in the pattern.
                m - pattern.full_shift[at] as i64
            } else {
                // Align with its rightmost reoccurrence.
                m - 1 - pattern.good_suffix[at]
            };

            let shift = char_shift.max(suffix_shift);
            if shift >= i + 1 {
                // The shift clears everything compared this pass, so the
                // next alignment starts a fresh verified window.
                previous_k = k;
            }
            k += shift;
        }
    }

    Ok(matches)
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
