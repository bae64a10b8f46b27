// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use yare::parameterized;

/// Reference implementation: direct prefix comparison at every position.
fn z_naive(s: &[u8]) -> Vec<usize> {
    (0..s.len())
        .map(|i| {
            if i == 0 {
                s.len()
            } else {
                s[i..].iter().zip(s.iter()).take_while(|(a, b)| a == b).count()
            }
        })
        .collect()
}

#[parameterized(
    empty = { b"", &[] },
    single = { b"x", &[1] },
    run = { b"aaaaa", &[5, 4, 3, 2, 1] },
    textbook = { b"aabcaabxaaz", &[11, 1, 0, 0, 3, 1, 0, 0, 2, 1, 0] },
    alternating = { b"abab", &[4, 0, 2, 0] },
    no_repeats = { b"abcd", &[4, 0, 0, 0] },
)]
fn known_values(input: &[u8], expected: &[usize]) {
    assert_eq!(z_array(input), expected);
}

#[test]
fn two_bytes() {
    assert_eq!(z_array(b"aa"), vec![2, 1]);
    assert_eq!(z_array(b"ab"), vec![2, 0]);
}

#[test]
fn matches_naive_on_repetitive_input() {
    // Stress the Z-box reuse paths: long runs and period-2/3 repeats.
    let inputs: &[&[u8]] = &[
        b"aaaaaaaaaaaaaaab",
        b"abababababababab",
        b"abcabcabcabcabca",
        b"aabaabaaaabaabaa",
        b"IIJJIIJJKKKKKKKK",
    ];
    for s in inputs {
        assert_eq!(z_array(s), z_naive(s), "input {:?}", s);
    }
}

#[test]
fn values_never_exceed_remaining_length() {
    let s = b"mississippi river missive";
    let z = z_array(s);
    for (i, &zv) in z.iter().enumerate() {
        assert!(zv <= s.len() - i);
    }
}

#[test]
fn match_length_identical_indices_is_suffix_length() {
    assert_eq!(match_length(b"abcdef", 2, 2), 4);
}

#[test]
fn match_length_disjoint_prefix() {
    // "abcab": positions 0 and 3 share "ab".
    assert_eq!(match_length(b"abcab", 0, 3), 2);
    assert_eq!(match_length(b"abcab", 0, 2), 0);
}
