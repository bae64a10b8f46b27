// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exact byte-pattern search over buffers and large files.
//!
//! Implements the Boyer-Moore algorithm with full preprocessing (the
//! bad-character rule, the good-suffix rule, and the full-shift fallback)
//! plus Galil's rule, giving a linear worst case and sub-linear scans in
//! practice. Matching is byte-exact: text inputs contribute their UTF-8
//! bytes and reported offsets are byte offsets.
//!
//! Compile a pattern once and reuse it:
//!
//! ```
//! use trawl::CompiledPattern;
//!
//! let needle = CompiledPattern::compile("abcd");
//! let hits = needle.find_all("abcdabcdabcdabcd")?;
//! assert_eq!(hits, [0, 4, 8, 12]);
//! # Ok::<(), trawl::Error>(())
//! ```
//!
//! Or search in one shot, against a buffer or a file:
//!
//! ```no_run
//! let hits = trawl::search_file("needle", "/var/log/big.log")?;
//! # Ok::<(), trawl::Error>(())
//! ```

pub mod error;
pub mod pattern;
pub mod scanner;
pub mod source;
pub mod tables;
pub mod zarray;

pub use error::{Error, Result};
pub use pattern::CompiledPattern;
pub use source::{BufferSource, ByteSource, FileSource};

use std::path::Path;

/// One-shot search: compile `pattern` and return every occurrence in
/// `haystack`, in ascending offset order.
///
/// Equivalent to [`CompiledPattern::compile`] followed by
/// [`CompiledPattern::find_all`]; prefer the compiled form when the same
/// pattern is searched more than once.
pub fn search(pattern: impl AsRef<[u8]>, haystack: impl AsRef<[u8]>) -> Result<Vec<u64>> {
    CompiledPattern::compile(pattern).find_all(haystack)
}

/// One-shot search stopping at the first occurrence.
pub fn search_first(
    pattern: impl AsRef<[u8]>,
    haystack: impl AsRef<[u8]>,
) -> Result<Option<u64>> {
    CompiledPattern::compile(pattern).find_first(haystack)
}

/// One-shot search over a file opened read-only for the duration of the
/// call.
pub fn search_file(pattern: impl AsRef<[u8]>, path: impl AsRef<Path>) -> Result<Vec<u64>> {
    CompiledPattern::compile(pattern).find_all_in_file(path)
}

/// One-shot file search stopping at the first occurrence.
pub fn search_file_first(
    pattern: impl AsRef<[u8]>,
    path: impl AsRef<Path>,
) -> Result<Option<u64>> {
    CompiledPattern::compile(pattern).find_first_in_file(path)
}
