// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled search patterns.
//!
//! Compiling a pattern runs the full Boyer-Moore preprocessing once; the
//! result is immutable and reusable across unlimited searches, including
//! read-only sharing across threads.

use std::path::Path;
use std::sync::atomic::AtomicBool;

use crate::error::Result;
use crate::scanner;
use crate::source::{BufferSource, ByteSource, FileSource};
use crate::tables::{BadCharTable, full_shift_table, good_suffix_table};

/// A pattern with its precomputed shift tables.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub(crate) bytes: Vec<u8>,
    pub(crate) bad_char: BadCharTable,
    pub(crate) good_suffix: Vec<i64>,
    pub(crate) full_shift: Vec<u64>,
}

impl CompiledPattern {
    /// Compile a pattern, building all three shift tables.
    ///
    /// Accepts anything byte-like; text patterns contribute their UTF-8
    /// bytes and matching stays byte-exact (no case folding, no
    /// code-point awareness).
    pub fn compile(pattern: impl AsRef<[u8]>) -> Self {
        let bytes = pattern.as_ref().to_vec();
        tracing::trace!(len = bytes.len(), "compiling pattern");

        Self {
            bad_char: BadCharTable::build(&bytes),
            good_suffix: good_suffix_table(&bytes),
            full_shift: full_shift_table(&bytes),
            bytes,
        }
    }

    /// The pattern bytes.
    pub fn pattern(&self) -> &[u8] {
        &self.bytes
    }

    /// Pattern length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the pattern is empty (an empty pattern matches nothing).
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// All occurrences in a resident buffer, in ascending offset order.
    pub fn find_all(&self, haystack: impl AsRef<[u8]>) -> Result<Vec<u64>> {
        let mut source = BufferSource::new(haystack.as_ref());
        scanner::scan(self, &mut source, true)
    }

    /// First occurrence in a resident buffer, if any.
    pub fn find_first(&self, haystack: impl AsRef<[u8]>) -> Result<Option<u64>> {
        let mut source = BufferSource::new(haystack.as_ref());
        Ok(scanner::scan(self, &mut source, false)?.into_iter().next())
    }

    /// All occurrences in a file, in ascending offset order.
    ///
    /// The file is opened read-only and closed when the search returns,
    /// whatever the outcome.
    pub fn find_all_in_file(&self, path: impl AsRef<Path>) -> Result<Vec<u64>> {
        let mut source = FileSource::open(path)?;
        scanner::scan(self, &mut source, true)
    }

    /// First occurrence in a file, if any.
    pub fn find_first_in_file(&self, path: impl AsRef<Path>) -> Result<Option<u64>> {
        let mut source = FileSource::open(path)?;
        Ok(scanner::scan(self, &mut source, false)?.into_iter().next())
    }

    /// Occurrences in an arbitrary [`ByteSource`].
    pub fn find_in<S: ByteSource>(&self, source: &mut S, greedy: bool) -> Result<Vec<u64>> {
        scanner::scan(self, source, greedy)
    }

    /// Like [`find_in`](Self::find_in), but abortable through `cancel`.
    pub fn find_in_cancellable<S: ByteSource>(
        &self,
        source: &mut S,
        greedy: bool,
        cancel: &AtomicBool,
    ) -> Result<Vec<u64>> {
        scanner::scan_cancellable(self, source, greedy, cancel)
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
