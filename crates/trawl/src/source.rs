// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Random-access byte sources.
//!
//! The scanner addresses its haystack through one capability surface:
//! total length plus a positional single-byte read. Two interchangeable
//! kinds exist: a resident buffer and a seekable file. A source is
//! scoped to one search; concurrent searches each need their own.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Read-ahead window size for file-backed sources (64KB).
pub const READAHEAD_SIZE: u64 = 64 * 1024;

/// Uniform random-access byte addressing of known total length.
///
/// Callers must keep `offset < len()`.
pub trait ByteSource {
    /// Total number of addressable bytes.
    fn len(&self) -> u64;

    /// Whether the source holds no bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the byte at `offset`.
    fn peek(&mut self, offset: u64) -> Result<u8>;
}

/// Buffer-backed source: direct indexed reads, never fails.
#[derive(Debug)]
pub struct BufferSource<'a> {
    bytes: &'a [u8],
}

impl<'a> BufferSource<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }
}

impl ByteSource for BufferSource<'_> {
    fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn peek(&mut self, offset: u64) -> Result<u8> {
        debug_assert!(offset < self.len());
        Ok(self.bytes[offset as usize])
    }
}

/// File-backed source.
///
/// Opens the file read-only and determines its total length up front via
/// seek-to-end, restoring the position before scanning starts. Reads are
/// served from a sliding read-ahead window; a `peek` outside the window
/// seeks and refills it around the requested offset. The window is
/// invisible at the `peek` contract: observable behavior is identical to
/// an unbuffered seek-and-read per byte. The file handle is closed when
/// the source drops, on every exit path.
#[derive(Debug)]
pub struct FileSource {
    file: File,
    path: PathBuf,
    len: u64,
    window: Vec<u8>,
    window_start: u64,
}

impl FileSource {
    /// Open `path` read-only and probe its length.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut file = File::open(&path).map_err(|e| Error::io(&path, e))?;

        let len = file
            .seek(SeekFrom::End(0))
            .map_err(|e| Error::io(&path, e))?;
        file.rewind().map_err(|e| Error::io(&path, e))?;

        tracing::debug!(path = %path.display(), len, "opened file source");

        Ok(Self {
            file,
            path,
            len,
            window: Vec::new(),
            window_start: 0,
        })
    }

    /// Refill the window around `offset`, keeping bytes on both sides
    /// resident: within an alignment the scanner walks leftward, between
    /// alignments it jumps rightward.
    fn refill(&mut self, offset: u64) -> Result<()> {
        let start = offset.saturating_sub(READAHEAD_SIZE / 2);
        let want = READAHEAD_SIZE.min(self.len - start) as usize;

        self.file
            .seek(SeekFrom::Start(start))
            .map_err(|e| Error::io(&self.path, e))?;
        self.window.resize(want, 0);
        self.file
            .read_exact(&mut self.window)
            .map_err(|e| Error::io(&self.path, e))?;
        self.window_start = start;

        Ok(())
    }

    fn in_window(&self, offset: u64) -> bool {
        offset >= self.window_start && offset - self.window_start < self.window.len() as u64
    }
}

impl ByteSource for FileSource {
    fn len(&self) -> u64 {
        self.len
    }

    fn peek(&mut self, offset: u64) -> Result<u8> {
        debug_assert!(offset < self.len);
        if !self.in_window(offset) {
            self.refill(offset)?;
        }
        Ok(self.window[(offset - self.window_start) as usize])
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
