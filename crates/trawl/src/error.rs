// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Trawl error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error while opening or reading a stream-backed source.
    ///
    /// Propagated unmodified; the library neither retries nor masks I/O
    /// failures. A failure mid-scan aborts the search and discards any
    /// matches accumulated in that call.
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A cancellable search observed its cancellation flag.
    #[error("search cancelled")]
    Cancelled,
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type using trawl Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
