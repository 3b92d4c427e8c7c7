//! Error types for rendering and file handling.
//!
//! Tree traversal and escaping are total and cannot fail; the only checked
//! failures sit at the edges, where a destination file is created, written,
//! or read back. Nothing is retried and nothing is swallowed: either the
//! whole tree reaches the destination, or the call fails at the point of
//! opening it.

use thiserror::Error;

/// Result type alias for scrawl operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The destination file could not be created, opened, or found.
    #[error("no file could be created or found at `{path}`")]
    NoFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A file read back did not contain valid UTF-8 text.
    #[error("file at `{path}` did not contain valid UTF-8 text")]
    BadData { path: String },

    /// Writing out the rendered document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
