//! Thin file-system helper layer for `.html` destinations.
//!
//! Documents live at `<path><name>.html`; the path is joined verbatim, so a
//! directory path should end with its separator, e.g. `/tmp/`. The read-back
//! helper exists for test harnesses asserting on rendered output; the file
//! format is nothing more than the rendered markup text.

use std::fs::{self, File};

use crate::error::{Error, Result};
use crate::tracing_macros::trace;

/// Full path for a named document: `<path><name>.html`.
pub fn document_path(name: &str, path: &str) -> String {
    format!("{path}{name}.html")
}

/// Create (or truncate) the document file, returning the open handle.
pub fn create(name: &str, path: &str) -> Result<File> {
    let full = document_path(name, path);
    trace!("creating {full}");
    File::create(&full).map_err(|source| Error::NoFile { path: full, source })
}

/// Delete the document file.
pub fn delete(name: &str, path: &str) -> Result<()> {
    let full = document_path(name, path);
    trace!("deleting {full}");
    fs::remove_file(&full).map_err(|source| Error::NoFile { path: full, source })
}

/// Read the document file back as a string.
pub fn read_to_string(name: &str, path: &str) -> Result<String> {
    let full = document_path(name, path);
    let bytes = fs::read(&full).map_err(|source| Error::NoFile {
        path: full.clone(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| Error::BadData { path: full })
}

// =============================================================================
// Tests
// =============================================================================
