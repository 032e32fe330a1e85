//! Error types for dynam-translate
//!
//! All failures are per-descriptor: the batch driver reports them with the
//! offending file name and moves on to the next descriptor.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Per-file translation errors
#[derive(Debug, Error)]
pub enum Error {
    /// Descriptor matched a category but misses or misuses a required field
    #[error("Malformed descriptor {}: {}", .file.display(), .reason)]
    MalformedDescriptor { file: PathBuf, reason: String },

    /// Descriptor file is not parseable even as permissive JSON
    #[error("Unparseable descriptor {}: {}", .file.display(), .message)]
    Parse { file: PathBuf, message: String },

    /// Descriptor file could not be read
    #[error("Failed to read {}: {}", .file.display(), .source)]
    Read {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Audio file could not be opened or measured
    #[error("Failed to probe {}: {}", .path.display(), .message)]
    Probe { path: PathBuf, message: String },

    /// Output module could not be written
    #[error("Failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
