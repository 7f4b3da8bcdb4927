//! Catalog loading error types.

use std::path::PathBuf;

use crate::domain::{InvalidLineId, LineId};

/// Errors that can occur when loading a station catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Catalog JSON is malformed or has the wrong shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A line key is not a valid identifier
    #[error(transparent)]
    InvalidLine(#[from] InvalidLineId),

    /// The same line appears twice
    #[error("duplicate line {0}")]
    DuplicateLine(LineId),

    /// Two stations on one line share a stop name
    #[error("duplicate stop {stop_name} on line {line}")]
    DuplicateStop { line: LineId, stop_name: String },
}
