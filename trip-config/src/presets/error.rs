//! Preset error types.

use std::path::PathBuf;

use crate::domain::{InvalidLineId, LineId};

/// Errors that can occur when loading or resolving presets.
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    /// Preset file could not be read
    #[error("failed to read presets {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Preset JSON is malformed
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A preset names an invalid line id
    #[error("preset {label:?}: {source}")]
    InvalidLine {
        label: String,
        source: InvalidLineId,
    },

    /// A preset names a line the catalog does not have
    #[error("preset {label:?}: line {line} is not in the catalog")]
    UnknownLine { label: String, line: LineId },
}
