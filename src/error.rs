//! Error types for the fatal failure paths.
//!
//! Anything that goes wrong while walking the tree or probing git is
//! recovered in place and encoded into the snapshot itself. Only the
//! failures below abort a run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that terminate a snapshot run.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// An ignore pattern is not a valid regular expression.
    #[error("invalid ignore pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The snapshot could not be encoded or decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An artifact could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SnapshotError {
    /// Create a write error with path context.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SnapshotError>;
