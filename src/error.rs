//! Error types for fixture loading, comparison, and updates.

use crate::report::{MismatchReport, UpdateReport};
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by fixture operations
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The same path was added twice to one in-memory fixture set.
    #[error("set already has path: {0}")]
    DuplicatePath(String),

    #[error("invalid fixture path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },

    /// Reading fixtures from disk failed for a reason other than a missing directory.
    #[error("failed to load fixtures from {path}: {source}")]
    LoadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    UpdateFailure(UpdateReport),

    #[error("{0}")]
    CompareMismatch(MismatchReport),

    #[error("{0}")]
    ConfigError(String),
}

impl FixtureError {
    pub(crate) fn load(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FixtureError::LoadFailure {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        FixtureError::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl From<config::ConfigError> for FixtureError {
    fn from(err: config::ConfigError) -> Self {
        FixtureError::ConfigError(format!("failed to load settings: {}", err))
    }
}
