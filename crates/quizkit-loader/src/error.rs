//! Curriculum load error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the curriculum catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The request never got a response (connection refused, DNS, timeout,
    /// or the body stream broke off).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Failed to load curriculum data")]
    BadResponse { status: u16 },

    /// The body was not a valid curriculum document.
    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    /// A local curriculum file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl LoadError {
    /// The HTTP status of a rejected response, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            LoadError::BadResponse { status } => Some(*status),
            LoadError::Transport(e) => e.status().map(|s| s.as_u16()),
            LoadError::Parse(_) | LoadError::Io { .. } => None,
        }
    }
}
