//! Error types

mod api;

use std::path::PathBuf;

pub use api::*;

/// Errors raised while loading a dataset.
///
/// The selection engine itself never fails; these only come out of the
/// [`source`](crate::source) collaborators.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to read a dataset file.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Dataset was not valid JSON or had the wrong shape.
    #[error("Invalid dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// Remote API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    /// Creates an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
