use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for trajectory persistence
pub type Result<T> = std::result::Result<T, TrajectoryError>;

/// Errors raised while saving or loading a trajectory file
#[derive(Error, Debug)]
pub enum TrajectoryError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid point count: {0:?}")]
    InvalidCount(String),

    #[error("Missing value for control point {index}")]
    MissingValue { index: usize },

    #[error("Invalid number {token:?} in control point {index}")]
    InvalidNumber { index: usize, token: String },

    #[error("Unexpected data after {expected} control points")]
    TrailingData { expected: usize },
}

impl TrajectoryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TrajectoryError::Io {
            path: path.into(),
            source,
        }
    }
}
