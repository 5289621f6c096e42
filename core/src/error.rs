use std::io;
use std::path::PathBuf;

use recovery_math::MathError;
use thiserror::Error;

/// Result type specialized for recovery operations.
pub type Result<T, E = RecoveryError> = std::result::Result<T, E>;

/// Errors that can arise while recovering a secret.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error(transparent)]
    Math(#[from] MathError),
    #[error("insufficient points: need at least {required}, got {available}")]
    InsufficientPoints { required: usize, available: usize },
    #[error("no subset of {points} points with threshold {threshold} interpolates to an integer")]
    NoConsensus { points: usize, threshold: usize },
    #[error("missing or non-numeric `keys.k` threshold")]
    MissingThreshold,
    #[error("share {label}: {reason}")]
    MalformedShare { label: String, reason: String },
    #[error("invalid share label {0:?}: expected a positive integer")]
    InvalidLabel(String),
    #[error("share label {0} appears more than once")]
    DuplicateLabel(u64),
    #[error("malformed share document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RecoveryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RecoveryError::Io {
            path: path.into(),
            source,
        }
    }
}
