use std::{error::Error, path::PathBuf};
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by score stores regardless of the underlying medium.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No record has been persisted yet.
    #[error("high score record not found at `{}`", .path.display())]
    Missing {
        /// Location that was expected to hold the record.
        path: PathBuf,
    },
    /// The persisted record exists but is not a valid high score document.
    #[error("high score record at `{}` is corrupt", .path.display())]
    Corrupt {
        /// Location of the unreadable record.
        path: PathBuf,
        /// Parse failure reported by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The backing medium failed for a reason other than a missing or corrupt record.
    #[error("storage unavailable: {message}")]
    Unavailable {
        /// Operation that failed.
        message: String,
        /// Underlying backend error.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message,
            source: Box::new(source),
        }
    }

    /// Short label for the failure, used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            StorageError::Missing { .. } => "missing",
            StorageError::Corrupt { .. } => "corrupt",
            StorageError::Unavailable { .. } => "unavailable",
        }
    }
}
