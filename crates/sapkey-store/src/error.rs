//! Error types for the key store

use std::path::PathBuf;

/// Key store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A record with this key already exists
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// Key is empty after trimming
    #[error("key must not be empty")]
    EmptyKey,

    /// Backing storage cannot be reached
    #[error("store unavailable at {path}: {source}")]
    Unavailable {
        /// Location of the backing storage
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Stored data violates the collection invariants
    #[error("store corrupt: {0}")]
    Corrupt(String),

    /// Any other backend failure
    #[error("store backend failure: {0}")]
    Backend(String),
}

impl StoreError {
    /// Create unavailable error for path
    pub fn unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Unavailable {
            path: path.into(),
            source,
        }
    }

    /// Check if the error was caused by the record being written
    #[inline]
    #[must_use]
    pub fn is_rejected_record(&self) -> bool {
        matches!(self, Self::DuplicateKey(_) | Self::EmptyKey)
    }
}
