//! # Domain Errors
//!
//! Store and codec errors. Both fold into [`MigrationError`] at the service
//! boundary: store failures become `Io`, codec failures become `Decode`.

use shared_types::MigrationError;
use thiserror::Error;

/// Key-value store errors.
#[derive(Debug, Clone, Error)]
pub enum KVStoreError {
    /// I/O error during a read.
    #[error("KV store I/O error: {message}")]
    IOError { message: String },
    /// The store reported corruption of its own files.
    #[error("KV store corruption: {message}")]
    CorruptionError { message: String },
}

impl From<KVStoreError> for MigrationError {
    fn from(err: KVStoreError) -> Self {
        MigrationError::Io(err.to_string())
    }
}

/// Record codec errors.
#[derive(Debug, Clone, Error)]
#[error("Serialization error: {message}")]
pub struct SerializationError {
    pub message: String,
}
