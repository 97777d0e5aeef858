//! # Error Types
//!
//! The migration error taxonomy. Every variant is fatal for the run: the
//! genesis state is consumed exactly once, so no stage produces partial or
//! best-effort output.

use thiserror::Error;

use crate::entities::Amount;

/// Errors that abort a migration run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MigrationError {
    /// A stored record's bytes violate its schema. Never retried.
    #[error("Decode error: {record} record at key {key}: {reason}")]
    Decode {
        /// Record type being decoded.
        record: &'static str,
        /// Hex-encoded store key of the record.
        key: String,
        /// What did not match.
        reason: String,
    },

    /// Snapshot height parameters are inconsistent.
    #[error("Invalid height range: {0}")]
    InvalidRange(String),

    /// Historical chain state needed for genesis is absent or empty.
    #[error("Missing historical data: {0}")]
    MissingHistoricalData(String),

    /// Underlying storage unreachable, read failure, or dangling index.
    #[error("Storage I/O error: {0}")]
    Io(String),

    /// Token supply does not equal the sum of emitted user balances.
    #[error("Supply mismatch: total supply {total_supply} != user substore sum {user_sum}")]
    SupplyMismatch {
        /// Supply accumulated over the account set.
        total_supply: Amount,
        /// Sum of available and locked balances in the user substore.
        user_sum: Amount,
    },

    /// An amount sum exceeded the range of [`Amount`].
    #[error("Amount overflow while summing {0}")]
    Overflow(&'static str),

    /// A protocol constant or parameter is misconfigured.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Genesis data could not be rendered.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result alias used throughout the pipeline.
pub type MigrationResult<T> = Result<T, MigrationError>;

impl MigrationError {
    /// Build a [`MigrationError::Decode`] for the record stored under `key`.
    pub fn decode(record: &'static str, key: &[u8], reason: impl Into<String>) -> Self {
        MigrationError::Decode {
            record,
            key: hex::encode(key),
            reason: reason.into(),
        }
    }
}
