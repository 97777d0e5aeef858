use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::errors::SerializationError;
use crate::ports::outbound::RecordCodec;

/// Upper bound on a single decoded record.
pub const MAX_RECORD_SIZE: u64 = 64 * 1024 * 1024;

/// Snapshot record codec using bincode.
///
/// Fixed-width little-endian integers; a record must consume its input
/// exactly, so trailing bytes are rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct BincodeRecordCodec;

impl BincodeRecordCodec {
    fn options() -> impl Options {
        bincode::DefaultOptions::new()
            .with_fixint_encoding()
            .with_little_endian()
            .reject_trailing_bytes()
            .with_limit(MAX_RECORD_SIZE)
    }
}

impl RecordCodec for BincodeRecordCodec {
    fn encode<T: Serialize>(&self, record: &T) -> Result<Vec<u8>, SerializationError> {
        Self::options()
            .serialize(record)
            .map_err(|e| SerializationError {
                message: e.to_string(),
            })
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, SerializationError> {
        Self::options()
            .deserialize(bytes)
            .map_err(|e| SerializationError {
                message: e.to_string(),
            })
    }
}
