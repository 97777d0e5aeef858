//! # Outbound Ports (Driven Ports)
//!
//! Dependencies required by the snapshot reader.
//!
//! Production: `RocksDbSnapshotStore` (migrator-runtime/adapters/storage/rocksdb_adapter.rs)
//! Testing: `InMemorySnapshotStore` (below)

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::errors::{KVStoreError, SerializationError};

/// A raw key-value pair as stored.
pub type KvPair = (Vec<u8>, Vec<u8>);

/// Ascending iterator over raw store entries.
pub type KvIter<'a> = Box<dyn Iterator<Item = Result<KvPair, KVStoreError>> + 'a>;

/// Abstract interface for read-only key-value access.
pub trait SnapshotStore: Send + Sync {
    /// Get a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError>;

    /// Iterate in ascending key order starting at the first key `>= start`.
    fn iter_from(&self, start: &[u8]) -> Result<KvIter<'_>, KVStoreError>;

    /// Iterate over keys with a prefix.
    fn prefix_scan(&self, prefix: &[u8]) -> Result<KvIter<'_>, KVStoreError> {
        let prefix = prefix.to_vec();
        let iter = self.iter_from(&prefix)?;
        Ok(Box::new(iter.take_while(move |item| match item {
            Ok((key, _)) => key.starts_with(&prefix),
            Err(_) => true,
        })))
    }

    /// Iterate over keys in `start..=end`.
    fn range_scan(&self, start: &[u8], end: &[u8]) -> Result<KvIter<'_>, KVStoreError> {
        let end = end.to_vec();
        let iter = self.iter_from(start)?;
        Ok(Box::new(iter.take_while(move |item| match item {
            Ok((key, _)) => key.as_slice() <= end.as_slice(),
            Err(_) => true,
        })))
    }
}

/// Abstract interface for the snapshot record codec.
pub trait RecordCodec: Send + Sync {
    /// Serialize a record to bytes.
    fn encode<T: Serialize>(&self, record: &T) -> Result<Vec<u8>, SerializationError>;

    /// Deserialize bytes to a record. Trailing bytes are an error.
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, SerializationError>;
}

// =============================================================================
// ADAPTER IMPLEMENTATIONS
// Production: RocksDbSnapshotStore in migrator-runtime
// Testing: In-memory implementation below
// =============================================================================

/// In-memory ordered key-value store for tests and fixtures.
#[derive(Debug, Default, Clone)]
pub struct InMemorySnapshotStore {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn iter_from(&self, start: &[u8]) -> Result<KvIter<'_>, KVStoreError> {
        Ok(Box::new(
            self.data
                .range(start.to_vec()..)
                .map(|(k, v)| Ok((k.clone(), v.clone()))),
        ))
    }
}
