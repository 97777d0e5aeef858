//! # RocksDB Snapshot Store
//!
//! Read-only RocksDB implementation of the `SnapshotStore` port.
//!
//! ## Configuration
//!
//! Tuned for one sequential pass over the whole database:
//! - LRU block cache (256MB default)
//! - Bloom filters (10 bits per key) for the point lookups of the resolver

use std::path::{Path, PathBuf};

use mg_01_snapshot_reader::{KVStoreError, KvIter, SnapshotStore};
use rocksdb::{BlockBasedOptions, Cache, Direction, IteratorMode, Options, DB};
use tracing::info;

/// RocksDB configuration for reading a snapshot.
#[derive(Debug, Clone)]
pub struct RocksDbConfig {
    /// Path to the database directory
    pub path: PathBuf,
    /// Block cache size in bytes (default: 256MB)
    pub block_cache_size: usize,
}

impl Default for RocksDbConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./data/blockchain.db"),
            block_cache_size: 256 * 1024 * 1024,
        }
    }
}

impl RocksDbConfig {
    /// Smaller cache for tests.
    pub fn for_testing(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            block_cache_size: 8 * 1024 * 1024,
        }
    }
}

/// RocksDB-backed snapshot store. Never writes.
pub struct RocksDbSnapshotStore {
    db: DB,
}

impl RocksDbSnapshotStore {
    /// Open an existing database read-only.
    pub fn open_read_only(config: &RocksDbConfig) -> Result<Self, KVStoreError> {
        let mut opts = Options::default();
        opts.create_if_missing(false);

        let mut block_opts = BlockBasedOptions::default();
        block_opts.set_bloom_filter(10.0, false);
        block_opts.set_block_cache(&Cache::new_lru_cache(config.block_cache_size));
        opts.set_block_based_table_factory(&block_opts);

        let db = DB::open_for_read_only(&opts, &config.path, false).map_err(|e| {
            KVStoreError::IOError {
                message: format!("Failed to open RocksDB at {}: {}", config.path.display(), e),
            }
        })?;
        info!(path = %config.path.display(), "Snapshot database opened read-only");
        Ok(Self { db })
    }

    pub fn path(&self) -> &Path {
        self.db.path()
    }
}

fn map_error(e: rocksdb::Error) -> KVStoreError {
    match e.kind() {
        rocksdb::ErrorKind::Corruption => KVStoreError::CorruptionError {
            message: e.to_string(),
        },
        _ => KVStoreError::IOError {
            message: format!("RocksDB read failed: {}", e),
        },
    }
}

impl SnapshotStore for RocksDbSnapshotStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        self.db.get(key).map_err(map_error)
    }

    fn iter_from(&self, start: &[u8]) -> Result<KvIter<'_>, KVStoreError> {
        let iter = self
            .db
            .iterator(IteratorMode::From(start, Direction::Forward));
        Ok(Box::new(iter.map(|item| {
            item.map(|(key, value)| (key.into_vec(), value.into_vec()))
                .map_err(map_error)
        })))
    }
}
