//! # Production Storage Adapters
//!
//! The snapshot is read from the v3 node's RocksDB directory. The database
//! is opened read-only so a migration run can never alter it.

pub mod rocksdb_adapter;

pub use rocksdb_adapter::{RocksDbConfig, RocksDbSnapshotStore};

// Re-export the in-memory store for tests
pub use mg_01_snapshot_reader::InMemorySnapshotStore;
