//! # Adapters
//!
//! Port implementations that need native dependencies.

pub mod storage;

pub use storage::{RocksDbConfig, RocksDbSnapshotStore};
