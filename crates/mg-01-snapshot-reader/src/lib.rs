//! # Snapshot Reader (mg-01)
//!
//! Decodes the v3 chain snapshot out of the node's key-value store: the
//! account set, the chain-state records the genesis builders need, and the
//! block/transaction history used for validator key resolution.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Exact Decoding | A record that does not match its schema byte-for-byte aborts the run |
//! | 2 | Address Length | Accounts whose address is not 20 bytes are discarded |
//! | 3 | Key Order | Scans yield records in ascending key order |
//! | 4 | Read Only | The store is never written by the pipeline |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Entities, wire records and the key layout
//! - `ports/` - Reader API (inbound) and store/codec SPI (outbound)
//! - `adapters/` - Bincode record codec
//! - `service.rs` - `SnapshotReader` implementing the API
//!
//! ## Usage
//!
//! ```ignore
//! use mg_01_snapshot_reader::{SnapshotReader, SnapshotReaderApi};
//!
//! let reader = SnapshotReader::new(store);
//! let accounts = reader.read_accounts()?;
//! for item in reader.block_ids_in_range(101, 200)? {
//!     let (height, block_id) = item?;
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use adapters::codec::BincodeRecordCodec;
pub use domain::entities::{
    Account, AccountKeys, BlockHeader, DelegateInfo, DelegateWeight, LegacyAccount,
    RoundVoteWeights, SentVote, Transaction, UnlockingEntry,
};
pub use domain::errors::{KVStoreError, SerializationError};
pub use ports::inbound::{AccountIter, BlockIdIter, SnapshotReaderApi};
pub use ports::outbound::{InMemorySnapshotStore, KvIter, KvPair, RecordCodec, SnapshotStore};
pub use service::SnapshotReader;
