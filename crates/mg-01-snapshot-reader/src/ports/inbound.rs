//! # Inbound Ports (Driving Ports)
//!
//! The read API consumed by the validator-key resolver and the migration
//! pipeline. Every method either returns fully decoded data or fails; there
//! is no partial result.

use shared_types::{BlockId, MigrationResult, TransactionId};

use crate::domain::entities::{Account, BlockHeader, LegacyAccount, RoundVoteWeights, Transaction};

/// Ordered, finite, non-restartable sequence of decoded accounts.
pub type AccountIter<'a> = Box<dyn Iterator<Item = MigrationResult<Account>> + 'a>;

/// Ordered sequence of `(height, block id)` pairs.
pub type BlockIdIter<'a> = Box<dyn Iterator<Item = MigrationResult<(u32, BlockId)>> + 'a>;

/// Snapshot read API.
pub trait SnapshotReaderApi {
    /// Stream every account in ascending address order.
    ///
    /// Records are decoded lazily; each item suspends on one store read.
    fn accounts(&self) -> MigrationResult<AccountIter<'_>>;

    /// Collect the full account set.
    fn read_accounts(&self) -> MigrationResult<Vec<Account>> {
        self.accounts()?.collect()
    }

    /// Balances of legacy addresses, in stored order. Empty when absent.
    fn read_legacy_accounts(&self) -> MigrationResult<Vec<LegacyAccount>>;

    /// Recorded top-delegate weights per round. Empty when absent.
    fn read_vote_weights(&self) -> MigrationResult<Vec<RoundVoteWeights>>;

    /// Block ids with height in `from..=to`, ascending by height.
    fn block_ids_in_range(&self, from: u32, to: u32) -> MigrationResult<BlockIdIter<'_>>;

    /// Header stored under `id`. A missing header is an I/O error.
    fn block_header(&self, id: &BlockId) -> MigrationResult<BlockHeader>;

    /// Header of the block at `height`, if one exists.
    fn block_header_at(&self, height: u32) -> MigrationResult<Option<BlockHeader>>;

    /// Transaction ids included in the block. Empty for blocks without any.
    fn transaction_ids(&self, block_id: &BlockId) -> MigrationResult<Vec<TransactionId>>;

    /// Transaction stored under `id`. A missing transaction is an I/O error.
    fn transaction(&self, id: &TransactionId) -> MigrationResult<Transaction>;
}
