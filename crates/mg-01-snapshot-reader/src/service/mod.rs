//! # Snapshot Reader Service
//!
//! Implements [`SnapshotReaderApi`] over any [`SnapshotStore`] and
//! [`RecordCodec`]. Store errors surface as `MigrationError::Io`, codec
//! errors as `MigrationError::Decode` carrying the offending key.


use serde::de::DeserializeOwned;
use shared_types::{BlockId, MigrationError, MigrationResult, TransactionId, ID_LENGTH};
use tracing::{debug, info, warn};

use crate::adapters::codec::BincodeRecordCodec;
use crate::domain::entities::{
    Account, BlockHeader, LegacyAccount, RoundVoteWeights, Transaction,
};
use crate::domain::keys::{
    block_height_key, block_id_key, height_from_key, transaction_id_key,
    transactions_by_block_key, CHAIN_STATE_DELEGATE_VOTE_WEIGHTS,
    CHAIN_STATE_UNREGISTERED_ADDRESSES, DB_KEY_ACCOUNTS_ADDRESS,
};
use crate::domain::records::{
    AccountRecord, BlockHeaderRecord, TransactionRecord, UnregisteredAddressesRecord,
    VoteWeightsRecord,
};
use crate::ports::inbound::{AccountIter, BlockIdIter, SnapshotReaderApi};
use crate::ports::outbound::{RecordCodec, SnapshotStore};

const BLOCK_HEIGHT_INDEX: &str = "block height index";
const TRANSACTION_INDEX: &str = "block transaction index";

/// The Snapshot Reader.
pub struct SnapshotReader<S, C = BincodeRecordCodec>
where
    S: SnapshotStore,
    C: RecordCodec,
{
    store: S,
    codec: C,
}

impl<S: SnapshotStore> SnapshotReader<S> {
    /// Create a reader using the snapshot's bincode codec.
    pub fn new(store: S) -> Self {
        Self::with_codec(store, BincodeRecordCodec)
    }
}

impl<S, C> SnapshotReader<S, C>
where
    S: SnapshotStore,
    C: RecordCodec,
{
    pub fn with_codec(store: S, codec: C) -> Self {
        Self { store, codec }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn decode<T: DeserializeOwned>(
        &self,
        record: &'static str,
        key: &[u8],
        bytes: &[u8],
    ) -> MigrationResult<T> {
        self.codec
            .decode(bytes)
            .map_err(|e| MigrationError::decode(record, key, e.message))
    }

    fn to_id(record: &'static str, key: &[u8], bytes: &[u8]) -> MigrationResult<BlockId> {
        <[u8; ID_LENGTH]>::try_from(bytes).map_err(|_| {
            MigrationError::decode(
                record,
                key,
                format!("id must be {ID_LENGTH} bytes, got {}", bytes.len()),
            )
        })
    }
}

impl<S, C> SnapshotReaderApi for SnapshotReader<S, C>
where
    S: SnapshotStore,
    C: RecordCodec,
{
    fn accounts(&self) -> MigrationResult<AccountIter<'_>> {
        let scan = self.store.prefix_scan(DB_KEY_ACCOUNTS_ADDRESS)?;
        Ok(Box::new(scan.filter_map(move |item| -> Option<MigrationResult<Account>> {
            let (key, value) = match item {
                Ok(pair) => pair,
                Err(e) => return Some(Err(e.into())),
            };
            let record: AccountRecord = match self.decode(AccountRecord::NAME, &key, &value) {
                Ok(record) => record,
                Err(e) => return Some(Err(e)),
            };
            if !record.has_valid_address() {
                warn!(
                    key = %hex::encode(&key),
                    address_len = record.address.len(),
                    "[mg-01] Skipping account with invalid address length"
                );
                return None;
            }
            Some(record.into_account(&key))
        })))
    }

    fn read_accounts(&self) -> MigrationResult<Vec<Account>> {
        let accounts = self.accounts()?.collect::<MigrationResult<Vec<_>>>()?;
        info!(count = accounts.len(), "[mg-01] Accounts decoded");
        Ok(accounts)
    }

    fn read_legacy_accounts(&self) -> MigrationResult<Vec<LegacyAccount>> {
        let key = CHAIN_STATE_UNREGISTERED_ADDRESSES;
        let Some(bytes) = self.store.get(key)? else {
            info!("[mg-01] No unregistered addresses recorded");
            return Ok(Vec::new());
        };
        let record: UnregisteredAddressesRecord =
            self.decode(UnregisteredAddressesRecord::NAME, key, &bytes)?;
        let accounts = record.into_legacy_accounts(key)?;
        info!(count = accounts.len(), "[mg-01] Legacy accounts decoded");
        Ok(accounts)
    }

    fn read_vote_weights(&self) -> MigrationResult<Vec<RoundVoteWeights>> {
        let key = CHAIN_STATE_DELEGATE_VOTE_WEIGHTS;
        let Some(bytes) = self.store.get(key)? else {
            return Ok(Vec::new());
        };
        let record: VoteWeightsRecord = self.decode(VoteWeightsRecord::NAME, key, &bytes)?;
        let rounds = record.into_rounds(key)?;
        debug!(rounds = rounds.len(), "[mg-01] Delegate vote weights decoded");
        Ok(rounds)
    }

    fn block_ids_in_range(&self, from: u32, to: u32) -> MigrationResult<BlockIdIter<'_>> {
        if from > to {
            return Ok(Box::new(std::iter::empty()));
        }
        let scan = self
            .store
            .range_scan(&block_height_key(from), &block_height_key(to))?;
        Ok(Box::new(scan.map(|item| -> MigrationResult<(u32, BlockId)> {
            let (key, value) = item?;
            let height = height_from_key(&key).ok_or_else(|| {
                MigrationError::decode(BLOCK_HEIGHT_INDEX, &key, "malformed height key")
            })?;
            let id = Self::to_id(BLOCK_HEIGHT_INDEX, &key, &value)?;
            Ok((height, id))
        })))
    }

    fn block_header(&self, id: &BlockId) -> MigrationResult<BlockHeader> {
        let key = block_id_key(id);
        let bytes = self.store.get(&key)?.ok_or_else(|| {
            MigrationError::Io(format!("block header {} not found", hex::encode(id)))
        })?;
        let record: BlockHeaderRecord = self.decode(BlockHeaderRecord::NAME, &key, &bytes)?;
        record.into_header(*id, &key)
    }

    fn block_header_at(&self, height: u32) -> MigrationResult<Option<BlockHeader>> {
        let key = block_height_key(height);
        match self.store.get(&key)? {
            Some(bytes) => {
                let id = Self::to_id(BLOCK_HEIGHT_INDEX, &key, &bytes)?;
                self.block_header(&id).map(Some)
            }
            None => Ok(None),
        }
    }

    fn transaction_ids(&self, block_id: &BlockId) -> MigrationResult<Vec<TransactionId>> {
        let key = transactions_by_block_key(block_id);
        let Some(bytes) = self.store.get(&key)? else {
            return Ok(Vec::new());
        };
        if bytes.len() % ID_LENGTH != 0 {
            return Err(MigrationError::decode(
                TRANSACTION_INDEX,
                &key,
                format!(
                    "length {} is not a multiple of {ID_LENGTH}",
                    bytes.len()
                ),
            ));
        }
        bytes
            .chunks_exact(ID_LENGTH)
            .map(|chunk| Self::to_id(TRANSACTION_INDEX, &key, chunk))
            .collect()
    }

    fn transaction(&self, id: &TransactionId) -> MigrationResult<Transaction> {
        let key = transaction_id_key(id);
        let bytes = self.store.get(&key)?.ok_or_else(|| {
            MigrationError::Io(format!("transaction {} not found", hex::encode(id)))
        })?;
        let record: TransactionRecord = self.decode(TransactionRecord::NAME, &key, &bytes)?;
        record.into_transaction(*id, &key)
    }
}
