//! Fixture builder for in-memory snapshots.
//!
//! Records are encoded with the production codec so fixtures exercise the
//! same decoding path as a real snapshot.

use shared_types::{Address, BlockId, LegacyAddress, PublicKey, TransactionId};

use crate::adapters::codec::BincodeRecordCodec;
use crate::domain::keys::{
    account_key, block_height_key, block_id_key, transaction_id_key, transactions_by_block_key,
    CHAIN_STATE_DELEGATE_VOTE_WEIGHTS, CHAIN_STATE_UNREGISTERED_ADDRESSES,
};
use crate::domain::records::{
    AccountRecord, BlockHeaderRecord, DelegateRecord, DelegateWeightRecord, DposRecord,
    RoundVoteWeightsRecord, TokenRecord, TransactionRecord, UnlockingRecord,
    UnregisteredAddressRecord, UnregisteredAddressesRecord, VoteRecord, VoteWeightsRecord,
};
use crate::ports::outbound::{InMemorySnapshotStore, RecordCodec};

/// Seconds between fixture blocks.
pub const FIXTURE_BLOCK_TIME: u32 = 10;

pub fn account_record(address: Address, balance: u64) -> AccountRecord {
    AccountRecord {
        address: address.to_vec(),
        token: TokenRecord { balance },
        ..Default::default()
    }
}

pub fn delegate_record(address: Address, balance: u64, username: &str) -> AccountRecord {
    AccountRecord {
        dpos: DposRecord {
            delegate: DelegateRecord {
                username: username.to_string(),
                ..Default::default()
            },
            ..Default::default()
        },
        ..account_record(address, balance)
    }
}

pub fn vote(delegate: Address, amount: u64) -> VoteRecord {
    VoteRecord {
        delegate_address: delegate.to_vec(),
        amount,
    }
}

pub fn unlock(delegate: Address, amount: u64, unvote_height: u32) -> UnlockingRecord {
    UnlockingRecord {
        delegate_address: delegate.to_vec(),
        amount,
        unvote_height,
    }
}

/// Deterministic block id for a fixture height.
pub fn block_id_for(height: u32) -> BlockId {
    let mut id = [0xb1; 32];
    id[..4].copy_from_slice(&height.to_be_bytes());
    id
}

/// Deterministic id of the `index`-th transaction of the block at `height`.
pub fn transaction_id_for(height: u32, index: u32) -> TransactionId {
    let mut id = [0x7c; 32];
    id[..4].copy_from_slice(&height.to_be_bytes());
    id[4..8].copy_from_slice(&index.to_be_bytes());
    id
}

/// Builds an [`InMemorySnapshotStore`] laid out like a v3 node database.
#[derive(Default)]
pub struct SnapshotBuilder {
    store: InMemorySnapshotStore,
    legacy: Vec<UnregisteredAddressRecord>,
    rounds: Vec<RoundVoteWeightsRecord>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn encode<T: serde::Serialize>(record: &T) -> Vec<u8> {
        BincodeRecordCodec
            .encode(record)
            .expect("fixture record encodes")
    }

    pub fn with_account(mut self, record: AccountRecord) -> Self {
        let key = account_key(&record.address);
        self.store.put(key, Self::encode(&record));
        self
    }

    pub fn with_raw(mut self, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        self.store.put(key, value);
        self
    }

    pub fn with_legacy_account(mut self, address: LegacyAddress, balance: u64) -> Self {
        self.legacy.push(UnregisteredAddressRecord {
            address: address.to_vec(),
            balance,
        });
        self
    }

    pub fn with_vote_weights(mut self, round: u32, delegates: &[(Address, u64)]) -> Self {
        self.rounds.push(RoundVoteWeightsRecord {
            round,
            delegates: delegates
                .iter()
                .map(|(address, vote_weight)| DelegateWeightRecord {
                    address: address.to_vec(),
                    vote_weight: *vote_weight,
                })
                .collect(),
        });
        self
    }

    /// Store a block forged by `generator` with one transaction per sender.
    pub fn with_block(mut self, height: u32, generator: PublicKey, senders: &[PublicKey]) -> Self {
        let id = block_id_for(height);
        let header = BlockHeaderRecord {
            version: 2,
            timestamp: height * FIXTURE_BLOCK_TIME,
            height,
            previous_block_id: if height > 1 {
                block_id_for(height - 1).to_vec()
            } else {
                Vec::new()
            },
            generator_public_key: generator.to_vec(),
            ..Default::default()
        };
        self.store.put(block_height_key(height), id.to_vec());
        self.store.put(block_id_key(&id), Self::encode(&header));

        let mut index = Vec::with_capacity(senders.len() * 32);
        for (i, sender) in senders.iter().enumerate() {
            let tx_id = transaction_id_for(height, i as u32);
            let tx = TransactionRecord {
                module_id: 2,
                asset_id: 0,
                nonce: i as u64,
                fee: 10_000_000,
                sender_public_key: sender.to_vec(),
                ..Default::default()
            };
            self.store.put(transaction_id_key(&tx_id), Self::encode(&tx));
            index.extend_from_slice(&tx_id);
        }
        if !senders.is_empty() {
            self.store.put(transactions_by_block_key(&id), index);
        }
        self
    }

    pub fn build(mut self) -> InMemorySnapshotStore {
        if !self.legacy.is_empty() {
            let record = UnregisteredAddressesRecord {
                unregistered_addresses: std::mem::take(&mut self.legacy),
            };
            self.store
                .put(CHAIN_STATE_UNREGISTERED_ADDRESSES, Self::encode(&record));
        }
        if !self.rounds.is_empty() {
            let record = VoteWeightsRecord {
                vote_weights: std::mem::take(&mut self.rounds),
            };
            self.store
                .put(CHAIN_STATE_DELEGATE_VOTE_WEIGHTS, Self::encode(&record));
        }
        self.store
    }
}
