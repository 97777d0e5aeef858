//! # Wire Records
//!
//! Records exactly as the v3 node persisted them. Variable-length byte fields
//! are checked against their fixed sizes when converted into entities; a
//! mismatch is a decode error, never a silent truncation.

use serde::{Deserialize, Serialize};
use shared_types::{MigrationError, MigrationResult, ADDRESS_LENGTH};

use super::entities::{
    Account, AccountKeys, BlockHeader, DelegateInfo, DelegateWeight, LegacyAccount,
    RoundVoteWeights, SentVote, Transaction, UnlockingEntry,
};

fn fixed<const N: usize>(
    bytes: &[u8],
    record: &'static str,
    key: &[u8],
    field: &str,
) -> MigrationResult<[u8; N]> {
    <[u8; N]>::try_from(bytes).map_err(|_| {
        MigrationError::decode(
            record,
            key,
            format!("{field} must be {N} bytes, got {}", bytes.len()),
        )
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub address: Vec<u8>,
    pub token: TokenRecord,
    pub sequence: SequenceRecord,
    pub keys: KeysRecord,
    pub dpos: DposRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub balance: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub nonce: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeysRecord {
    pub number_of_signatures: u32,
    pub mandatory_keys: Vec<Vec<u8>>,
    pub optional_keys: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DposRecord {
    pub delegate: DelegateRecord,
    pub sent_votes: Vec<VoteRecord>,
    pub unlocking: Vec<UnlockingRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegateRecord {
    pub username: String,
    pub pom_heights: Vec<u32>,
    pub consecutive_missed_blocks: u32,
    pub last_forged_height: u32,
    pub is_banned: bool,
    pub total_votes_received: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub delegate_address: Vec<u8>,
    pub amount: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockingRecord {
    pub delegate_address: Vec<u8>,
    pub amount: u64,
    pub unvote_height: u32,
}

impl AccountRecord {
    pub const NAME: &'static str = "account";

    /// Accounts with any other address length are dropped by the reader.
    pub fn has_valid_address(&self) -> bool {
        self.address.len() == ADDRESS_LENGTH
    }

    pub fn into_account(self, key: &[u8]) -> MigrationResult<Account> {
        let name = Self::NAME;
        let address = fixed(&self.address, name, key, "address")?;

        let keys_of = |keys: &[Vec<u8>], field: &str| {
            keys.iter()
                .map(|k| fixed(k, name, key, field))
                .collect::<MigrationResult<Vec<_>>>()
        };

        let sent_votes = self
            .dpos
            .sent_votes
            .iter()
            .map(|vote| {
                Ok(SentVote {
                    delegate_address: fixed(&vote.delegate_address, name, key, "sentVotes.delegateAddress")?,
                    amount: vote.amount,
                })
            })
            .collect::<MigrationResult<Vec<_>>>()?;

        let unlocking = self
            .dpos
            .unlocking
            .iter()
            .map(|unlock| {
                Ok(UnlockingEntry {
                    delegate_address: fixed(&unlock.delegate_address, name, key, "unlocking.delegateAddress")?,
                    amount: unlock.amount,
                    unvote_height: unlock.unvote_height,
                })
            })
            .collect::<MigrationResult<Vec<_>>>()?;

        let delegate = self.dpos.delegate;
        Ok(Account {
            address,
            balance: self.token.balance,
            nonce: self.sequence.nonce,
            keys: AccountKeys {
                number_of_signatures: self.keys.number_of_signatures,
                mandatory_keys: keys_of(&self.keys.mandatory_keys, "mandatoryKeys")?,
                optional_keys: keys_of(&self.keys.optional_keys, "optionalKeys")?,
            },
            delegate: DelegateInfo {
                username: delegate.username,
                pom_heights: delegate.pom_heights,
                consecutive_missed_blocks: delegate.consecutive_missed_blocks,
                last_forged_height: delegate.last_forged_height,
                is_banned: delegate.is_banned,
            },
            sent_votes,
            unlocking,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeaderRecord {
    pub version: u32,
    pub timestamp: u32,
    pub height: u32,
    pub previous_block_id: Vec<u8>,
    pub transaction_root: Vec<u8>,
    pub generator_public_key: Vec<u8>,
    pub reward: u64,
    pub asset: Vec<u8>,
    pub signature: Vec<u8>,
}

impl BlockHeaderRecord {
    pub const NAME: &'static str = "block header";

    pub fn into_header(self, id: [u8; 32], key: &[u8]) -> MigrationResult<BlockHeader> {
        let previous_block_id = if self.previous_block_id.is_empty() {
            // The v3 genesis block has no parent.
            [0u8; 32]
        } else {
            fixed(&self.previous_block_id, Self::NAME, key, "previousBlockID")?
        };
        Ok(BlockHeader {
            id,
            version: self.version,
            timestamp: self.timestamp,
            height: self.height,
            previous_block_id,
            generator_public_key: fixed(
                &self.generator_public_key,
                Self::NAME,
                key,
                "generatorPublicKey",
            )?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub module_id: u32,
    pub asset_id: u32,
    pub nonce: u64,
    pub fee: u64,
    pub sender_public_key: Vec<u8>,
    pub asset: Vec<u8>,
    pub signatures: Vec<Vec<u8>>,
}

impl TransactionRecord {
    pub const NAME: &'static str = "transaction";

    pub fn into_transaction(self, id: [u8; 32], key: &[u8]) -> MigrationResult<Transaction> {
        Ok(Transaction {
            id,
            module_id: self.module_id,
            asset_id: self.asset_id,
            nonce: self.nonce,
            fee: self.fee,
            sender_public_key: fixed(&self.sender_public_key, Self::NAME, key, "senderPublicKey")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnregisteredAddressesRecord {
    pub unregistered_addresses: Vec<UnregisteredAddressRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnregisteredAddressRecord {
    pub address: Vec<u8>,
    pub balance: u64,
}

impl UnregisteredAddressesRecord {
    pub const NAME: &'static str = "unregistered addresses";

    pub fn into_legacy_accounts(self, key: &[u8]) -> MigrationResult<Vec<LegacyAccount>> {
        self.unregistered_addresses
            .into_iter()
            .map(|entry| {
                Ok(LegacyAccount {
                    address: fixed(&entry.address, Self::NAME, key, "address")?,
                    balance: entry.balance,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteWeightsRecord {
    pub vote_weights: Vec<RoundVoteWeightsRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundVoteWeightsRecord {
    pub round: u32,
    pub delegates: Vec<DelegateWeightRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegateWeightRecord {
    pub address: Vec<u8>,
    pub vote_weight: u64,
}

impl VoteWeightsRecord {
    pub const NAME: &'static str = "delegate vote weights";

    pub fn into_rounds(self, key: &[u8]) -> MigrationResult<Vec<RoundVoteWeights>> {
        self.vote_weights
            .into_iter()
            .map(|round| {
                let delegates = round
                    .delegates
                    .into_iter()
                    .map(|d| {
                        Ok(DelegateWeight {
                            address: fixed(&d.address, Self::NAME, key, "delegates.address")?,
                            vote_weight: d.vote_weight,
                        })
                    })
                    .collect::<MigrationResult<Vec<_>>>()?;
                Ok(RoundVoteWeights {
                    round: round.round,
                    delegates,
                })
            })
            .collect()
    }
}
