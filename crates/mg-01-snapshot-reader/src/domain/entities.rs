//! # Snapshot Entities
//!
//! Decoded snapshot types with every fixed-length field checked. Built once
//! per run and treated as immutable afterwards.

use shared_types::{Address, BlockId, LegacyAddress, PublicKey, TransactionId};

/// One account of the v3 snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Unique 20-byte address.
    pub address: Address,
    /// Available token balance.
    pub balance: u64,
    /// Replay-protection counter.
    pub nonce: u64,
    /// Multisignature configuration.
    pub keys: AccountKeys,
    /// Delegate registration (empty username when not a delegate).
    pub delegate: DelegateInfo,
    /// Votes currently held by delegates.
    pub sent_votes: Vec<SentVote>,
    /// Unvoted amounts waiting to be unlocked.
    pub unlocking: Vec<UnlockingEntry>,
}

impl Account {
    /// True when the account registered a delegate username.
    pub fn is_validator(&self) -> bool {
        !self.delegate.username.is_empty()
    }

    /// True when the account has votes or pending unlocks.
    pub fn is_staker(&self) -> bool {
        !self.sent_votes.is_empty() || !self.unlocking.is_empty()
    }
}

/// Multisignature keys of an account, in snapshot order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountKeys {
    pub number_of_signatures: u32,
    pub mandatory_keys: Vec<PublicKey>,
    pub optional_keys: Vec<PublicKey>,
}

/// Delegate sub-record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelegateInfo {
    pub username: String,
    /// Heights at which proof-of-misbehavior was reported.
    pub pom_heights: Vec<u32>,
    pub consecutive_missed_blocks: u32,
    pub last_forged_height: u32,
    pub is_banned: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentVote {
    pub delegate_address: Address,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockingEntry {
    pub delegate_address: Address,
    pub amount: u64,
    pub unvote_height: u32,
}

/// Balance held by an address that never registered a public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyAccount {
    pub address: LegacyAddress,
    pub balance: u64,
}

/// The header fields the pipeline consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    /// Identifier the header is stored under.
    pub id: BlockId,
    pub version: u32,
    pub timestamp: u32,
    pub height: u32,
    pub previous_block_id: BlockId,
    pub generator_public_key: PublicKey,
}

/// The transaction fields the pipeline consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub module_id: u32,
    pub asset_id: u32,
    pub nonce: u64,
    pub fee: u64,
    pub sender_public_key: PublicKey,
}

/// Top delegate weights recorded for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundVoteWeights {
    pub round: u32,
    pub delegates: Vec<DelegateWeight>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegateWeight {
    pub address: Address,
    pub vote_weight: u64,
}
