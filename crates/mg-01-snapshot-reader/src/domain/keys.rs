//! # Store Key Layout
//!
//! The v3 node stores every record under an ASCII prefix. Heights inside
//! keys are 4-byte big-endian so lexicographic key order equals height order.

use shared_types::{BlockId, TransactionId};

pub const DB_KEY_ACCOUNTS_ADDRESS: &[u8] = b"accounts:address:";
pub const DB_KEY_BLOCKS_HEIGHT: &[u8] = b"blocks:height:";
pub const DB_KEY_BLOCKS_ID: &[u8] = b"blocks:id:";
pub const DB_KEY_TRANSACTIONS_BLOCK_ID: &[u8] = b"transactions:blockID:";
pub const DB_KEY_TRANSACTIONS_ID: &[u8] = b"transactions:id:";

/// Chain-state record listing balances of never-registered legacy addresses.
pub const CHAIN_STATE_UNREGISTERED_ADDRESSES: &[u8] = b"chain:unregisteredAddresses";

/// Chain-state record with the top delegate weights of recent rounds.
pub const CHAIN_STATE_DELEGATE_VOTE_WEIGHTS: &[u8] = b"chain:dpos:delegateVoteWeights";

fn join(prefix: &[u8], suffix: &[u8]) -> Vec<u8> {
    let mut key = Vec::with_capacity(prefix.len() + suffix.len());
    key.extend_from_slice(prefix);
    key.extend_from_slice(suffix);
    key
}

pub fn account_key(address: &[u8]) -> Vec<u8> {
    join(DB_KEY_ACCOUNTS_ADDRESS, address)
}

pub fn block_height_key(height: u32) -> Vec<u8> {
    join(DB_KEY_BLOCKS_HEIGHT, &height.to_be_bytes())
}

pub fn block_id_key(id: &BlockId) -> Vec<u8> {
    join(DB_KEY_BLOCKS_ID, id)
}

pub fn transactions_by_block_key(id: &BlockId) -> Vec<u8> {
    join(DB_KEY_TRANSACTIONS_BLOCK_ID, id)
}

pub fn transaction_id_key(id: &TransactionId) -> Vec<u8> {
    join(DB_KEY_TRANSACTIONS_ID, id)
}

/// Parse the height out of a `blocks:height:` key.
pub fn height_from_key(key: &[u8]) -> Option<u32> {
    let suffix = key.strip_prefix(DB_KEY_BLOCKS_HEIGHT)?;
    let bytes: [u8; 4] = suffix.try_into().ok()?;
    Some(u32::from_be_bytes(bytes))
}
