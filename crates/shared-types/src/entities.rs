//! # Core Primitives
//!
//! Fixed-size identifiers and the amount type used across the pipeline.
//!
//! ## Clusters
//!
//! - **Identity**: `Address`, `LegacyAddress`, `PublicKey`
//! - **Chain**: `BlockId`, `TransactionId`, `TokenId`
//! - **Value**: `Amount`

use crate::errors::MigrationError;

/// A 20-byte account address (truncated SHA-256 of the public key).
pub type Address = [u8; 20];

/// An 8-byte address from the pre-v3 numeric address scheme.
pub type LegacyAddress = [u8; 8];

/// A 32-byte Ed25519 public key.
pub type PublicKey = [u8; 32];

/// A 32-byte SHA-256 digest.
pub type Hash = [u8; 32];

/// Block identifier (hash of the block header).
pub type BlockId = Hash;

/// Transaction identifier (hash of the transaction bytes).
pub type TransactionId = Hash;

/// Token identifier: 4-byte chain ID followed by a 4-byte local ID.
pub type TokenId = [u8; 8];

/// Token amount used for every balance and supply computation.
///
/// Snapshot balances are `u64`; sums across the whole account set are
/// accumulated in `u128` so they can never truncate.
pub type Amount = u128;

/// Length of an account address in bytes.
pub const ADDRESS_LENGTH: usize = 20;

/// Length of an Ed25519 public key in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Length of a legacy address in bytes.
pub const LEGACY_ADDRESS_LENGTH: usize = 8;

/// Length of a block or transaction identifier in bytes.
pub const ID_LENGTH: usize = 32;

/// Add `value` to `acc`, failing with [`MigrationError::Overflow`].
///
/// `what` names the sum being accumulated and ends up in the error message.
pub fn checked_add_amount(
    acc: Amount,
    value: impl Into<Amount>,
    what: &'static str,
) -> Result<Amount, MigrationError> {
    acc.checked_add(value.into())
        .ok_or(MigrationError::Overflow(what))
}

/// Sum an iterator of amounts with overflow detection.
pub fn checked_sum<I, T>(values: I, what: &'static str) -> Result<Amount, MigrationError>
where
    I: IntoIterator<Item = T>,
    T: Into<Amount>,
{
    values
        .into_iter()
        .try_fold(0, |acc, value| checked_add_amount(acc, value, what))
}
