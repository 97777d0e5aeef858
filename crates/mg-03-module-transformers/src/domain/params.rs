//! # Protocol Parameters
//!
//! Constants of the v4 mainchain genesis and the tunable subset the runtime
//! exposes through configuration.

use shared_types::TokenId;

/// Blocks per round on the v3 chain.
pub const ROUND_LENGTH: u32 = 103;

/// Upper bound on the initial validator set.
pub const MAX_NUMBER_ACTIVE_VALIDATORS: usize = 101;

/// Rounds during which the genesis validator set stays fixed.
pub const INIT_ROUNDS: u32 = 587;

/// Native token of the mainchain.
pub const TOKEN_ID_LSK: TokenId = [0; 8];

pub const CHAIN_NAME_MAINCHAIN: &str = "lisk_mainchain";

/// Commission in hundredths of a percent (100%).
pub const DEFAULT_COMMISSION: u32 = 10_000;

/// Placeholder BLS key; validators register a real one after the migration.
pub const INVALID_BLS_KEY: [u8; 48] = [0; 48];

pub const DEFAULT_PROOF_OF_POSSESSION: [u8; 96] = [0; 96];

/// Generator key for validators with no block in the snapshot window.
pub const INVALID_ED25519_KEY: [u8; 32] = [0xff; 32];

/// Q96 encoding of zero.
pub const Q96_ZERO: &[u8] = &[];

/// Parameters shared by the transformers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolParams {
    pub round_length: u32,
    pub max_active_validators: usize,
    pub init_rounds: u32,
    pub token_id: TokenId,
    pub chain_name: String,
}

impl Default for ProtocolParams {
    fn default() -> Self {
        Self {
            round_length: ROUND_LENGTH,
            max_active_validators: MAX_NUMBER_ACTIVE_VALIDATORS,
            init_rounds: INIT_ROUNDS,
            token_id: TOKEN_ID_LSK,
            chain_name: CHAIN_NAME_MAINCHAIN.to_string(),
        }
    }
}
