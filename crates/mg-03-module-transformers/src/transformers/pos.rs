//! # PoS Genesis Store
//!
//! - **Validators**: every account with a username. BLS material does not
//!   exist on v3, so placeholder keys are emitted; the generator key comes
//!   from the resolver or falls back to the invalid-key sentinel.
//! - **Stakers**: votes become stakes, unlocking entries become pending
//!   unlocks.
//! - **Genesis data**: the initial validator set is taken from the weights
//!   recorded for round `ceil(snapshotHeight / roundLength) - 2`.

use std::collections::BTreeMap;

use mg_01_snapshot_reader::{Account, RoundVoteWeights};
use mg_02_validator_keys::ValidatorKeyMap;
use serde::Serialize;
use serde_with::{hex::Hex, serde_as, DisplayFromStr};
use shared_types::{Address, Lisk32Address, MigrationError, MigrationResult, PublicKey, TokenId};
use tracing::{debug, info};

use crate::domain::asset::{GenesisAsset, MODULE_NAME_POS};
use crate::domain::params::{
    ProtocolParams, DEFAULT_COMMISSION, DEFAULT_PROOF_OF_POSSESSION, INVALID_BLS_KEY,
    INVALID_ED25519_KEY, Q96_ZERO,
};
use crate::schemas::pos_schema;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PosGenesis {
    validators: Vec<ValidatorEntry>,
    stakers: Vec<StakerEntry>,
    genesis_data: GenesisData,
}

#[serde_as]
#[derive(Debug, Clone, Serialize)]
struct SharingCoefficient {
    #[serde(rename = "tokenID")]
    #[serde_as(as = "Hex")]
    token_id: TokenId,
    #[serde_as(as = "Hex")]
    coefficient: Vec<u8>,
}

#[serde_as]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidatorEntry {
    address: Lisk32Address,
    name: String,
    #[serde_as(as = "Hex")]
    bls_key: [u8; 48],
    #[serde_as(as = "Hex")]
    proof_of_possession: [u8; 96],
    #[serde_as(as = "Hex")]
    generator_key: PublicKey,
    last_generated_height: u32,
    is_banned: bool,
    report_misbehavior_heights: Vec<u32>,
    consecutive_missed_blocks: u32,
    commission: u32,
    last_commission_increase_height: u32,
    sharing_coefficients: Vec<SharingCoefficient>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StakerEntry {
    address: Lisk32Address,
    stakes: Vec<StakeEntry>,
    pending_unlocks: Vec<PendingUnlock>,
}

#[serde_as]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StakeEntry {
    validator_address: Lisk32Address,
    #[serde_as(as = "DisplayFromStr")]
    amount: u64,
    sharing_coefficients: Vec<SharingCoefficient>,
}

#[serde_as]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PendingUnlock {
    validator_address: Lisk32Address,
    #[serde_as(as = "DisplayFromStr")]
    amount: u64,
    unstake_height: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenesisData {
    init_rounds: u32,
    init_validators: Vec<Lisk32Address>,
}

fn neutral_coefficients(token_id: TokenId) -> Vec<SharingCoefficient> {
    vec![SharingCoefficient {
        token_id,
        coefficient: Q96_ZERO.to_vec(),
    }]
}

/// Initial validator set from the recorded weights of round `r - 2`.
///
/// Delegates are kept only when their account exists, has a username and
/// is not banned. The survivors are sorted by address and capped at
/// `max_active_validators`.
pub fn select_init_validators(
    accounts: &[Account],
    vote_weights: &[RoundVoteWeights],
    snapshot_height: u32,
    params: &ProtocolParams,
) -> MigrationResult<Vec<Address>> {
    if params.round_length == 0 {
        return Err(MigrationError::InvalidRange(
            "round length must be positive".to_string(),
        ));
    }
    let snapshot_round = snapshot_height.div_ceil(params.round_length);
    let round = snapshot_round.checked_sub(2).ok_or_else(|| {
        MigrationError::MissingHistoricalData(format!(
            "snapshot round {snapshot_round} has no completed round two rounds back"
        ))
    })?;

    let weights = vote_weights
        .iter()
        .find(|weights| weights.round == round)
        .filter(|weights| !weights.delegates.is_empty())
        .ok_or_else(|| {
            MigrationError::MissingHistoricalData(format!(
                "no delegate vote weights recorded for round {round}"
            ))
        })?;

    let by_address: BTreeMap<Address, &Account> = accounts
        .iter()
        .map(|account| (account.address, account))
        .collect();
    let mut eligible: Vec<Address> = weights
        .delegates
        .iter()
        .filter(|delegate| {
            by_address.get(&delegate.address).is_some_and(|account| {
                account.is_validator() && !account.delegate.is_banned
            })
        })
        .map(|delegate| delegate.address)
        .collect();
    eligible.sort_unstable();
    eligible.dedup();
    eligible.truncate(params.max_active_validators);

    if eligible.is_empty() {
        return Err(MigrationError::MissingHistoricalData(format!(
            "no eligible validator in round {round}"
        )));
    }
    debug!(
        round,
        recorded = weights.delegates.len(),
        selected = eligible.len(),
        "[mg-03] Initial validators selected"
    );
    Ok(eligible)
}

fn validator_entries(
    accounts: &[Account],
    keys: &ValidatorKeyMap,
    snapshot_height: u32,
    token_id: TokenId,
) -> Vec<ValidatorEntry> {
    let mut validators: Vec<ValidatorEntry> = accounts
        .iter()
        .filter(|account| account.is_validator())
        .map(|account| ValidatorEntry {
            address: account.address.into(),
            name: account.delegate.username.clone(),
            bls_key: INVALID_BLS_KEY,
            proof_of_possession: DEFAULT_PROOF_OF_POSSESSION,
            generator_key: keys
                .get(&account.address)
                .copied()
                .unwrap_or(INVALID_ED25519_KEY),
            last_generated_height: account.delegate.last_forged_height,
            is_banned: account.delegate.is_banned,
            report_misbehavior_heights: account.delegate.pom_heights.clone(),
            consecutive_missed_blocks: account.delegate.consecutive_missed_blocks,
            commission: DEFAULT_COMMISSION,
            last_commission_increase_height: snapshot_height,
            sharing_coefficients: neutral_coefficients(token_id),
        })
        .collect();
    validators.sort_by(|a, b| a.address.cmp(&b.address));
    validators
}

fn staker_entries(accounts: &[Account], token_id: TokenId) -> Vec<StakerEntry> {
    let mut stakers: Vec<StakerEntry> = accounts
        .iter()
        .filter(|account| account.is_staker())
        .map(|account| {
            let mut stakes: Vec<StakeEntry> = account
                .sent_votes
                .iter()
                .map(|vote| StakeEntry {
                    validator_address: vote.delegate_address.into(),
                    amount: vote.amount,
                    sharing_coefficients: neutral_coefficients(token_id),
                })
                .collect();
            stakes.sort_by(|a, b| {
                a.validator_address
                    .cmp(&b.validator_address)
                    .then(a.amount.cmp(&b.amount))
            });

            let mut pending_unlocks: Vec<PendingUnlock> = account
                .unlocking
                .iter()
                .map(|unlock| PendingUnlock {
                    validator_address: unlock.delegate_address.into(),
                    amount: unlock.amount,
                    unstake_height: unlock.unvote_height,
                })
                .collect();
            pending_unlocks.sort_by(|a, b| {
                a.validator_address
                    .cmp(&b.validator_address)
                    .then(a.unstake_height.cmp(&b.unstake_height))
                    .then(a.amount.cmp(&b.amount))
            });

            StakerEntry {
                address: account.address.into(),
                stakes,
                pending_unlocks,
            }
        })
        .collect();
    stakers.sort_by(|a, b| a.address.cmp(&b.address));
    stakers
}

/// Build the PoS store.
pub fn transform_pos(
    accounts: &[Account],
    keys: &ValidatorKeyMap,
    vote_weights: &[RoundVoteWeights],
    snapshot_height: u32,
    params: &ProtocolParams,
) -> MigrationResult<GenesisAsset> {
    let init_validators = select_init_validators(accounts, vote_weights, snapshot_height, params)?;
    let validators = validator_entries(accounts, keys, snapshot_height, params.token_id);
    let stakers = staker_entries(accounts, params.token_id);

    let sentinel_keys = validators
        .iter()
        .filter(|v| v.generator_key == INVALID_ED25519_KEY)
        .count();
    info!(
        validators = validators.len(),
        stakers = stakers.len(),
        init_validators = init_validators.len(),
        sentinel_keys,
        "[mg-03] PoS store built"
    );

    GenesisAsset::new(
        MODULE_NAME_POS,
        &PosGenesis {
            validators,
            stakers,
            genesis_data: GenesisData {
                init_rounds: params.init_rounds,
                init_validators: init_validators.into_iter().map(Lisk32Address).collect(),
            },
        },
        pos_schema(),
    )
}
