//! # Transformer Service
//!
//! Runs the five transformers over a decoded snapshot. Auth, PoS and the
//! legacy-then-token chain share no state and run under `rayon::join`;
//! interoperability depends only on parameters.

use mg_01_snapshot_reader::{Account, LegacyAccount, RoundVoteWeights};
use mg_02_validator_keys::ValidatorKeyMap;
use shared_types::{Amount, MigrationError, MigrationResult};
use tracing::info;

use crate::domain::asset::GenesisAsset;
use crate::domain::params::ProtocolParams;
use crate::transformers::auth::transform_auth;
use crate::transformers::interoperability::transform_interoperability;
use crate::transformers::legacy::transform_legacy;
use crate::transformers::pos::transform_pos;
use crate::transformers::token::{transform_token, TokenTransform};

/// Everything the transformers read.
#[derive(Debug, Clone, Copy)]
pub struct TransformInput<'a> {
    pub accounts: &'a [Account],
    pub legacy_accounts: &'a [LegacyAccount],
    pub vote_weights: &'a [RoundVoteWeights],
    pub validator_keys: &'a ValidatorKeyMap,
    pub snapshot_height: u32,
    pub params: &'a ProtocolParams,
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformSummary {
    pub accounts: usize,
    pub validators: usize,
    pub stakers: usize,
    pub legacy_accounts: usize,
    pub legacy_reserve: Amount,
    pub total_supply: Amount,
}

/// The five module stores, unordered, plus the run summary.
#[derive(Debug, Clone)]
pub struct ModuleAssets {
    pub assets: Vec<GenesisAsset>,
    pub summary: TransformSummary,
}

/// Produce the genesis store of every module.
///
/// Fails as a whole if any transformer fails; no partial set is returned.
pub fn transform_modules(input: TransformInput<'_>) -> MigrationResult<ModuleAssets> {
    let interoperability = transform_interoperability(&input.params.chain_name)?;

    let ((auth, pos), legacy_and_token) = rayon::join(
        || {
            rayon::join(
                || transform_auth(input.accounts),
                || {
                    transform_pos(
                        input.accounts,
                        input.validator_keys,
                        input.vote_weights,
                        input.snapshot_height,
                        input.params,
                    )
                },
            )
        },
        || {
            let legacy = transform_legacy(input.legacy_accounts)?;
            let token =
                transform_token(input.accounts, legacy.reserve_amount, input.params.token_id)?;
            Ok::<_, MigrationError>((legacy, token))
        },
    );
    let (auth, pos) = (auth?, pos?);
    let (legacy, TokenTransform { asset: token, total_supply }) = legacy_and_token?;

    let summary = TransformSummary {
        accounts: input.accounts.len(),
        validators: input.accounts.iter().filter(|a| a.is_validator()).count(),
        stakers: input.accounts.iter().filter(|a| a.is_staker()).count(),
        legacy_accounts: input.legacy_accounts.len(),
        legacy_reserve: legacy.reserve_amount,
        total_supply,
    };
    info!(
        validators = summary.validators,
        stakers = summary.stakers,
        "[mg-03] All module stores built"
    );

    Ok(ModuleAssets {
        assets: vec![token, auth, pos, legacy.asset, interoperability],
        summary,
    })
}
