//! # Token Genesis Store
//!
//! Balances per account plus the `pos` lock implied by votes and pending
//! unlocks. The legacy reserve account additionally carries a `legacy` lock
//! holding every unregistered balance, passed in by the legacy transformer.
//!
//! The supply is accumulated over the inputs and compared with the sum of
//! the emitted user substore before anything is returned.

use mg_01_snapshot_reader::Account;
use serde::Serialize;
use serde_with::{hex::Hex, serde_as, DisplayFromStr};
use shared_types::{
    checked_add_amount, checked_sum, Amount, Lisk32Address, MigrationError,
    MigrationResult, TokenId, ADDRESS_LEGACY_RESERVE,
};
use tracing::info;

use crate::domain::asset::{GenesisAsset, MODULE_NAME_LEGACY, MODULE_NAME_POS, MODULE_NAME_TOKEN};
use crate::schemas::token_schema;

/// Token store plus the supply it was checked against.
#[derive(Debug, Clone)]
pub struct TokenTransform {
    pub asset: GenesisAsset,
    pub total_supply: Amount,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenGenesis {
    user_substore: Vec<UserEntry>,
    supply_substore: Vec<SupplyEntry>,
    escrow_substore: Vec<()>,
    supported_tokens_substore: Vec<()>,
}

#[serde_as]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UserEntry {
    address: Lisk32Address,
    #[serde(rename = "tokenID")]
    #[serde_as(as = "Hex")]
    token_id: TokenId,
    #[serde_as(as = "DisplayFromStr")]
    available_balance: Amount,
    locked_balances: Vec<LockedBalance>,
}

#[serde_as]
#[derive(Debug, Serialize)]
struct LockedBalance {
    module: &'static str,
    #[serde_as(as = "DisplayFromStr")]
    amount: Amount,
}

#[serde_as]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SupplyEntry {
    #[serde(rename = "tokenID")]
    #[serde_as(as = "Hex")]
    token_id: TokenId,
    #[serde_as(as = "DisplayFromStr")]
    total_supply: Amount,
}

/// Amount held by the PoS module for an account's votes and unlocks.
pub fn pos_locked_amount(account: &Account) -> MigrationResult<Amount> {
    let voted = checked_sum(account.sent_votes.iter().map(|v| v.amount), "sent votes")?;
    let unlocking = checked_sum(account.unlocking.iter().map(|u| u.amount), "unlocking")?;
    checked_add_amount(voted, unlocking, "pos locked balance")
}

fn pos_lock(amount: Amount) -> Option<LockedBalance> {
    (amount != 0).then_some(LockedBalance {
        module: MODULE_NAME_POS,
        amount,
    })
}

/// Build the token store.
///
/// `legacy_reserve` is the sum of the unregistered balances; it is locked
/// under the `legacy` module on the reserve account.
pub fn transform_token(
    accounts: &[Account],
    legacy_reserve: Amount,
    token_id: TokenId,
) -> MigrationResult<TokenTransform> {
    let mut total_supply: Amount = 0;
    let mut users = Vec::with_capacity(accounts.len() + 1);
    let mut reserve: Option<(Amount, Amount)> = None;

    for account in accounts {
        let locked = pos_locked_amount(account)?;
        total_supply = checked_add_amount(total_supply, account.balance, "total supply")?;
        total_supply = checked_add_amount(total_supply, locked, "total supply")?;

        if account.address == ADDRESS_LEGACY_RESERVE {
            reserve = Some((Amount::from(account.balance), locked));
            continue;
        }
        if account.balance == 0 && locked == 0 {
            continue;
        }
        users.push(UserEntry {
            address: account.address.into(),
            token_id,
            available_balance: Amount::from(account.balance),
            locked_balances: pos_lock(locked).into_iter().collect(),
        });
    }
    total_supply = checked_add_amount(total_supply, legacy_reserve, "total supply")?;

    let (reserve_available, reserve_pos) = reserve.unwrap_or_default();
    let mut reserve_locks: Vec<LockedBalance> = pos_lock(reserve_pos).into_iter().collect();
    if legacy_reserve != 0 {
        reserve_locks.push(LockedBalance {
            module: MODULE_NAME_LEGACY,
            amount: legacy_reserve,
        });
    }
    reserve_locks.sort_by(|a, b| a.module.cmp(b.module));
    users.push(UserEntry {
        address: Lisk32Address(ADDRESS_LEGACY_RESERVE),
        token_id,
        available_balance: reserve_available,
        locked_balances: reserve_locks,
    });

    users.sort_by(|a, b| {
        a.address
            .cmp(&b.address)
            .then_with(|| a.token_id.cmp(&b.token_id))
    });

    let user_sum = user_substore_sum(&users)?;
    if user_sum != total_supply {
        return Err(MigrationError::SupplyMismatch {
            total_supply,
            user_sum,
        });
    }

    info!(
        users = users.len(),
        total_supply = %total_supply,
        legacy_reserve = %legacy_reserve,
        "[mg-03] Token store built"
    );
    let asset = GenesisAsset::new(
        MODULE_NAME_TOKEN,
        &TokenGenesis {
            user_substore: users,
            supply_substore: vec![SupplyEntry {
                token_id,
                total_supply,
            }],
            escrow_substore: Vec::new(),
            supported_tokens_substore: Vec::new(),
        },
        token_schema(),
    )?;
    Ok(TokenTransform {
        asset,
        total_supply,
    })
}

fn user_substore_sum(users: &[UserEntry]) -> MigrationResult<Amount> {
    users.iter().try_fold(0, |acc: Amount, user| {
        let acc = checked_add_amount(acc, user.available_balance, "user substore")?;
        user.locked_balances
            .iter()
            .try_fold(acc, |acc, lock| checked_add_amount(acc, lock.amount, "user substore"))
    })
}
