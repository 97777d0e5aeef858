//! Legacy genesis store: balances of addresses that never registered a key.

use mg_01_snapshot_reader::LegacyAccount;
use serde::Serialize;
use serde_with::{hex::Hex, serde_as, DisplayFromStr};
use shared_types::{checked_sum, Amount, LegacyAddress, MigrationResult};
use tracing::info;

use crate::domain::asset::{GenesisAsset, MODULE_NAME_LEGACY};
use crate::schemas::legacy_schema;

/// Legacy store and the amount the token store must lock on the reserve.
#[derive(Debug, Clone)]
pub struct LegacyTransform {
    pub asset: GenesisAsset,
    pub reserve_amount: Amount,
}

#[derive(Debug, Serialize)]
struct LegacyGenesis {
    accounts: Vec<LegacyEntry>,
}

#[serde_as]
#[derive(Debug, Serialize)]
struct LegacyEntry {
    #[serde_as(as = "Hex")]
    address: LegacyAddress,
    #[serde_as(as = "DisplayFromStr")]
    balance: u64,
}

/// Republish unregistered addresses in stored order.
pub fn transform_legacy(legacy_accounts: &[LegacyAccount]) -> MigrationResult<LegacyTransform> {
    let reserve_amount = checked_sum(
        legacy_accounts.iter().map(|account| account.balance),
        "legacy reserve",
    )?;
    let accounts = legacy_accounts
        .iter()
        .map(|account| LegacyEntry {
            address: account.address,
            balance: account.balance,
        })
        .collect::<Vec<_>>();

    info!(
        accounts = accounts.len(),
        reserve = %reserve_amount,
        "[mg-03] Legacy store built"
    );
    let asset = GenesisAsset::new(MODULE_NAME_LEGACY, &LegacyGenesis { accounts }, legacy_schema())?;
    Ok(LegacyTransform {
        asset,
        reserve_amount,
    })
}
