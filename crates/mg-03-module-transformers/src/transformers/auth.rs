//! Auth genesis store: signature configuration and nonce per account.

use mg_01_snapshot_reader::Account;
use serde::Serialize;
use serde_with::{hex::Hex, serde_as, DisplayFromStr};
use shared_types::{Lisk32Address, MigrationResult, PublicKey};
use tracing::info;

use crate::domain::asset::{GenesisAsset, MODULE_NAME_AUTH};
use crate::schemas::auth_schema;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthGenesis {
    auth_data_substore: Vec<AuthEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthEntry {
    store_key: Lisk32Address,
    store_value: AuthStoreValue,
}

#[serde_as]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthStoreValue {
    number_of_signatures: u32,
    #[serde_as(as = "Vec<Hex>")]
    mandatory_keys: Vec<PublicKey>,
    #[serde_as(as = "Vec<Hex>")]
    optional_keys: Vec<PublicKey>,
    #[serde_as(as = "DisplayFromStr")]
    nonce: u64,
}

fn sorted(keys: &[PublicKey]) -> Vec<PublicKey> {
    let mut keys = keys.to_vec();
    keys.sort_unstable();
    keys
}

/// Build the auth store for every account.
pub fn transform_auth(accounts: &[Account]) -> MigrationResult<GenesisAsset> {
    let mut entries: Vec<AuthEntry> = accounts
        .iter()
        .map(|account| AuthEntry {
            store_key: account.address.into(),
            store_value: AuthStoreValue {
                number_of_signatures: account.keys.number_of_signatures,
                mandatory_keys: sorted(&account.keys.mandatory_keys),
                optional_keys: sorted(&account.keys.optional_keys),
                nonce: account.nonce,
            },
        })
        .collect();
    entries.sort_by(|a, b| a.store_key.cmp(&b.store_key));

    info!(entries = entries.len(), "[mg-03] Auth store built");
    GenesisAsset::new(
        MODULE_NAME_AUTH,
        &AuthGenesis {
            auth_data_substore: entries,
        },
        auth_schema(),
    )
}
