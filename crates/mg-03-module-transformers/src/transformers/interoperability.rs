//! Interoperability bootstrap: the mainchain starts with no registered chains.

use serde::Serialize;
use serde_json::Value;
use serde_with::{serde_as, DisplayFromStr};
use shared_types::{MigrationError, MigrationResult};

use crate::domain::asset::{GenesisAsset, MODULE_NAME_INTEROPERABILITY};
use crate::schemas::interoperability_schema;

#[serde_as]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InteroperabilityGenesis<'a> {
    own_chain_name: &'a str,
    #[serde_as(as = "DisplayFromStr")]
    own_chain_nonce: u64,
    chain_infos: Vec<Value>,
    terminated_state_accounts: Vec<Value>,
    terminated_outbox_accounts: Vec<Value>,
}

pub fn transform_interoperability(chain_name: &str) -> MigrationResult<GenesisAsset> {
    if chain_name.is_empty() {
        return Err(MigrationError::InvalidConfig(
            "own chain name must not be empty".to_string(),
        ));
    }
    GenesisAsset::new(
        MODULE_NAME_INTEROPERABILITY,
        &InteroperabilityGenesis {
            own_chain_name: chain_name,
            own_chain_nonce: 0,
            chain_infos: Vec::new(),
            terminated_state_accounts: Vec::new(),
            terminated_outbox_accounts: Vec::new(),
        },
        interoperability_schema(),
    )
}
