//! # Resolver Service
//!
//! Walks the snapshot window in ascending height order. For every block the
//! generator is recorded, followed by each transaction sender that is a
//! declared validator. Because the walk is ascending and the map overwrites,
//! the key kept for an address is the one seen at the greatest height.

use std::collections::BTreeSet;

use mg_01_snapshot_reader::{Account, SnapshotReaderApi};
use shared_types::{address_from_public_key, Address, MigrationResult};
use tracing::{debug, info};

use crate::domain::key_map::ValidatorKeyMap;
use crate::domain::window::HeightWindow;

/// Resolve the generator key of each validator observed in `window`.
pub fn resolve_validator_keys<R>(
    reader: &R,
    accounts: &[Account],
    window: HeightWindow,
) -> MigrationResult<ValidatorKeyMap>
where
    R: SnapshotReaderApi + ?Sized,
{
    let validators: BTreeSet<Address> = accounts
        .iter()
        .filter(|account| account.is_validator())
        .map(|account| account.address)
        .collect();

    let mut keys = ValidatorKeyMap::new();
    let mut blocks = 0usize;
    for item in reader.block_ids_in_range(window.first(), window.last())? {
        let (height, block_id) = item?;
        let header = reader.block_header(&block_id)?;
        keys.observe(
            address_from_public_key(&header.generator_public_key),
            header.generator_public_key,
        );

        let tx_ids = reader.transaction_ids(&block_id)?;
        for tx_id in &tx_ids {
            let tx = reader.transaction(tx_id)?;
            let sender = address_from_public_key(&tx.sender_public_key);
            if validators.contains(&sender) {
                keys.observe(sender, tx.sender_public_key);
            }
        }
        debug!(height, transactions = tx_ids.len(), "[mg-02] Block scanned");
        blocks += 1;
    }

    info!(
        blocks,
        first_height = window.first(),
        last_height = window.last(),
        resolved = keys.len(),
        "[mg-02] Validator keys resolved"
    );
    Ok(keys)
}
