//! # Outbound Ports
//!
//! Production: `Sha256GenesisBlockBuilder` (migrator-runtime/genesis/builder.rs)

use mg_03_module_transformers::GenesisAsset;
use shared_types::MigrationResult;

use crate::domain::genesis_block::{GenesisBlock, GenesisBlockParams};

/// Turns the ordered module stores into a genesis block.
pub trait GenesisBlockBuilder: Send + Sync {
    /// `assets` are already in their final order and must be kept so.
    fn construct(
        &self,
        assets: Vec<GenesisAsset>,
        params: &GenesisBlockParams,
    ) -> MigrationResult<GenesisBlock>;
}
