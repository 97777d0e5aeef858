//! # Genesis Assembler Service
//!
//! Sorts the module stores by module name and delegates block construction
//! to the injected [`GenesisBlockBuilder`].

use std::collections::BTreeSet;

use mg_03_module_transformers::GenesisAsset;
use shared_types::{MigrationError, MigrationResult};
use tracing::{debug, info};

use crate::domain::collation::locale_compare;
use crate::domain::genesis_block::{GenesisBlock, GenesisBlockParams};
use crate::ports::outbound::GenesisBlockBuilder;

pub struct GenesisAssembler<B: GenesisBlockBuilder> {
    builder: B,
}

impl<B: GenesisBlockBuilder> GenesisAssembler<B> {
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    /// Order the module stores. Two stores for one module are rejected.
    pub fn assemble(&self, mut assets: Vec<GenesisAsset>) -> MigrationResult<Vec<GenesisAsset>> {
        let mut seen = BTreeSet::new();
        for asset in &assets {
            if !seen.insert(asset.module.as_str()) {
                return Err(MigrationError::InvalidConfig(format!(
                    "duplicate genesis store for module {}",
                    asset.module
                )));
            }
        }
        assets.sort_by(|a, b| locale_compare(&a.module, &b.module));
        debug!(
            modules = ?assets.iter().map(|a| a.module.as_str()).collect::<Vec<_>>(),
            "[mg-04] Module stores ordered"
        );
        Ok(assets)
    }

    /// Order the stores and build the genesis block.
    pub fn build_genesis_block(
        &self,
        assets: Vec<GenesisAsset>,
        params: &GenesisBlockParams,
    ) -> MigrationResult<GenesisBlock> {
        let assets = self.assemble(assets)?;
        let block = self.builder.construct(assets, params)?;
        info!(
            height = block.header.height,
            assets = block.assets.len(),
            "[mg-04] Genesis block constructed"
        );
        Ok(block)
    }
}
