//! # Genesis Block Builder
//!
//! Builds the header around the ordered module stores:
//!
//! - `height` is one above the snapshot, `previousBlockID` the snapshot block
//! - `assetRoot` is SHA-256 over the concatenated SHA-256 of each asset's
//!   JSON, in asset order
//! - `id` is SHA-256 of the header JSON

use mg_03_module_transformers::GenesisAsset;
use mg_04_genesis_assembler::domain::genesis_block::GENESIS_BLOCK_VERSION;
use mg_04_genesis_assembler::{
    GenesisBlock, GenesisBlockBuilder, GenesisBlockHeader, GenesisBlockParams,
};
use serde::Serialize;
use sha2::{Digest, Sha256};
use shared_types::{Hash, MigrationError, MigrationResult};

fn hash_json<T: Serialize>(value: &T, what: &str) -> MigrationResult<Hash> {
    let bytes = serde_json::to_vec(value)
        .map_err(|e| MigrationError::Serialization(format!("{what}: {e}")))?;
    Ok(Sha256::digest(&bytes).into())
}

/// Root over the asset list; order-sensitive.
pub fn asset_root(assets: &[GenesisAsset]) -> MigrationResult<Hash> {
    let mut hasher = Sha256::new();
    for asset in assets {
        hasher.update(hash_json(asset, &asset.module)?);
    }
    Ok(hasher.finalize().into())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256GenesisBlockBuilder;

impl GenesisBlockBuilder for Sha256GenesisBlockBuilder {
    fn construct(
        &self,
        assets: Vec<GenesisAsset>,
        params: &GenesisBlockParams,
    ) -> MigrationResult<GenesisBlock> {
        let header = GenesisBlockHeader {
            version: GENESIS_BLOCK_VERSION,
            timestamp: params.timestamp(),
            height: params.height(),
            previous_block_id: params.snapshot_block_id,
            generator_address: Vec::new(),
            transaction_root: Sha256::digest(b"").into(),
            asset_root: asset_root(&assets)?,
            signature: Vec::new(),
        };
        let id = hash_json(&header, "genesis block header")?;
        Ok(GenesisBlock { id, header, assets })
    }
}
