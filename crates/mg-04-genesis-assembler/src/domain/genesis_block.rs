//! # Genesis Block Types
//!
//! The v4 genesis block continues the v3 chain: it sits one height above
//! the snapshot and links to the snapshot block.

use mg_03_module_transformers::GenesisAsset;
use serde::Serialize;
use serde_with::{hex::Hex, serde_as};
use shared_types::{BlockId, Hash};

/// Block format version of the genesis block.
pub const GENESIS_BLOCK_VERSION: u32 = 0;

/// What the block builder needs to know about the snapshot block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisBlockParams {
    pub snapshot_height: u32,
    pub snapshot_block_id: BlockId,
    pub snapshot_timestamp: u32,
    /// Seconds between the snapshot block and the genesis block.
    pub block_time_secs: u32,
}

impl GenesisBlockParams {
    pub fn height(&self) -> u32 {
        self.snapshot_height.saturating_add(1)
    }

    pub fn timestamp(&self) -> u32 {
        self.snapshot_timestamp.saturating_add(self.block_time_secs)
    }
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisBlockHeader {
    pub version: u32,
    pub timestamp: u32,
    pub height: u32,
    #[serde(rename = "previousBlockID")]
    #[serde_as(as = "Hex")]
    pub previous_block_id: BlockId,
    /// Empty: nobody forges the genesis block.
    #[serde_as(as = "Hex")]
    pub generator_address: Vec<u8>,
    #[serde_as(as = "Hex")]
    pub transaction_root: Hash,
    #[serde_as(as = "Hex")]
    pub asset_root: Hash,
    #[serde_as(as = "Hex")]
    pub signature: Vec<u8>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenesisBlock {
    #[serde_as(as = "Hex")]
    pub id: BlockId,
    pub header: GenesisBlockHeader,
    pub assets: Vec<GenesisAsset>,
}
