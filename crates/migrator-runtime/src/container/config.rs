//! # Migrator Configuration
//!
//! Plain structs with defaults for every field. Environment variables and
//! CLI flags are layered on top by [`CliArgs`](super::CliArgs); `validate`
//! runs before the snapshot database is opened.

use std::path::PathBuf;

use mg_03_module_transformers::domain::params::{
    CHAIN_NAME_MAINCHAIN, INIT_ROUNDS, MAX_NUMBER_ACTIVE_VALIDATORS, ROUND_LENGTH,
};
use mg_03_module_transformers::ProtocolParams;
use shared_types::TokenId;
use thiserror::Error;

use crate::adapters::RocksDbConfig;

/// Complete migrator configuration.
#[derive(Debug, Clone, Default)]
pub struct MigratorConfig {
    /// Snapshot database location.
    pub storage: StorageConfig,
    /// Heights delimiting the migration.
    pub snapshot: SnapshotConfig,
    /// Protocol constants of the target chain.
    pub protocol: ProtocolConfig,
    /// Where the genesis block is written.
    pub output: OutputConfig,
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("snapshot height is required")]
    MissingSnapshotHeight,
    #[error("previous snapshot height {previous} must be below snapshot height {snapshot}")]
    InvalidHeights { previous: u32, snapshot: u32 },
    #[error("round length must be positive")]
    ZeroRoundLength,
    #[error("max active validators must be positive")]
    ZeroValidatorCap,
    #[error("chain name must not be empty")]
    EmptyChainName,
    #[error("token id must be 8 bytes of hex, got {0:?}")]
    InvalidTokenId(String),
}

impl MigratorConfig {
    /// Reject configurations that cannot produce a genesis block.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.snapshot.snapshot_height == 0 {
            return Err(ConfigError::MissingSnapshotHeight);
        }
        if self.snapshot.previous_snapshot_height >= self.snapshot.snapshot_height {
            return Err(ConfigError::InvalidHeights {
                previous: self.snapshot.previous_snapshot_height,
                snapshot: self.snapshot.snapshot_height,
            });
        }
        if self.protocol.round_length == 0 {
            return Err(ConfigError::ZeroRoundLength);
        }
        if self.protocol.max_active_validators == 0 {
            return Err(ConfigError::ZeroValidatorCap);
        }
        if self.protocol.chain_name.is_empty() {
            return Err(ConfigError::EmptyChainName);
        }
        self.protocol.token_id()?;
        Ok(())
    }

    /// Parameters handed to the module transformers.
    pub fn protocol_params(&self) -> Result<ProtocolParams, ConfigError> {
        Ok(ProtocolParams {
            round_length: self.protocol.round_length,
            max_active_validators: self.protocol.max_active_validators,
            init_rounds: self.protocol.init_rounds,
            token_id: self.protocol.token_id()?,
            chain_name: self.protocol.chain_name.clone(),
        })
    }

    pub fn rocksdb(&self) -> RocksDbConfig {
        RocksDbConfig {
            path: self.storage.db_path.clone(),
            block_cache_size: self.storage.block_cache_size,
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// RocksDB directory of the v3 node.
    pub db_path: PathBuf,
    /// Block cache size in bytes.
    pub block_cache_size: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let rocksdb = RocksDbConfig::default();
        Self {
            db_path: rocksdb.path,
            block_cache_size: rocksdb.block_cache_size,
        }
    }
}

/// Snapshot heights.
#[derive(Debug, Clone, Default)]
pub struct SnapshotConfig {
    /// Height of the last v3 block included in the migration.
    pub snapshot_height: u32,
    /// Height of the previous snapshot; blocks after it are scanned for keys.
    pub previous_snapshot_height: u32,
}

/// Protocol configuration.
#[derive(Debug, Clone)]
pub struct ProtocolConfig {
    pub round_length: u32,
    pub max_active_validators: usize,
    pub init_rounds: u32,
    /// Hex-encoded 8-byte token id.
    pub token_id: String,
    pub chain_name: String,
    /// Seconds between the snapshot block and the genesis block.
    pub block_time_secs: u32,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            round_length: ROUND_LENGTH,
            max_active_validators: MAX_NUMBER_ACTIVE_VALIDATORS,
            init_rounds: INIT_ROUNDS,
            token_id: "0000000000000000".to_string(),
            chain_name: CHAIN_NAME_MAINCHAIN.to_string(),
            block_time_secs: 10,
        }
    }
}

impl ProtocolConfig {
    pub fn token_id(&self) -> Result<TokenId, ConfigError> {
        hex::decode(&self.token_id)
            .ok()
            .and_then(|bytes| TokenId::try_from(bytes.as_slice()).ok())
            .ok_or_else(|| ConfigError::InvalidTokenId(self.token_id.clone()))
    }
}

/// Output configuration.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./output"),
        }
    }
}
