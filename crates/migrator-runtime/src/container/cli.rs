//! # Command Line
//!
//! Every flag can also be set through an `MG_*` environment variable; a flag
//! given on the command line wins over the environment, and both win over
//! the defaults in [`MigratorConfig`].

use std::path::PathBuf;

use clap::Parser;

use super::config::MigratorConfig;

/// Migrate a protocol-v3 snapshot into the protocol-v4 genesis block.
#[derive(Parser, Debug, Default)]
#[command(name = "migrator")]
#[command(about = "Builds the v4 genesis block from a v3 snapshot database")]
pub struct CliArgs {
    /// RocksDB directory of the v3 node
    #[arg(long, env = "MG_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// Block cache size in bytes
    #[arg(long, env = "MG_BLOCK_CACHE_SIZE")]
    pub block_cache_size: Option<usize>,

    /// Height of the last block included in the snapshot
    #[arg(long, env = "MG_SNAPSHOT_HEIGHT")]
    pub snapshot_height: Option<u32>,

    /// Height of the previous snapshot
    #[arg(long, env = "MG_PREVIOUS_SNAPSHOT_HEIGHT")]
    pub previous_snapshot_height: Option<u32>,

    /// Blocks per round
    #[arg(long, env = "MG_ROUND_LENGTH")]
    pub round_length: Option<u32>,

    /// Upper bound on the initial validator set
    #[arg(long, env = "MG_MAX_ACTIVE_VALIDATORS")]
    pub max_active_validators: Option<usize>,

    /// Rounds with a fixed validator set after genesis
    #[arg(long, env = "MG_INIT_ROUNDS")]
    pub init_rounds: Option<u32>,

    /// Native token id (16 hex characters)
    #[arg(long, env = "MG_TOKEN_ID")]
    pub token_id: Option<String>,

    /// Own chain name for the interoperability module
    #[arg(long, env = "MG_CHAIN_NAME")]
    pub chain_name: Option<String>,

    /// Seconds between the snapshot block and the genesis block
    #[arg(long, env = "MG_BLOCK_TIME")]
    pub block_time_secs: Option<u32>,

    /// Directory the genesis block is written to
    #[arg(short, long, env = "MG_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}

impl CliArgs {
    /// Overlay the provided flags onto `config`.
    pub fn apply(self, config: &mut MigratorConfig) {
        if let Some(path) = self.db_path {
            config.storage.db_path = path;
        }
        if let Some(size) = self.block_cache_size {
            config.storage.block_cache_size = size;
        }
        if let Some(height) = self.snapshot_height {
            config.snapshot.snapshot_height = height;
        }
        if let Some(height) = self.previous_snapshot_height {
            config.snapshot.previous_snapshot_height = height;
        }
        if let Some(length) = self.round_length {
            config.protocol.round_length = length;
        }
        if let Some(cap) = self.max_active_validators {
            config.protocol.max_active_validators = cap;
        }
        if let Some(rounds) = self.init_rounds {
            config.protocol.init_rounds = rounds;
        }
        if let Some(token_id) = self.token_id {
            config.protocol.token_id = token_id;
        }
        if let Some(name) = self.chain_name {
            config.protocol.chain_name = name;
        }
        if let Some(secs) = self.block_time_secs {
            config.protocol.block_time_secs = secs;
        }
        if let Some(dir) = self.output_dir {
            config.output.output_dir = dir;
        }
    }

    pub fn into_config(self) -> MigratorConfig {
        let mut config = MigratorConfig::default();
        self.apply(&mut config);
        config
    }
}
