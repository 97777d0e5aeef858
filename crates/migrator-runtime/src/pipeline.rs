//! # Migration Pipeline
//!
//! One pass from snapshot to genesis block:
//!
//! ```text
//! SnapshotReader(1) ──accounts, chain state──┬──→ ModuleTransformers(3) ──→ GenesisAssembler(4)
//!        │                                   │              ↑                      │
//!        └──blocks (prev, snapshot]──→ ValidatorKeys(2) ────┘                      ↓
//!                                                                           GenesisBlock
//! ```
//!
//! Every stage either completes or aborts the run; nothing is written here.

use mg_01_snapshot_reader::{SnapshotReader, SnapshotReaderApi, SnapshotStore};
use mg_02_validator_keys::{resolve_validator_keys, HeightWindow};
use mg_03_module_transformers::{transform_modules, ProtocolParams, TransformInput, TransformSummary};
use mg_04_genesis_assembler::{GenesisAssembler, GenesisBlock, GenesisBlockParams};
use shared_types::{MigrationError, MigrationResult};
use tracing::info;

use crate::container::{ConfigError, MigratorConfig};
use crate::genesis::Sha256GenesisBlockBuilder;

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct MigrationOutcome {
    pub block: GenesisBlock,
    pub summary: TransformSummary,
}

pub struct MigrationPipeline<S: SnapshotStore> {
    reader: SnapshotReader<S>,
    snapshot_height: u32,
    previous_snapshot_height: u32,
    params: ProtocolParams,
    block_time_secs: u32,
}

impl<S: SnapshotStore> MigrationPipeline<S> {
    pub fn new(store: S, config: &MigratorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            reader: SnapshotReader::new(store),
            snapshot_height: config.snapshot.snapshot_height,
            previous_snapshot_height: config.snapshot.previous_snapshot_height,
            params: config.protocol_params()?,
            block_time_secs: config.protocol.block_time_secs,
        })
    }

    /// Run every stage and build the genesis block.
    pub fn run(&self) -> MigrationResult<MigrationOutcome> {
        let window = HeightWindow::new(self.previous_snapshot_height, self.snapshot_height)?;

        let snapshot_block = self
            .reader
            .block_header_at(self.snapshot_height)?
            .ok_or_else(|| {
                MigrationError::MissingHistoricalData(format!(
                    "no block at snapshot height {}",
                    self.snapshot_height
                ))
            })?;
        info!(
            height = snapshot_block.height,
            id = %hex::encode(snapshot_block.id),
            "Snapshot block located"
        );

        let accounts = self.reader.read_accounts()?;
        let legacy_accounts = self.reader.read_legacy_accounts()?;
        let vote_weights = self.reader.read_vote_weights()?;
        let validator_keys = resolve_validator_keys(&self.reader, &accounts, window)?;

        let modules = transform_modules(TransformInput {
            accounts: &accounts,
            legacy_accounts: &legacy_accounts,
            vote_weights: &vote_weights,
            validator_keys: &validator_keys,
            snapshot_height: self.snapshot_height,
            params: &self.params,
        })?;

        let assembler = GenesisAssembler::new(Sha256GenesisBlockBuilder);
        let block = assembler.build_genesis_block(
            modules.assets,
            &GenesisBlockParams {
                snapshot_height: self.snapshot_height,
                snapshot_block_id: snapshot_block.id,
                snapshot_timestamp: snapshot_block.timestamp,
                block_time_secs: self.block_time_secs,
            },
        )?;

        log_summary(&modules.summary, &block);
        Ok(MigrationOutcome {
            block,
            summary: modules.summary,
        })
    }
}

fn log_summary(summary: &TransformSummary, block: &GenesisBlock) {
    info!("===========================================");
    info!("  Migration summary");
    info!("===========================================");
    info!("Accounts:        {}", summary.accounts);
    info!("Validators:      {}", summary.validators);
    info!("Stakers:         {}", summary.stakers);
    info!("Legacy accounts: {}", summary.legacy_accounts);
    info!("Legacy reserve:  {}", summary.legacy_reserve);
    info!("Total supply:    {}", summary.total_supply);
    info!("Genesis height:  {}", block.header.height);
    info!("Genesis id:      {}", hex::encode(block.id));
}
