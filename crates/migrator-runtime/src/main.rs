//! # Chain Migrator
//!
//! Entry point of the `migrator` binary.
//!
//! ## Run Sequence
//!
//! 1. Parse flags and `MG_*` environment variables over the defaults
//! 2. Validate the configuration before touching the database
//! 3. Open the snapshot database read-only
//! 4. Run the pipeline on a blocking thread, raced against Ctrl-C
//! 5. Write the genesis block and its digest
//!
//! A failed or interrupted run writes nothing and exits non-zero.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use migrator_runtime::adapters::RocksDbSnapshotStore;
use migrator_runtime::genesis::write_genesis_block;
use migrator_runtime::{CliArgs, MigrationPipeline};

/// Exit status for a run cancelled with Ctrl-C.
const EXIT_INTERRUPTED: i32 = 130;

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("Invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let config = CliArgs::parse().into_config();
    config.validate().context("Invalid configuration")?;

    info!("===========================================");
    info!("  Chain Migrator v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");
    info!("Database:        {}", config.storage.db_path.display());
    info!("Snapshot height: {}", config.snapshot.snapshot_height);
    info!("Previous height: {}", config.snapshot.previous_snapshot_height);
    info!("Output dir:      {}", config.output.output_dir.display());

    let store = RocksDbSnapshotStore::open_read_only(&config.rocksdb())
        .context("Failed to open snapshot database")?;
    let pipeline =
        MigrationPipeline::new(store, &config).context("Invalid protocol configuration")?;

    let run = tokio::task::spawn_blocking(move || pipeline.run());
    let outcome = tokio::select! {
        joined = run => joined.context("Migration task panicked")?.context("Migration failed")?,
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted, no genesis block written");
            std::process::exit(EXIT_INTERRUPTED);
        }
    };

    let files = write_genesis_block(&outcome.block, &config.output.output_dir)?;
    info!(
        block = %files.block_path.display(),
        digest = %files.digest_path.display(),
        "Migration complete"
    );
    Ok(())
}
