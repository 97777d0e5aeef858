//! Writes `genesis_block.json` and `genesis_block.json.SHA256`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mg_04_genesis_assembler::GenesisBlock;
use sha2::{Digest, Sha256};
use tracing::info;

pub const GENESIS_BLOCK_FILE: &str = "genesis_block.json";
pub const GENESIS_BLOCK_DIGEST_FILE: &str = "genesis_block.json.SHA256";

/// Paths and digest of a written genesis block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisFiles {
    pub block_path: PathBuf,
    pub digest_path: PathBuf,
    /// Hex SHA-256 of the block file contents.
    pub digest: String,
}

/// Write the block as pretty JSON plus its SHA-256 digest.
///
/// The output directory is created if missing.
pub fn write_genesis_block(block: &GenesisBlock, output_dir: &Path) -> Result<GenesisFiles> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let json = serde_json::to_vec_pretty(block).context("Failed to serialize genesis block")?;
    let digest = hex::encode(Sha256::digest(&json));

    let block_path = output_dir.join(GENESIS_BLOCK_FILE);
    fs::write(&block_path, &json)
        .with_context(|| format!("Failed to write {}", block_path.display()))?;
    let digest_path = output_dir.join(GENESIS_BLOCK_DIGEST_FILE);
    fs::write(&digest_path, format!("{digest}  {GENESIS_BLOCK_FILE}\n"))
        .with_context(|| format!("Failed to write {}", digest_path.display()))?;

    info!(
        path = %block_path.display(),
        bytes = json.len(),
        sha256 = %digest,
        "Genesis block written"
    );
    Ok(GenesisFiles {
        block_path,
        digest_path,
        digest,
    })
}
