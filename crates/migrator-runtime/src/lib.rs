//! # Migrator Runtime Library
//!
//! Exposes the runtime's modules for testing. The entry point is the
//! `migrator` binary in `main.rs`.
//!
//! ## Modules
//!
//! - `container/` - configuration and CLI layering
//! - `adapters/` - RocksDB implementation of the snapshot store port
//! - `genesis/` - SHA-256 genesis block builder and the output writer
//! - `pipeline.rs` - the end-to-end migration run

pub mod adapters;
pub mod container;
pub mod genesis;
pub mod pipeline;

pub use container::{CliArgs, ConfigError, MigratorConfig};
pub use pipeline::{MigrationOutcome, MigrationPipeline};
