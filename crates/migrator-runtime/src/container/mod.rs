//! # Container
//!
//! Configuration for a migration run and the CLI that layers onto it.

pub mod cli;
pub mod config;

pub use cli::CliArgs;
pub use config::{
    ConfigError, MigratorConfig, OutputConfig, ProtocolConfig, SnapshotConfig, StorageConfig,
};
