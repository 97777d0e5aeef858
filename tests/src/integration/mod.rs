//! # Integration Tests
//!
//! Drive the whole pipeline, snapshot store to genesis block, through the
//! runtime's `MigrationPipeline`.

pub mod pipeline;
pub mod properties;
