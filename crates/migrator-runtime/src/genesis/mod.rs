//! # Genesis Block Output
//!
//! - `builder.rs` - SHA-256 implementation of the block builder port
//! - `writer.rs` - writes the block and its digest to the output directory

pub mod builder;
pub mod writer;

pub use builder::Sha256GenesisBlockBuilder;
pub use writer::{write_genesis_block, GenesisFiles};
