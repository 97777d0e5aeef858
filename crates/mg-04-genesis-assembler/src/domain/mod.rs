pub mod collation;
pub mod genesis_block;
