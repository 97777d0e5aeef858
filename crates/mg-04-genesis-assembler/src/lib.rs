//! # Genesis Assembler (mg-04)
//!
//! Orders the module genesis stores and passes them to a
//! [`GenesisBlockBuilder`]. Ordering is by module name under a locale-aware
//! collation: letters compare case-insensitively first, lowercase wins ties.
//!
//! ## Crate Structure
//!
//! - `domain/collation.rs` - module name comparison
//! - `domain/genesis_block.rs` - block header and block types
//! - `ports/outbound.rs` - the block builder port
//! - `service.rs` - `GenesisAssembler`

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::collation::locale_compare;
pub use domain::genesis_block::{GenesisBlock, GenesisBlockHeader, GenesisBlockParams};
pub use ports::outbound::GenesisBlockBuilder;
pub use service::GenesisAssembler;
