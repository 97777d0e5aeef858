//! # Shared Types Crate
//!
//! Primitives and the error taxonomy shared by the migration pipeline.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: address, key and amount types are defined once.
//! - **Byte Ordering**: every address sort in the pipeline compares raw bytes;
//!   the human-readable Lisk32 rendering is applied only at serialization time.
//! - **Fail Fast**: every pipeline stage reports through [`MigrationError`].

pub mod address;
pub mod entities;
pub mod errors;

pub use address::*;
pub use entities::*;
pub use errors::*;
