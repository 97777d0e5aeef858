//! # Adapters
//!
//! Implementations of the outbound ports that live in this crate. The
//! RocksDB store adapter belongs to the runtime, which owns the native
//! dependency.

pub mod codec;
