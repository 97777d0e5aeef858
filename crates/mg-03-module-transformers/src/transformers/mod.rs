//! # Transformers
//!
//! One module per v4 genesis store. Addresses are kept as raw bytes through
//! sorting and rendered as Lisk32 only by serialization.

pub mod auth;
pub mod interoperability;
pub mod legacy;
pub mod pos;
pub mod token;
