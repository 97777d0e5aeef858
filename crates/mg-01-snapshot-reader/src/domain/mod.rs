//! # Domain Layer
//!
//! - `entities` - Decoded, fixed-size domain types
//! - `records` - Wire records exactly as stored
//! - `keys` - Store key layout
//! - `errors` - Store and codec errors

pub mod entities;
pub mod errors;
pub mod keys;
pub mod records;
