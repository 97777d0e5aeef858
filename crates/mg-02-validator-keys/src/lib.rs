//! # Validator-Key Resolver (mg-02)
//!
//! Determines the generator public key of every validator from the blocks
//! produced between the previous snapshot and the current one. The v4 chain
//! needs a generator key per validator; v3 accounts do not store one, so it
//! is recovered from history.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Window Bounds | `previous < snapshot`, heights `(previous, snapshot]` only |
//! | 2 | Recency | A later observation overwrites an earlier one |
//! | 3 | Sender Filter | Transaction senders count only if they registered a username |
//! | 4 | Consistency | An indexed header or transaction that is missing aborts the run |
//!
//! Addresses without an observation are absent from the map; the PoS
//! transformer substitutes its sentinel key.

pub mod domain;
pub mod service;

pub use domain::key_map::ValidatorKeyMap;
pub use domain::window::HeightWindow;
pub use service::resolve_validator_keys;
