//! # Module Transformers (mg-03)
//!
//! Reshapes the decoded v3 snapshot into the genesis stores of the five v4
//! modules. Each transformer is a pure function of its inputs: the account
//! set plus whatever the resolver and chain-state records contributed.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement |
//! |----|-----------|-------------|
//! | 1 | Byte Ordering | Every list is sorted by raw address bytes before rendering |
//! | 2 | Supply Conservation | `totalSupply` equals the user substore sum, checked in `token` |
//! | 3 | Lock Consistency | `pos` locks equal the sum of votes and pending unlocks |
//! | 4 | Historical Validators | `initValidators` come from the recorded weights of round `r - 2` |
//! | 5 | No Partial Output | A transformer returns its whole store or an error |
//!
//! ## Data Flow
//!
//! ```text
//! accounts ──┬──→ auth
//!            ├──→ pos ←── validator keys, vote weights
//!            └──→ token ←── legacy reserve sum ←── legacy ←── unregistered addresses
//! params ───────→ interoperability
//! ```

#![recursion_limit = "256"]

pub mod domain;
pub mod schemas;
pub mod service;
pub mod transformers;

pub use domain::asset::{
    GenesisAsset, MODULE_NAME_AUTH, MODULE_NAME_INTEROPERABILITY, MODULE_NAME_LEGACY,
    MODULE_NAME_POS, MODULE_NAME_TOKEN,
};
pub use domain::params::ProtocolParams;
pub use service::{transform_modules, ModuleAssets, TransformInput, TransformSummary};
pub use transformers::legacy::LegacyTransform;
pub use transformers::token::TokenTransform;
