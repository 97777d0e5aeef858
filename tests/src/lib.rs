//! # Chain Migrator Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Seeded generator for mainnet-shaped snapshots
//! └── integration/      # Cross-crate pipeline runs
//!     ├── pipeline.rs   # Scenario tests against known snapshots
//!     └── properties.rs # Invariants checked over many seeds
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p mg-tests
//!
//! # By category
//! cargo test -p mg-tests integration::pipeline
//! cargo test -p mg-tests integration::properties
//!
//! # Benchmarks
//! cargo bench -p mg-tests
//! ```

pub mod fixtures;
pub mod integration;
