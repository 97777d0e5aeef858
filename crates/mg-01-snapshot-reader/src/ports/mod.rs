//! # Ports
//!
//! - `inbound` - What the reader offers to the pipeline
//! - `outbound` - What the reader needs from the host (store, codec)

pub mod inbound;
pub mod outbound;
