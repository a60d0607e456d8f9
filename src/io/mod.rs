//! Input/output helpers.
//!
//! - feed CSV ingest (`ingest`)
//! - report file writes (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
