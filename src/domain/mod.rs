//! Domain types used throughout the report pipeline.
//!
//! This module defines:
//!
//! - the per-day positivity figure (`Contagion`)
//! - the bundle handed to renderers (`ReportData`)
//! - run configuration (`ReportConfig`) and its defaults

pub mod types;

pub use types::*;
