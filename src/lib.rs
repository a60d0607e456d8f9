//! `covid-report` library crate.
//!
//! The binary (`covid-report`) is a thin wrapper around this library so that:
//!
//! - the positivity computation is testable without network access
//! - the clock and the feed are injected, not read from globals
//! - rendering stays separate from the arithmetic

pub mod app;
pub mod calc;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod plot;
pub mod report;
