//! # Smokecheck Common
//!
//! Shared vocabulary of the endpoint checker: the endpoint model, the run
//! configuration, the per-probe outcomes and the [`probing::Prober`] port the
//! engine drives.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod outcome;
pub mod probing;
pub mod utils;
