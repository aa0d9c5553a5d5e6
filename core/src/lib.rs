//! # Smokecheck Core
//!
//! The concurrent endpoint-checking engine.
//!
//! * **[`extract`]**: pulls `host = ...` declarations out of config text.
//! * **[`probe`]**: DNS and ICMP probes against the real system.
//! * **[`dispatch`]**: bounded-concurrency fan-out with ordered fan-in.
//! * **[`report`]**: categorized view over the results.
//! * **[`policy`]**: turns a report into a success/failure verdict.
//! * **[`engine`]**: ties the pieces together for the CLI.

pub mod dispatch;
pub mod engine;
pub mod error;
pub mod extract;
pub mod policy;
pub mod probe;
pub mod progress;
pub mod report;

pub use engine::{Engine, RunOutcome};
