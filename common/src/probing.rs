//! # Probing Port
//!
//! The boundary between the dispatcher and the network. The engine only
//! talks to a [`Prober`]; the system implementation lives in
//! `smokecheck-core`, tests plug in scripted ones.

use std::time::Duration;

use async_trait::async_trait;

use crate::outcome::{DnsOutcome, PingOutcome};

#[async_trait]
pub trait Prober: Send + Sync {
    /// Forward-resolves `host`. Literal addresses yield [`DnsOutcome::Skipped`]
    /// without any network I/O.
    async fn resolve(&self, host: &str) -> DnsOutcome;

    /// Sends a single echo request to `host`, waiting at most `timeout` for
    /// the reply.
    async fn ping(&self, host: &str, timeout: Duration) -> PingOutcome;
}
