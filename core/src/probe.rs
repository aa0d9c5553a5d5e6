//! # System Probes
//!
//! The production [`Prober`]: forward DNS through the platform resolver and
//! a single ICMP echo through the host's `ping` executable.

pub mod dns;
pub mod ping;

use std::ffi::OsString;
use std::time::Duration;

use async_trait::async_trait;
use smokecheck_common::outcome::{DnsOutcome, PingOutcome};
use smokecheck_common::probing::Prober;

const DEFAULT_PING_PROGRAM: &str = "ping";

#[derive(Debug, Clone)]
pub struct SystemProber {
    ping_program: OsString,
}

impl SystemProber {
    pub fn new() -> Self {
        Self::with_ping_program(DEFAULT_PING_PROGRAM)
    }

    /// Uses `program` instead of the `ping` found on `PATH`.
    pub fn with_ping_program(program: impl Into<OsString>) -> Self {
        Self {
            ping_program: program.into(),
        }
    }
}

impl Default for SystemProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prober for SystemProber {
    async fn resolve(&self, host: &str) -> DnsOutcome {
        dns::resolve(host).await
    }

    async fn ping(&self, host: &str, timeout: Duration) -> PingOutcome {
        ping::ping(&self.ping_program, host, timeout).await
    }
}
