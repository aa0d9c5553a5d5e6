//! Closed per-axis outcomes and the per-endpoint result record.

use crate::config::ProbeMode;
use crate::endpoint::EndpointIdentity;

/// Result of the DNS probe for one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsOutcome {
    /// First address returned by the resolver, in resolver order.
    Resolved(String),
    /// Opaque, human readable resolver error. Never branch on its content.
    Failed(String),
    /// The host is a literal address, nothing to resolve.
    Skipped,
}

/// Result of the ICMP echo probe for one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PingOutcome {
    Reachable,
    Unreachable,
}

impl From<bool> for PingOutcome {
    fn from(reachable: bool) -> Self {
        if reachable {
            PingOutcome::Reachable
        } else {
            PingOutcome::Unreachable
        }
    }
}

/// Everything learned about a single endpoint during a run.
///
/// `dns` is `Some` exactly when the mode includes DNS, `ping` exactly when
/// it includes ping. A `None` is "not checked", never a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResult {
    pub identity: EndpointIdentity,
    pub dns: Option<DnsOutcome>,
    pub ping: Option<PingOutcome>,
}

impl EndpointResult {
    pub fn new(
        identity: EndpointIdentity,
        dns: Option<DnsOutcome>,
        ping: Option<PingOutcome>,
    ) -> Self {
        Self {
            identity,
            dns,
            ping,
        }
    }

    /// Result for an endpoint whose unit of work died before finishing.
    /// Every active axis is marked as failed.
    pub fn faulted(identity: EndpointIdentity, mode: ProbeMode, reason: &str) -> Self {
        let dns = mode
            .includes_dns()
            .then(|| DnsOutcome::Failed(format!("internal error: {reason}")));
        let ping = mode.includes_ping().then_some(PingOutcome::Unreachable);
        Self::new(identity, dns, ping)
    }

    pub fn label(&self) -> String {
        self.identity.to_string()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
