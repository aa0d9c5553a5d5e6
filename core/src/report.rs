//! # Result Aggregator
//!
//! Partitions per-endpoint results into disjoint categories per axis. The
//! report only borrows the results, so it can never drift from them.

use smokecheck_common::outcome::{DnsOutcome, EndpointResult, PingOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DnsSummary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PingSummary {
    pub passed: usize,
    pub failed: usize,
}

/// Categorized view over a run. Each list keeps input order.
#[derive(Debug, Default)]
pub struct AggregateReport<'a> {
    pub total: usize,
    pub dns_resolved: Vec<&'a EndpointResult>,
    pub dns_failed: Vec<&'a EndpointResult>,
    pub dns_skipped: Vec<&'a EndpointResult>,
    pub ping_reachable: Vec<&'a EndpointResult>,
    pub ping_unreachable: Vec<&'a EndpointResult>,
}

impl<'a> AggregateReport<'a> {
    pub fn from_results(results: &'a [EndpointResult]) -> Self {
        let mut report = Self {
            total: results.len(),
            ..Self::default()
        };

        for result in results {
            match &result.dns {
                Some(DnsOutcome::Resolved(_)) => report.dns_resolved.push(result),
                Some(DnsOutcome::Failed(_)) => report.dns_failed.push(result),
                Some(DnsOutcome::Skipped) => report.dns_skipped.push(result),
                None => {}
            }
            match result.ping {
                Some(PingOutcome::Reachable) => report.ping_reachable.push(result),
                Some(PingOutcome::Unreachable) => report.ping_unreachable.push(result),
                None => {}
            }
        }

        report
    }

    pub fn dns_summary(&self) -> DnsSummary {
        DnsSummary {
            passed: self.dns_resolved.len(),
            failed: self.dns_failed.len(),
            skipped: self.dns_skipped.len(),
        }
    }

    pub fn ping_summary(&self) -> PingSummary {
        PingSummary {
            passed: self.ping_reachable.len(),
            failed: self.ping_unreachable.len(),
        }
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
