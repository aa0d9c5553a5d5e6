//! # Exit Status Policy

use crate::report::AggregateReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Success,
    Failure,
}

impl Verdict {
    pub fn is_success(self) -> bool {
        self == Verdict::Success
    }
}

/// Fails when any endpoint failed DNS or was unreachable. Axes that were not
/// checked have empty lists and cannot fail the run.
pub fn decide(report: &AggregateReport<'_>) -> Verdict {
    if report.dns_failed.is_empty() && report.ping_unreachable.is_empty() {
        Verdict::Success
    } else {
        Verdict::Failure
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

#[cfg(test)]
mod tests {
    use super::*;
    use smokecheck_common::endpoint::EndpointIdentity;
    use smokecheck_common::outcome::{DnsOutcome, EndpointResult, PingOutcome};

    fn verdict(results: &[EndpointResult]) -> Verdict {
        decide(&AggregateReport::from_results(results))
    }

    fn result(dns: Option<DnsOutcome>, ping: Option<PingOutcome>) -> EndpointResult {
        EndpointResult::new(EndpointIdentity::new("t.conf", "h"), dns, ping)
    }

    #[test]
    fn dns_failure_fails_run_even_when_ping_passes() {
        let results = vec![result(
            Some(DnsOutcome::Failed("nxdomain".into())),
            Some(PingOutcome::Reachable),
        )];
        assert_eq!(verdict(&results), Verdict::Failure);
    }

    #[test]
    fn unreachable_fails_run() {
        let results = vec![
            result(None, Some(PingOutcome::Reachable)),
            result(None, Some(PingOutcome::Unreachable)),
        ];
        assert_eq!(verdict(&results), Verdict::Failure);
    }

    #[test]
    fn all_skipped_is_success() {
        let results = vec![
            result(Some(DnsOutcome::Skipped), None),
            result(Some(DnsOutcome::Skipped), None),
        ];
        assert!(verdict(&results).is_success());
    }

    #[test]
    fn passes_and_skips_are_success() {
        let results = vec![
            result(Some(DnsOutcome::Resolved("192.0.2.1".into())), Some(PingOutcome::Reachable)),
            result(Some(DnsOutcome::Skipped), Some(PingOutcome::Reachable)),
        ];
        assert_eq!(verdict(&results), Verdict::Success);
    }
}
