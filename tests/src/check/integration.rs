#![cfg(test)]
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use smokecheck_common::config::{ProbeMode, RunConfig};
use smokecheck_common::endpoint::ConfigSource;
use smokecheck_common::outcome::{DnsOutcome, PingOutcome};
use smokecheck_common::probing::Prober;
use smokecheck_core::Engine;
use smokecheck_core::error::EngineError;
use smokecheck_core::policy::Verdict;
use smokecheck_core::probe::SystemProber;
use smokecheck_core::progress::Silent;

fn system_engine(mode: ProbeMode) -> Engine {
    Engine::with_system_prober(RunConfig::new(mode, 1, 20).unwrap())
}

/// Resolves like the system but answers every ping, so runs stay
/// independent of ICMP permissions on the test machine.
struct AlwaysReachable(SystemProber);

#[async_trait]
impl Prober for AlwaysReachable {
    async fn resolve(&self, host: &str) -> DnsOutcome {
        self.0.resolve(host).await
    }

    async fn ping(&self, _host: &str, _timeout: Duration) -> PingOutcome {
        PingOutcome::Reachable
    }
}

#[tokio::test]
async fn literal_skips_and_bad_name_fails() {
    let sources = vec![ConfigSource::new(
        "dns.conf",
        "host = 10.0.0.1\nhost = bad..host..name\n",
    )];

    let outcome = system_engine(ProbeMode::ResolveOnly)
        .check(&sources, &Silent)
        .await
        .unwrap();

    let results = outcome.results();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].identity.host, "10.0.0.1");
    assert_eq!(results[0].dns, Some(DnsOutcome::Skipped));
    assert!(
        matches!(results[1].dns, Some(DnsOutcome::Failed(_))),
        "expected resolution failure, got {:?}",
        results[1].dns
    );
    assert!(results.iter().all(|r| r.ping.is_none()));

    let summary = outcome.report().dns_summary();
    assert_eq!((summary.passed, summary.failed, summary.skipped), (0, 1, 1));
    assert_eq!(outcome.verdict(), Verdict::Failure);
}

#[tokio::test]
async fn config_without_hosts_is_rejected_before_probing() {
    let sources = vec![
        ConfigSource::new("a.conf", "*** Targets ***\nprobe = FPing\n"),
        ConfigSource::new("b.conf", ""),
    ];

    let err = system_engine(ProbeMode::Both)
        .check(&sources, &Silent)
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::NoEndpoints);
}

#[tokio::test]
async fn dns_failure_fails_run_despite_reachable_ping() {
    let engine = Engine::new(
        Arc::new(AlwaysReachable(SystemProber::new())),
        RunConfig::new(ProbeMode::Both, 1, 4).unwrap(),
    );
    let sources = vec![ConfigSource::new("mixed.conf", "host = bad..host..name\n")];

    let outcome = engine.check(&sources, &Silent).await.unwrap();
    let report = outcome.report();

    assert_eq!(report.dns_failed.len(), 1);
    assert_eq!(report.ping_reachable.len(), 1);
    assert_eq!(outcome.verdict(), Verdict::Failure);
}

#[tokio::test]
async fn results_follow_source_then_line_order() {
    let engine = Engine::new(
        Arc::new(AlwaysReachable(SystemProber::new())),
        RunConfig::new(ProbeMode::Both, 1, 8).unwrap(),
    );
    let sources = vec![
        ConfigSource::new("b.conf", "host = 192.0.2.2\nhost = ::1\n"),
        ConfigSource::new("a.conf", "host = 192.0.2.1\nhost = 192.0.2.2\n"),
    ];

    let outcome = engine.check(&sources, &Silent).await.unwrap();
    let labels: Vec<String> = outcome.results().iter().map(|r| r.label()).collect();

    assert_eq!(
        labels,
        vec![
            "b.conf: 192.0.2.2",
            "b.conf: ::1",
            "a.conf: 192.0.2.1",
            "a.conf: 192.0.2.2",
        ]
    );
    assert_eq!(outcome.verdict(), Verdict::Success);
}

#[tokio::test]
async fn missing_ping_binary_marks_endpoints_unreachable() {
    let engine = Engine::new(
        Arc::new(SystemProber::with_ping_program("smokecheck-no-such-ping-binary")),
        RunConfig::new(ProbeMode::PingOnly, 1, 2).unwrap(),
    );
    let sources = vec![ConfigSource::new("ips.conf", "host = 127.0.0.1\nhost = ::1\n")];

    let outcome = engine.check(&sources, &Silent).await.unwrap();

    assert!(outcome
        .results()
        .iter()
        .all(|r| r.ping == Some(PingOutcome::Unreachable) && r.dns.is_none()));
    assert_eq!(outcome.report().ping_summary().failed, 2);
    assert_eq!(outcome.verdict(), Verdict::Failure);
}

#[tokio::test]
#[ignore]
async fn loopback_passes_both_probes() {
    let sources = vec![ConfigSource::new(
        "local.conf",
        "host = localhost\nhost = 127.0.0.1\n",
    )];

    let outcome = system_engine(ProbeMode::Both)
        .check(&sources, &Silent)
        .await
        .unwrap();

    assert_eq!(outcome.verdict(), Verdict::Success);
}
