//! # Endpoint Checking Engine
//!
//! Entry point used by the CLI: extract endpoints from config sources, probe
//! them on the bounded pool and expose the ordered results together with
//! their aggregate view.

use std::sync::Arc;

use smokecheck_common::config::RunConfig;
use smokecheck_common::endpoint::{ConfigSource, EndpointIdentity};
use smokecheck_common::outcome::EndpointResult;
use smokecheck_common::probing::Prober;
use tracing::info;

use crate::dispatch;
use crate::error::EngineError;
use crate::extract;
use crate::policy::{self, Verdict};
use crate::probe::SystemProber;
use crate::progress::Progress;
use crate::report::AggregateReport;

pub struct Engine {
    prober: Arc<dyn Prober>,
    config: RunConfig,
}

impl Engine {
    pub fn new(prober: Arc<dyn Prober>, config: RunConfig) -> Self {
        Self { prober, config }
    }

    pub fn with_system_prober(config: RunConfig) -> Self {
        Self::new(Arc::new(SystemProber::new()), config)
    }

    /// Extracts every endpoint from `sources` and checks them.
    ///
    /// Fails with [`EngineError::NoEndpoints`] before any probing when the
    /// sources declare no hosts at all.
    pub async fn check(
        &self,
        sources: &[ConfigSource],
        progress: &dyn Progress,
    ) -> Result<RunOutcome, EngineError> {
        let endpoints = extract::endpoints(sources);
        info!(
            "extracted {} endpoints from {} sources",
            endpoints.len(),
            sources.len()
        );
        self.check_endpoints(endpoints, progress).await
    }

    /// Checks already extracted endpoints.
    pub async fn check_endpoints(
        &self,
        endpoints: Vec<EndpointIdentity>,
        progress: &dyn Progress,
    ) -> Result<RunOutcome, EngineError> {
        if endpoints.is_empty() {
            return Err(EngineError::NoEndpoints);
        }

        let results =
            dispatch::dispatch(Arc::clone(&self.prober), endpoints, self.config, progress).await?;
        Ok(RunOutcome { results })
    }
}

/// Ordered results of a finished run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    results: Vec<EndpointResult>,
}

impl RunOutcome {
    pub fn results(&self) -> &[EndpointResult] {
        &self.results
    }

    pub fn report(&self) -> AggregateReport<'_> {
        AggregateReport::from_results(&self.results)
    }

    pub fn verdict(&self) -> Verdict {
        policy::decide(&self.report())
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
    use crate::progress::Silent;
    use async_trait::async_trait;
    use smokecheck_common::config::ProbeMode;
    use smokecheck_common::outcome::{DnsOutcome, PingOutcome};
    use std::time::Duration;

    struct NameFails;

    #[async_trait]
    impl Prober for NameFails {
        async fn resolve(&self, _host: &str) -> DnsOutcome {
            DnsOutcome::Failed("Name or service not known".to_string())
        }

        async fn ping(&self, _host: &str, _timeout: Duration) -> PingOutcome {
            PingOutcome::Reachable
        }
    }

    fn engine(mode: ProbeMode) -> Engine {
        Engine::new(Arc::new(NameFails), RunConfig::new(mode, 1, 4).unwrap())
    }

    #[tokio::test]
    async fn sources_without_hosts_are_rejected() {
        let sources = vec![ConfigSource::new("empty.conf", "*** Targets ***\nmenu = Top\n")];
        let err = engine(ProbeMode::Both)
            .check(&sources, &Silent)
            .await
            .unwrap_err();
        assert_eq!(err, EngineError::NoEndpoints);

        let err = engine(ProbeMode::Both).check(&[], &Silent).await.unwrap_err();
        assert_eq!(err, EngineError::NoEndpoints);
    }

    #[tokio::test]
    async fn literal_and_failing_name_in_resolve_only_mode() {
        let sources = vec![ConfigSource::new(
            "dns.conf",
            "host = 10.0.0.1\nhost = bad..host..name\n",
        )];
        let outcome = engine(ProbeMode::ResolveOnly)
            .check(&sources, &Silent)
            .await
            .unwrap();

        let results = outcome.results();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].dns, Some(DnsOutcome::Skipped));
        assert!(matches!(results[1].dns, Some(DnsOutcome::Failed(_))));

        let summary = outcome.report().dns_summary();
        assert_eq!((summary.passed, summary.failed, summary.skipped), (0, 1, 1));
        assert_eq!(outcome.verdict(), Verdict::Failure);
    }

    #[tokio::test]
    async fn all_literals_in_resolve_only_mode_succeed() {
        let sources = vec![ConfigSource::new("ips.conf", "host = 192.0.2.1\nhost = ::1\n")];
        let outcome = engine(ProbeMode::ResolveOnly)
            .check(&sources, &Silent)
            .await
            .unwrap();
        assert_eq!(outcome.verdict(), Verdict::Success);
    }
}
