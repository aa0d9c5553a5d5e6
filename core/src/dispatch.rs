//! # Concurrent Dispatcher
//!
//! Runs one unit of work per endpoint on a bounded pool and hands the
//! results back in input order.
//!
//! Every endpoint gets its own task. A semaphore of `concurrency_limit`
//! permits gates the probing, so at most that many units are in flight.
//! Completed units report `(index, result)` and land in a pre-sized slot,
//! which restores input order without sorting.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use smokecheck_common::config::{ProbeMode, RunConfig};
use smokecheck_common::endpoint::EndpointIdentity;
use smokecheck_common::outcome::{DnsOutcome, EndpointResult};
use smokecheck_common::probing::Prober;
use smokecheck_common::utils::ip;
use tokio::sync::Semaphore;
use tokio::task::{self, JoinSet};
use tracing::{debug, warn};

use crate::error::EngineError;
use crate::progress::Progress;

pub async fn dispatch(
    prober: Arc<dyn Prober>,
    endpoints: Vec<EndpointIdentity>,
    config: RunConfig,
    progress: &dyn Progress,
) -> Result<Vec<EndpointResult>, EngineError> {
    let total = endpoints.len();
    let mode = config.mode();
    let timeout = config.timeout();
    progress.on_start(total);

    let permits = Arc::new(Semaphore::new(config.concurrency_limit()));
    let mut units: JoinSet<(usize, EndpointResult)> = JoinSet::new();
    let mut origins: HashMap<task::Id, (usize, EndpointIdentity)> =
        HashMap::with_capacity(total);

    for (index, identity) in endpoints.into_iter().enumerate() {
        let prober = Arc::clone(&prober);
        let permits = Arc::clone(&permits);
        let unit_identity = identity.clone();

        let handle = units.spawn(async move {
            let Ok(_permit) = permits.acquire_owned().await else {
                return (
                    index,
                    EndpointResult::faulted(unit_identity, mode, "worker pool closed"),
                );
            };
            let result = check_endpoint(prober.as_ref(), unit_identity, mode, timeout).await;
            (index, result)
        });
        origins.insert(handle.id(), (index, identity));
    }

    let mut slots: Vec<Option<EndpointResult>> = (0..total).map(|_| None).collect();

    while let Some(joined) = units.join_next_with_id().await {
        let (index, result) = match joined {
            Ok((_, completed)) => completed,
            Err(err) => {
                let Some((index, identity)) = origins.remove(&err.id()) else {
                    warn!("lost track of a failed probe task: {err}");
                    continue;
                };
                warn!(endpoint = %identity, "probe task failed: {err}");
                (index, EndpointResult::faulted(identity, mode, &err.to_string()))
            }
        };
        slots[index] = Some(result);
        progress.on_complete();
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| slot.ok_or(EngineError::MissingResult(index)))
        .collect()
}

/// One endpoint's unit of work. DNS runs before ping; both outcomes are
/// attached to the same result.
async fn check_endpoint(
    prober: &dyn Prober,
    identity: EndpointIdentity,
    mode: ProbeMode,
    timeout: Duration,
) -> EndpointResult {
    let dns = if mode.includes_dns() {
        if ip::is_literal_address(&identity.host) {
            Some(DnsOutcome::Skipped)
        } else {
            Some(prober.resolve(&identity.host).await)
        }
    } else {
        None
    };

    let ping = if mode.includes_ping() {
        Some(prober.ping(&identity.host, timeout).await)
    } else {
        None
    };

    debug!(endpoint = %identity, ?dns, ?ping, "endpoint checked");
    EndpointResult::new(identity, dns, ping)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
