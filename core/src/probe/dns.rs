use smokecheck_common::outcome::DnsOutcome;
use smokecheck_common::utils::ip;
use tokio::net;
use tracing::debug;

/// Resolves `host` and reports the first address in resolver order.
///
/// Runs `getaddrinfo` (any family, stream sockets) on the blocking pool with
/// the resolver's own timeout. Literal addresses are skipped outright.
pub async fn resolve(host: &str) -> DnsOutcome {
    if ip::is_literal_address(host) {
        return DnsOutcome::Skipped;
    }

    match net::lookup_host((host, 0)).await {
        Ok(mut addrs) => match addrs.next() {
            Some(addr) => {
                debug!(host, address = %addr.ip(), "resolved");
                DnsOutcome::Resolved(addr.ip().to_string())
            }
            None => DnsOutcome::Failed(format!("no addresses found for {host}")),
        },
        Err(e) => {
            debug!(host, "resolution failed: {e}");
            DnsOutcome::Failed(e.to_string())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn literal_addresses_are_skipped() {
        assert_eq!(resolve("192.0.2.1").await, DnsOutcome::Skipped);
        assert_eq!(resolve("::1").await, DnsOutcome::Skipped);
    }

    #[tokio::test]
    async fn malformed_name_fails_with_reason() {
        match resolve("bad..host..name").await {
            DnsOutcome::Failed(reason) => assert!(!reason.is_empty()),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn localhost_resolves_to_loopback() {
        match resolve("localhost").await {
            DnsOutcome::Resolved(addr) => assert!(addr == "127.0.0.1" || addr == "::1"),
            other => panic!("expected localhost to resolve, got {other:?}"),
        }
    }

    #[tokio::test]
    #[ignore]
    async fn public_name_resolves() {
        assert!(matches!(
            resolve("one.one.one.one").await,
            DnsOutcome::Resolved(_)
        ));
    }
}
