use std::time::Duration;

use crate::error::ConfigError;

/// Which probes run against every endpoint. Chosen once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeMode {
    ResolveOnly,
    PingOnly,
    #[default]
    Both,
}

impl ProbeMode {
    pub fn includes_dns(self) -> bool {
        matches!(self, ProbeMode::ResolveOnly | ProbeMode::Both)
    }

    pub fn includes_ping(self) -> bool {
        matches!(self, ProbeMode::PingOnly | ProbeMode::Both)
    }
}

/// Immutable settings for a single run.
///
/// Only constructible through [`RunConfig::new`], so a value in hand has
/// already been validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    mode: ProbeMode,
    timeout_secs: u64,
    concurrency_limit: usize,
}

impl RunConfig {
    pub const DEFAULT_TIMEOUT_SECS: i64 = 3;
    pub const DEFAULT_CONCURRENCY: i64 = 20;

    /// Validates the raw values. Both must be positive integers.
    pub fn new(
        mode: ProbeMode,
        timeout_secs: i64,
        concurrency_limit: i64,
    ) -> Result<Self, ConfigError> {
        let timeout_secs = u64::try_from(timeout_secs)
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(ConfigError::NonPositiveTimeout(timeout_secs))?;

        let concurrency_limit = usize::try_from(concurrency_limit)
            .ok()
            .filter(|limit| *limit > 0)
            .ok_or(ConfigError::NonPositiveConcurrency(concurrency_limit))?;

        Ok(Self {
            mode,
            timeout_secs,
            concurrency_limit,
        })
    }

    pub fn mode(&self) -> ProbeMode {
        self.mode
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn concurrency_limit(&self) -> usize {
        self.concurrency_limit
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: ProbeMode::default(),
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS as u64,
            concurrency_limit: Self::DEFAULT_CONCURRENCY as usize,
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
