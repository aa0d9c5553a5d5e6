use std::ffi::OsStr;
use std::process::Stdio;
use std::time::Duration;

use smokecheck_common::outcome::PingOutcome;
use tokio::process::Command;
use tokio::time;
use tracing::debug;

/// Extra wall-clock time granted on top of the probe's own wait before the
/// child is killed.
const CEILING_GRACE: Duration = Duration::from_secs(5);

/// Argument dialects of the `ping` executables we know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// `-n <count> -w <millis>`
    Windows,
    /// `-c <count> -W <millis>`
    MacOs,
    /// `-c <count> -W <secs>`
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Unix
        }
    }
}

/// Arguments for exactly one echo request waiting at most `timeout`.
pub fn ping_args(platform: Platform, host: &str, timeout: Duration) -> Vec<String> {
    let (count_flag, wait_flag, wait) = match platform {
        Platform::Windows => ("-n", "-w", timeout.as_millis().to_string()),
        Platform::MacOs => ("-c", "-W", timeout.as_millis().to_string()),
        Platform::Unix => ("-c", "-W", timeout.as_secs().to_string()),
    };

    vec![
        count_flag.to_string(),
        "1".to_string(),
        wait_flag.to_string(),
        wait,
        host.to_string(),
    ]
}

pub fn hard_ceiling(timeout: Duration) -> Duration {
    timeout + CEILING_GRACE
}

/// Pings `host` once with `program`.
///
/// Exit status zero is the only success. A missing executable, a spawn
/// error or a run past [`hard_ceiling`] all count as unreachable.
pub async fn ping(program: &OsStr, host: &str, timeout: Duration) -> PingOutcome {
    let args = ping_args(Platform::current(), host, timeout);
    let reachable = run_probe(program, &args, hard_ceiling(timeout)).await;
    debug!(host, reachable, "ping finished");
    PingOutcome::from(reachable)
}

async fn run_probe(program: &OsStr, args: &[String], ceiling: Duration) -> bool {
    let mut child = match Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            debug!("could not start {}: {e}", program.to_string_lossy());
            return false;
        }
    };

    match time::timeout(ceiling, child.wait()).await {
        Ok(Ok(status)) => status.success(),
        Ok(Err(e)) => {
            debug!("waiting on {} failed: {e}", program.to_string_lossy());
            false
        }
        Err(_) => {
            debug!(
                "{} exceeded {}s, killing it",
                program.to_string_lossy(),
                ceiling.as_secs()
            );
            let _ = child.kill().await;
            false
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
