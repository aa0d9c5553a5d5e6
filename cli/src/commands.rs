pub mod check;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use smokecheck_common::config::{ProbeMode, RunConfig};
use smokecheck_common::error::ConfigError;

#[derive(Parser, Debug)]
#[command(name = "smokecheck")]
#[command(about = "Validate the host endpoints declared in Smokeping .conf files.")]
pub struct CommandLine {
    /// Config files to check (default: every *.conf in --dir)
    pub files: Vec<PathBuf>,

    /// Only check DNS resolution
    #[arg(long, conflicts_with = "ping_only")]
    pub resolve_only: bool,

    /// Only check ping reachability
    #[arg(long)]
    pub ping_only: bool,

    /// Ping timeout in seconds
    #[arg(
        long,
        default_value_t = RunConfig::DEFAULT_TIMEOUT_SECS,
        allow_negative_numbers = true
    )]
    pub timeout: i64,

    /// Number of endpoints probed in parallel
    #[arg(
        long,
        default_value_t = RunConfig::DEFAULT_CONCURRENCY,
        allow_negative_numbers = true
    )]
    pub workers: i64,

    /// Directory searched for *.conf files when none are named
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn mode(&self) -> ProbeMode {
        if self.resolve_only {
            ProbeMode::ResolveOnly
        } else if self.ping_only {
            ProbeMode::PingOnly
        } else {
            ProbeMode::Both
        }
    }

    pub fn run_config(&self) -> Result<RunConfig, ConfigError> {
        RunConfig::new(self.mode(), self.timeout, self.workers)
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

    fn parse(args: &[&str]) -> Result<CommandLine, clap::Error> {
        let argv = std::iter::once("smokecheck").chain(args.iter().copied());
        CommandLine::try_parse_from(argv)
    }

    #[test]
    fn defaults_to_both_probes() {
        let cmd = parse(&[]).unwrap();
        assert_eq!(cmd.mode(), ProbeMode::Both);
        assert!(cmd.files.is_empty());
        assert_eq!(cmd.dir, PathBuf::from("."));
        assert_eq!(cmd.run_config().unwrap(), RunConfig::default());
    }

    #[test]
    fn mode_flags_select_single_axis() {
        let resolve_only = parse(&["--resolve-only"]).unwrap();
        assert_eq!(resolve_only.mode(), ProbeMode::ResolveOnly);
        let ping_only = parse(&["--ping-only"]).unwrap();
        assert_eq!(ping_only.mode(), ProbeMode::PingOnly);
    }

    #[test]
    fn mode_flags_are_mutually_exclusive() {
        assert!(parse(&["--resolve-only", "--ping-only"]).is_err());
    }

    #[test]
    fn files_and_numbers_are_parsed() {
        let args = ["b.conf", "a.conf", "--timeout", "5", "--workers", "4"];
        let cmd = parse(&args).unwrap();
        assert_eq!(
            cmd.files,
            vec![PathBuf::from("b.conf"), PathBuf::from("a.conf")]
        );
        let cfg = cmd.run_config().unwrap();
        assert_eq!(cfg.timeout_secs(), 5);
        assert_eq!(cfg.concurrency_limit(), 4);
    }

    #[test]
    fn non_positive_numbers_fail_validation_not_parsing() {
        let cmd = parse(&["--timeout", "-1"]).unwrap();
        assert_eq!(cmd.run_config(), Err(ConfigError::NonPositiveTimeout(-1)));

        let cmd = parse(&["--workers", "0"]).unwrap();
        assert_eq!(
            cmd.run_config(),
            Err(ConfigError::NonPositiveConcurrency(0))
        );
    }
}
