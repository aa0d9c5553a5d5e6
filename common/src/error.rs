use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a run before any endpoint is probed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("timeout must be a positive number of seconds, got {0}")]
    NonPositiveTimeout(i64),

    #[error("worker count must be a positive integer, got {0}")]
    NonPositiveConcurrency(i64),

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to read {}: {reason}", path.display())]
    Unreadable { path: PathBuf, reason: String },

    #[error("no .conf files found in {}", .0.display())]
    NoSources(PathBuf),
}
