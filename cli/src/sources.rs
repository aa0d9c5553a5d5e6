//! Locating and reading the config sources handed to the engine.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use smokecheck_common::endpoint::ConfigSource;
use smokecheck_common::error::ConfigError;
use tokio::fs;
use tracing::debug;

const CONF_EXTENSION: &str = "conf";

/// Named files when any were given, every `*.conf` in `dir` otherwise.
pub async fn load(files: &[PathBuf], dir: &Path) -> Result<Vec<ConfigSource>, ConfigError> {
    let paths = discover(files, dir).await?;
    let mut sources = Vec::with_capacity(paths.len());
    for path in &paths {
        sources.push(read(path).await?);
    }
    Ok(sources)
}

pub async fn discover(files: &[PathBuf], dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    if !files.is_empty() {
        for file in files {
            if !is_file(file).await {
                return Err(ConfigError::FileNotFound(file.clone()));
            }
        }
        return Ok(files.to_vec());
    }

    let no_sources = || ConfigError::NoSources(dir.to_path_buf());
    let mut entries = fs::read_dir(dir).await.map_err(|_| no_sources())?;
    let mut found = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(|_| no_sources())? {
        let path = entry.path();
        if path.extension() == Some(OsStr::new(CONF_EXTENSION)) && is_file(&path).await {
            found.push(path);
        }
    }

    if found.is_empty() {
        return Err(no_sources());
    }

    found.sort();
    debug!("discovered {} config files in {}", found.len(), dir.display());
    Ok(found)
}

/// Reads `path`, naming the source after its file name.
pub async fn read(path: &Path) -> Result<ConfigSource, ConfigError> {
    let text = fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Unreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(ConfigSource::new(name, text))
}

async fn is_file(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
