// Reading and writing the links file on disk.

use crate::links::LinksConfig;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Load the links file. A missing file is not an error: the wizard starts
/// from an empty list and creates the file on the first save.
pub fn load(path: &Path) -> Result<LinksConfig> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "links file not found, starting empty");
            return Ok(LinksConfig::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };
    let config: LinksConfig = serde_json::from_str(&data)
        .with_context(|| format!("{} contains invalid JSON", path.display()))?;
    debug!(path = %path.display(), links = config.len(), "loaded links file");
    Ok(config)
}

/// Write the config as pretty-printed JSON (2-space indent).
pub fn save(path: &Path, config: &LinksConfig) -> Result<()> {
    let mut json = serde_json::to_string_pretty(config).context("Serializing links config")?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), links = config.len(), "saved links file");
    Ok(())
}

/// Create an empty links file if none exists yet. Returns `true` when a
/// file was created.
pub fn ensure_exists(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    save(path, &LinksConfig::default())?;
    Ok(true)
}
