//! Config path resolution and default file creation.

use std::path::{Path, PathBuf};
use swatch_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "swatch";
const CONFIG_FILE: &str = "config.toml";

/// `<base>/swatch/config.toml`.
pub(crate) fn config_path_in(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(CONFIG_FILE)
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| config_path_in(&dir))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Write the commented default config to `path`, creating parent directories.
///
/// An existing file is left untouched.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!("cannot create {}: {e}", parent.display()))
        })?;
    }

    std::fs::write(path, default_config_toml())
        .map_err(|e| ConfigError::ParseError(format!("cannot write {}: {e}", path.display())))?;

    info!("created default config at {}", path.display());
    Ok(())
}
