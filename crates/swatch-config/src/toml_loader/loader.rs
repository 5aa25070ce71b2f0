//! Core TOML config loading: read from path or platform default.

use crate::schema::SwatchConfig;
use crate::validation;
use std::io::ErrorKind;
use std::path::Path;
use swatch_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse TOML config text and repair out-of-domain values.
///
/// Missing fields take serde defaults. Every value that fails validation is
/// replaced by its default and reported back as [`ConfigError::Ambiguous`].
pub fn load_from_str(content: &str) -> Result<(SwatchConfig, Vec<ConfigError>), ConfigError> {
    let config: SwatchConfig = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;
    Ok(validation::sanitize(config))
}

/// Load config from a specific TOML file path.
///
/// Each replaced value is logged once as a warning; the repaired config is
/// returned.
pub fn load_from_path(path: &Path) -> Result<SwatchConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let (config, rejected) = load_from_str(&content)?;
    for err in &rejected {
        warn!("{err}, using default");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/swatch/config.toml`
/// On Linux: `~/.config/swatch/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<SwatchConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(SwatchConfig::default())
        }
        Err(e) => Err(e),
    }
}
