//! Swatch configuration.
//!
//! TOML-based settings for the serializers and the scanner. Every section
//! uses serde defaults so partial files work, and out-of-domain values are
//! replaced by their defaults with a warning instead of failing the load.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use swatch_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    FormatConfig, HexAlphaOrder, LogLevel, LoggingConfig, ScanConfig, SwatchConfig,
    CONFIG_SCHEMA_VERSION,
};

use std::path::Path;
use swatch_common::ConfigError;

/// Load config from the platform default path, creating it if missing.
pub fn load_config() -> Result<SwatchConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from `path` when given, otherwise from the platform default.
pub fn load_config_from(path: Option<&Path>) -> Result<SwatchConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => load_config(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &SwatchConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
