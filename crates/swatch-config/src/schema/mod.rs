//! Configuration schema types for swatch.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the documented defaults.

mod format;
mod scan;
mod system;

pub use format::*;
pub use scan::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for swatch.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwatchConfig {
    pub format: FormatConfig,
    pub scan: ScanConfig,
    pub logging: LoggingConfig,
}
