//! Configuration snapshot handed to every engine call.

use swatch_config::{FormatConfig, HexAlphaOrder, SwatchConfig};

/// Recognizer switches read by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    pub bare_tuples: bool,
    pub hash_alpha_order: HexAlphaOrder,
    /// Lines rescanned on each side of an edit.
    pub context_lines: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            bare_tuples: true,
            hash_alpha_order: HexAlphaOrder::Rgba,
            context_lines: 1,
        }
    }
}

/// Everything the engine reads from configuration, captured once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub format: FormatConfig,
    pub scan: ScanOptions,
}

impl From<&SwatchConfig> for Settings {
    fn from(config: &SwatchConfig) -> Self {
        Self {
            format: config.format.clone(),
            scan: ScanOptions {
                bare_tuples: config.scan.bare_tuples,
                hash_alpha_order: config.scan.hex_alpha_order(),
                context_lines: config.scan.context_lines as usize,
            },
        }
    }
}
