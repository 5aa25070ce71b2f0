//! Scanner options.

use serde::{Deserialize, Serialize};

/// Byte order of 8-digit hex literals written with `#` or without a prefix.
///
/// `0x` literals are always AARRGGBB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexAlphaOrder {
    /// `#RRGGBBAA` (CSS convention).
    #[default]
    Rgba,
    /// `#AARRGGBB` (Android `parseColor` convention).
    Argb,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Recognize bare `(r, g, b)` tuples.
    pub bare_tuples: bool,
    /// `"rgba"` or `"argb"`.
    pub hash_alpha_order: String,
    /// Extra lines rescanned on each side of an edit (valid range: 0-5).
    pub context_lines: u32,
}

impl ScanConfig {
    pub fn hex_alpha_order(&self) -> HexAlphaOrder {
        match self.hash_alpha_order.to_ascii_lowercase().as_str() {
            "argb" => HexAlphaOrder::Argb,
            _ => HexAlphaOrder::Rgba,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            bare_tuples: true,
            hash_alpha_order: "rgba".into(),
            context_lines: 1,
        }
    }
}
