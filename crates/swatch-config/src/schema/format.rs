//! Serializer defaults.

use serde::{Deserialize, Serialize};

/// Fallbacks consulted by serializers when a captured literal style does
/// not carry enough information, and when synthesizing brand-new literals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Hex digit case for literals whose captured digits contain no letters.
    pub prefer_uppercase_hex: bool,
    /// Decimal places for synthesized float channels (valid range: 0-10).
    pub default_float_precision: i64,
    /// Widen a captured float precision that cannot hold the edited value.
    pub normalize_on_replace: bool,
}

impl FormatConfig {
    pub const MAX_FLOAT_PRECISION: i64 = 10;

    /// Precision as a usable width. Out-of-domain values read as the default.
    pub fn float_precision(&self) -> usize {
        if (0..=Self::MAX_FLOAT_PRECISION).contains(&self.default_float_precision) {
            self.default_float_precision as usize
        } else {
            FormatConfig::default().default_float_precision as usize
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            prefer_uppercase_hex: true,
            default_float_precision: 3,
            normalize_on_replace: false,
        }
    }
}
