//! The closed set of supported notations.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use swatch_common::EngineError;

/// One recognized textual color notation.
///
/// Variants are declared in registry priority order; see [`FormatKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatKind {
    /// `QColor(98, 0, 238)`, `(255, 0, 0)`
    IntRgb,
    /// `QColor(0, 0, 0, 128)`, `rgba(255, 255, 255, 0.5)`
    IntRgba,
    /// `QColor::fromRgbF(0.384, 0.000, 0.933)`
    FloatRgb,
    /// `UIColor(red: 0.0, green: 0.0, blue: 0.0, alpha: 0.50)`
    FloatRgba,
    /// `#FF5722`, `0xFF5722`
    HexRgb,
    /// `0x80000000`, `#FF572280`
    HexArgb,
    /// `{255, 0, 0, 255}`
    FieldInt,
    /// `{0.384f, 0.000f, 0.933f, 1.00f}`
    FieldFloat,
}

/// Grammar family a kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Call,
    Hex,
    Field,
}

impl FormatKind {
    /// Registry order. The first recognizer that accepts a position wins.
    pub const ALL: [FormatKind; 8] = [
        FormatKind::IntRgb,
        FormatKind::IntRgba,
        FormatKind::FloatRgb,
        FormatKind::FloatRgba,
        FormatKind::HexRgb,
        FormatKind::HexArgb,
        FormatKind::FieldInt,
        FormatKind::FieldFloat,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormatKind::IntRgb => "int-rgb",
            FormatKind::IntRgba => "int-rgba",
            FormatKind::FloatRgb => "float-rgb",
            FormatKind::FloatRgba => "float-rgba",
            FormatKind::HexRgb => "hex-rgb",
            FormatKind::HexArgb => "hex-argb",
            FormatKind::FieldInt => "field-int",
            FormatKind::FieldFloat => "field-float",
        }
    }

    pub fn family(self) -> Family {
        match self {
            FormatKind::IntRgb
            | FormatKind::IntRgba
            | FormatKind::FloatRgb
            | FormatKind::FloatRgba => Family::Call,
            FormatKind::HexRgb | FormatKind::HexArgb => Family::Hex,
            FormatKind::FieldInt | FormatKind::FieldFloat => Family::Field,
        }
    }

    /// Whether a literal synthesized for this kind carries an alpha channel.
    pub fn has_alpha(self) -> bool {
        !matches!(
            self,
            FormatKind::IntRgb | FormatKind::FloatRgb | FormatKind::HexRgb
        )
    }

    pub fn is_float(self) -> bool {
        matches!(
            self,
            FormatKind::FloatRgb | FormatKind::FloatRgba | FormatKind::FieldFloat
        )
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormatKind {
    type Err = EngineError;

    /// Accepts the kebab-case name, ignoring case and `_`/`-` differences.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        FormatKind::ALL
            .into_iter()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| EngineError::UnknownKind(s.to_string()))
    }
}
