//! Captured rendering facts for faithful re-serialization.
//!
//! A [`Style`] is recorded once when a literal is parsed and never derived
//! from the color. Serializers combine it with a new color to rebuild the
//! literal in the exact shape it was written.

use serde::Serialize;
use swatch_common::{Channel, ChannelDomain};
use swatch_config::FormatConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Style {
    /// Call and field-initializer literals.
    List(ListStyle),
    Hex(HexStyle),
}

impl Style {
    pub fn had_alpha(&self) -> bool {
        match self {
            Style::List(list) => list.had_alpha(),
            Style::Hex(hex) => hex.order != HexOrder::Rgb,
        }
    }
}

/// `open field,field,field[,field] close`, every piece kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListStyle {
    /// Constructor path plus opening delimiter, e.g. `QColor::fromRgbF(` or `{`.
    pub open: String,
    pub fields: Vec<FieldStyle>,
    pub close: String,
}

impl ListStyle {
    pub fn had_alpha(&self) -> bool {
        self.fields.iter().any(|f| f.channel == Channel::Alpha)
    }
}

/// One argument or aggregate member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldStyle {
    /// Whitespace between the previous delimiter and the field.
    pub leading: String,
    /// Label text including its separator, e.g. `red: ` or `.r = `.
    pub label: Option<String>,
    pub channel: Channel,
    pub domain: ChannelDomain,
    pub number: NumberStyle,
    /// Whitespace between the number and the next delimiter.
    pub trailing: String,
}

/// Shape of a numeric token.
///
/// `Int` always holds a byte channel and `Real` a unit-interval channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NumberStyle {
    /// Decimal integer; `pad` is the zero-padded width (0 when unpadded).
    Int { pad: usize, suffix: String },
    /// Real number such as `0.384`, `.5`, `1.`, `1` or `0.50f`.
    Real {
        /// Digits written before the point; 0 for `.5`.
        int_width: usize,
        decimals: usize,
        dot: bool,
        suffix: String,
        /// Captured digits and point, reused while the value is unchanged.
        /// Empty for synthesized styles.
        written: String,
    },
}

impl NumberStyle {
    /// Render a channel value in this shape.
    pub(crate) fn render(&self, value: f64, cfg: &FormatConfig) -> String {
        match self {
            NumberStyle::Int { pad, suffix } => {
                format!("{:0width$}{suffix}", byte_of(value), width = *pad)
            }
            NumberStyle::Real {
                int_width,
                decimals,
                dot,
                suffix,
                written,
            } => {
                let mut out = if written.parse::<f64>() == Ok(value) {
                    written.clone()
                } else {
                    let decimals = effective_decimals(value, *decimals, cfg);
                    render_real(value, *int_width, decimals, *dot)
                };
                out.push_str(suffix);
                out
            }
        }
    }
}

fn byte_of(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Captured precision, widened to the configured default when the captured
/// width would change the 8-bit value.
///
/// Widening needs `normalize_on_replace`, except for literals captured
/// without decimals, which carry no precision of their own.
fn effective_decimals(value: f64, captured: usize, cfg: &FormatConfig) -> usize {
    let target = cfg.float_precision();
    if captured >= target || !(cfg.normalize_on_replace || captured == 0) {
        return captured;
    }
    let rounded: f64 = format!("{value:.captured$}").parse().unwrap_or(value);
    if byte_of(rounded) == byte_of(value) {
        captured
    } else {
        target
    }
}

fn render_real(value: f64, int_width: usize, decimals: usize, dot: bool) -> String {
    let text = format!("{value:.decimals$}");
    let (int_part, frac) = text.split_once('.').unwrap_or((&text, ""));

    let mut out = if int_width == 0 && int_part == "0" {
        String::new()
    } else {
        format!("{int_part:0>int_width$}")
    };
    if dot || !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Digit case of a hex literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HexCase {
    Upper,
    Lower,
    /// Per-digit mask: bit `i` set when digit `i` was an uppercase letter.
    Mixed(u8),
    /// No letters were captured.
    Unspecified,
}

impl HexCase {
    pub(crate) fn capture(digits: &str) -> Self {
        let mut upper = 0u8;
        let mut lower = false;
        for (i, c) in digits.chars().enumerate() {
            if c.is_ascii_uppercase() {
                upper |= 1 << i;
            } else if c.is_ascii_lowercase() {
                lower = true;
            }
        }
        match (upper != 0, lower) {
            (false, false) => HexCase::Unspecified,
            (true, false) => HexCase::Upper,
            (false, true) => HexCase::Lower,
            (true, true) => HexCase::Mixed(upper),
        }
    }

    pub(crate) fn apply(self, lower_digits: &str, cfg: &FormatConfig) -> String {
        match self {
            HexCase::Upper => lower_digits.to_ascii_uppercase(),
            HexCase::Lower => lower_digits.to_string(),
            HexCase::Unspecified if cfg.prefer_uppercase_hex => lower_digits.to_ascii_uppercase(),
            HexCase::Unspecified => lower_digits.to_string(),
            HexCase::Mixed(mask) => lower_digits
                .chars()
                .enumerate()
                .map(|(i, c)| {
                    if i < 8 && mask & (1 << i) != 0 {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    }
                })
                .collect(),
        }
    }
}

/// Byte layout of the digit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HexOrder {
    Rgb,
    Argb,
    Rgba,
}

impl HexOrder {
    pub fn channels(self) -> &'static [Channel] {
        match self {
            HexOrder::Rgb => &Channel::RGB,
            HexOrder::Argb => &Channel::ARGB,
            HexOrder::Rgba => &Channel::RGBA,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexStyle {
    /// `#`, `0x`, `0X`, or empty for quoted bare digits.
    pub prefix: String,
    pub case: HexCase,
    /// Integer suffix after `0x` literals, e.g. `u` or `UL`.
    pub suffix: String,
    pub order: HexOrder,
}
