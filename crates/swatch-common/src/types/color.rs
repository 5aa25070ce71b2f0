use serde::Serialize;

use super::core::{Channel, ChannelDomain};
use crate::errors::ParseError;

/// Normalized color that every notation converts through.
///
/// Channels are stored as `f64` in `[0, 1]`. Construction from real values
/// rejects anything non-finite or outside the unit interval; nothing is
/// clamped, so a value always comes back out the way it went in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanonicalColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Default for CanonicalColor {
    fn default() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }
}

impl CanonicalColor {
    /// Build from 8-bit channels. A missing alpha means fully opaque.
    pub fn from_int8(r: u8, g: u8, b: u8, a: Option<u8>) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            a: a.map_or(1.0, |a| f64::from(a) / 255.0),
        }
    }

    /// Build from unit-interval channels. A missing alpha means fully opaque.
    pub fn from_float(r: f64, g: f64, b: f64, a: Option<f64>) -> Result<Self, ParseError> {
        Self::from_channels([r, g, b, a.unwrap_or(1.0)])
    }

    /// Build from `[r, g, b, a]` unit-interval values.
    pub fn from_channels(values: [f64; 4]) -> Result<Self, ParseError> {
        for (value, channel) in values.iter().zip(Channel::RGBA) {
            if !value.is_finite() || !(0.0..=1.0).contains(value) {
                return Err(ParseError::OutOfRange {
                    channel,
                    value: value.to_string(),
                    domain: ChannelDomain::Unit,
                });
            }
        }
        let [r, g, b, a] = values;
        Ok(Self { r, g, b, a })
    }

    /// 8-bit view, rounding half away from zero.
    pub fn to_int8(&self) -> [u8; 4] {
        [
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b),
            to_byte(self.a),
        ]
    }

    pub fn to_float(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn channel(&self, channel: Channel) -> f64 {
        self.to_float()[channel.index()]
    }

    pub fn channel_int8(&self, channel: Channel) -> u8 {
        to_byte(self.channel(channel))
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// True when every channel differs from `other` by at most `tolerance`.
    pub fn approx_eq(&self, other: &CanonicalColor, tolerance: f64) -> bool {
        self.to_float()
            .iter()
            .zip(other.to_float())
            .all(|(x, y)| (x - y).abs() <= tolerance)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::from_int8(r, g, b, None))
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self::from_int8(r, g, b, Some(a)))
            }
            _ => None,
        }
    }

    /// Swatch string used for previews: `#rrggbb`, or `#rrggbbaa` when translucent.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_int8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

fn to_byte(value: f64) -> u8 {
    // f64::round is half-away-from-zero.
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
