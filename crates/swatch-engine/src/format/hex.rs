//! Hex notation: `#RRGGBB`, `0xAARRGGBB`, and quoted bare digits.

use swatch_common::{CanonicalColor, Channel};
use swatch_config::{FormatConfig, HexAlphaOrder};

use super::kind::FormatKind;
use super::lex;
use super::style::{HexCase, HexOrder, HexStyle};
use crate::settings::ScanOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexCapture {
    pub(crate) prefix: String,
    pub(crate) digits: String,
    pub(crate) suffix: String,
    pub(crate) order: HexOrder,
}

/// Recognize a hex literal starting exactly at `pos`.
pub(crate) fn recognize(
    text: &str,
    pos: usize,
    opts: &ScanOptions,
) -> Option<(FormatKind, HexCapture, usize)> {
    let first = lex::byte_at(text, pos)?;
    let prev = lex::prev_byte(text, pos);

    let (prefix_len, quote) = match first {
        b'#' => (1, None),
        b'0' if matches!(lex::byte_at(text, pos + 1), Some(b'x' | b'X')) => {
            if matches!(prev, Some(b) if lex::is_ident_byte(b)) {
                return None;
            }
            (2, None)
        }
        b if b.is_ascii_hexdigit() => match prev {
            Some(q @ (b'"' | b'\'' | b'`')) => (0, Some(q)),
            _ => return None,
        },
        _ => return None,
    };

    let start = pos + prefix_len;
    let digits = lex::hex_run(text, start);
    let kind = match digits {
        6 => FormatKind::HexRgb,
        8 => FormatKind::HexArgb,
        _ => return None,
    };
    let mut end = start + digits;

    let zero_x = prefix_len == 2;
    let suffix_len = if zero_x { lex::int_suffix(text, end) } else { 0 };
    let suffix = text[end..end + suffix_len].to_string();
    end += suffix_len;

    let next = lex::byte_at(text, end);
    if let Some(q) = quote {
        if next != Some(q) {
            return None;
        }
    } else if matches!(next, Some(b) if lex::is_ident_byte(b)) {
        return None;
    }

    let order = match (kind, zero_x, opts.hash_alpha_order) {
        (FormatKind::HexRgb, _, _) => HexOrder::Rgb,
        (_, true, _) | (_, false, HexAlphaOrder::Argb) => HexOrder::Argb,
        (_, false, HexAlphaOrder::Rgba) => HexOrder::Rgba,
    };
    let capture = HexCapture {
        prefix: text[pos..start].to_string(),
        digits: text[start..start + digits].to_string(),
        suffix,
        order,
    };
    Some((kind, capture, end))
}

impl HexCapture {
    /// Hex byte pairs are in domain by construction, so this cannot fail.
    pub(crate) fn parse(&self) -> (CanonicalColor, HexStyle) {
        let mut bytes = [0u8, 0, 0, 255];
        for (i, channel) in self.order.channels().iter().enumerate() {
            let pair = self.digits.get(i * 2..i * 2 + 2).unwrap_or("00");
            bytes[channel.index()] = u8::from_str_radix(pair, 16).unwrap_or(0);
        }
        let [r, g, b, a] = bytes;
        let alpha = (self.order != HexOrder::Rgb).then_some(a);

        let style = HexStyle {
            prefix: self.prefix.clone(),
            case: HexCase::capture(&self.digits),
            suffix: self.suffix.clone(),
            order: self.order,
        };
        (CanonicalColor::from_int8(r, g, b, alpha), style)
    }
}

pub(crate) fn serialize(color: &CanonicalColor, style: &HexStyle, cfg: &FormatConfig) -> String {
    let digits: String = style
        .order
        .channels()
        .iter()
        .map(|&c: &Channel| format!("{:02x}", color.channel_int8(c)))
        .collect();
    format!(
        "{}{}{}",
        style.prefix,
        style.case.apply(&digits, cfg),
        style.suffix
    )
}
