//! Constructor-call notation: `QColor(98, 0, 238)`, `Color::srgba(...)`,
//! `UIColor(red: ..., alpha: ...)`, CSS `rgba(...)` and bare `(r, g, b)` tuples.

use super::kind::FormatKind;
use super::lex;
use super::list::{self, ListCapture};
use crate::settings::ScanOptions;

/// Constructors accepted as the last path segment on their own.
const CONSTRUCTORS: &[&str] = &[
    "QColor", "Color", "Color32", "Color3", "Color4", "UIColor", "NSColor", "SKColor", "rgb",
    "rgba", "RGB", "RGBA", "fromRgb", "FromRgb", "fromRgba", "fromRgbF", "fromRgbaF", "from_rgb",
    "from_rgba", "srgb", "srgba", "srgb_u8", "srgba_u8", "argb", "FromArgb", "fromArgb",
];

/// Types whose `new`/`rgb`/`rgba` associated functions build colors.
const COLOR_TYPES: &[&str] = &[
    "QColor", "Color", "Color32", "Color3", "Color4", "Colour", "Rgb", "Rgba", "Srgb", "Srgba",
    "LinearRgba", "RGB", "RGBA",
];

/// Always produce unit-interval channels.
const FLOAT_CONSTRUCTORS: &[&str] = &["fromRgbF", "fromRgbaF", "srgb", "srgba"];

/// Take alpha first.
const ARGB_CONSTRUCTORS: &[&str] = &["argb", "FromArgb", "fromArgb"];

fn split_path(path: &str) -> Vec<&str> {
    path.split("::").flat_map(|s| s.split('.')).collect()
}

fn is_constructor(segments: &[&str]) -> bool {
    match segments {
        [] => false,
        [.., owner, "new" | "rgb" | "rgba"] if COLOR_TYPES.contains(owner) => true,
        [.., last] => CONSTRUCTORS.contains(last),
    }
}

/// Recognize a call or bare tuple starting exactly at `pos`.
pub(crate) fn recognize(text: &str, pos: usize, opts: &ScanOptions) -> Option<(FormatKind, ListCapture, usize)> {
    let first = lex::byte_at(text, pos)?;
    if matches!(lex::prev_byte(text, pos), Some(b) if lex::is_ident_byte(b) || b == b'.' || b == b':')
    {
        return None;
    }

    let (head, constructor) = if first == b'(' {
        if !opts.bare_tuples
            || matches!(lex::prev_byte(text, pos), Some(b')' | b']'))
        {
            return None;
        }
        ("", None)
    } else {
        let head = lex::path(text, pos)?;
        let segments = split_path(head);
        if !is_constructor(&segments) {
            return None;
        }
        (head, segments.last().copied())
    };

    let paren = pos + head.len();
    if lex::byte_at(text, paren)? != b'(' {
        return None;
    }
    let (fields, end) = list::lex_fields(text, paren + 1, b')')?;

    let argb = constructor.is_some_and(|c| ARGB_CONSTRUCTORS.contains(&c));
    let positional = list::positional_order(fields.len(), argb);
    let float = constructor.is_some_and(|c| FLOAT_CONSTRUCTORS.contains(&c))
        || list::has_real_color_channel(&fields, positional);
    let alpha = list::has_alpha(&fields, positional);
    let unit_alpha = matches!(head, "rgb" | "rgba");

    let kind = match (float, alpha) {
        (false, false) => FormatKind::IntRgb,
        (false, true) => FormatKind::IntRgba,
        (true, false) => FormatKind::FloatRgb,
        (true, true) => FormatKind::FloatRgba,
    };
    let capture = ListCapture {
        open: text[pos..=paren].to_string(),
        fields,
        close: ')',
        positional,
        float,
        unit_alpha,
    };
    Some((kind, capture, end))
}
