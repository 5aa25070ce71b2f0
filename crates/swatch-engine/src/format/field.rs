//! Aggregate initializers: `{255, 0, 0, 255}`, `{0.384f, 0.000f, 0.933f, 1.00f}`,
//! `{ .r = 255, .g = 0, .b = 0 }`.

use super::kind::FormatKind;
use super::lex;
use super::list::{self, ListCapture};

/// Recognize a brace-delimited channel list starting exactly at `pos`.
pub(crate) fn recognize(text: &str, pos: usize) -> Option<(FormatKind, ListCapture, usize)> {
    if lex::byte_at(text, pos)? != b'{' {
        return None;
    }
    let (fields, end) = list::lex_fields(text, pos + 1, b'}')?;

    let positional = list::positional_order(fields.len(), false);
    let float = list::has_real_color_channel(&fields, positional);
    let kind = if float {
        FormatKind::FieldFloat
    } else {
        FormatKind::FieldInt
    };
    let capture = ListCapture {
        open: "{".to_string(),
        fields,
        close: '}',
        positional,
        float,
        unit_alpha: false,
    };
    Some((kind, capture, end))
}
