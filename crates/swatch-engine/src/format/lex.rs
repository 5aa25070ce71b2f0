//! Byte-level lexing shared by the recognizers.
//!
//! Everything here works on byte offsets into UTF-8 text. Recognition only
//! ever starts at ASCII bytes, so every offset returned is a char boundary.

use regex::Regex;
use std::sync::LazyLock;
use swatch_common::Channel;

/// `-12`, `0.384`, `.5`, `1.`, `0.50f`
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?)(?:(\d+)(\.(\d*))?|\.(\d+))([fF]?)").unwrap());

/// `red: `, `r=`, `.r = `, `R: `
static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.?([A-Za-z_][A-Za-z0-9_]*)[ \t]*[:=][ \t]*").unwrap());

/// `QColor`, `QColor::fromRgbF`, `System.Drawing.Color.FromArgb`
static PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(?:(?:\.|::)[A-Za-z_][A-Za-z0-9_]*)*").unwrap()
});

/// C/C++ integer suffixes after `0x` literals.
static INT_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[uUlL]{1,3}").unwrap());

/// Identifier character. Non-ASCII bytes count, so a literal never starts
/// in the middle of a Unicode identifier.
pub(crate) fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

pub(crate) fn byte_at(text: &str, pos: usize) -> Option<u8> {
    text.as_bytes().get(pos).copied()
}

pub(crate) fn prev_byte(text: &str, pos: usize) -> Option<u8> {
    pos.checked_sub(1).and_then(|p| byte_at(text, p))
}

/// Offset of the first non-whitespace byte at or after `pos`.
pub(crate) fn skip_ws(text: &str, pos: usize) -> usize {
    let bytes = text.as_bytes();
    let mut end = pos;
    while end < bytes.len() && bytes[end].is_ascii_whitespace() {
        end += 1;
    }
    end
}

/// Length of the hex-digit run starting at `pos`.
pub(crate) fn hex_run(text: &str, pos: usize) -> usize {
    text.as_bytes()
        .get(pos..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_hexdigit()).count())
}

pub(crate) fn int_suffix(text: &str, pos: usize) -> usize {
    text.get(pos..)
        .and_then(|rest| INT_SUFFIX_RE.find(rest))
        .map_or(0, |m| m.end())
}

pub(crate) fn path(text: &str, pos: usize) -> Option<&str> {
    text.get(pos..)
        .and_then(|rest| PATH_RE.find(rest))
        .map(|m| m.as_str())
}

/// A numeric token split into the pieces its style is made of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NumberToken {
    pub text: String,
    pub negative: bool,
    pub int_digits: String,
    pub dot: bool,
    pub frac_digits: String,
    pub suffix: String,
}

impl NumberToken {
    /// Lex a number at `pos`. It must not run into an identifier or a second point.
    pub(crate) fn lex(text: &str, pos: usize) -> Option<(NumberToken, usize)> {
        let caps = NUMBER_RE.captures(text.get(pos..)?)?;
        let whole = caps.get(0)?;
        let end = pos + whole.end();
        if matches!(byte_at(text, end), Some(b) if is_ident_byte(b) || b == b'.') {
            return None;
        }

        let int_digits = caps.get(2).map_or("", |m| m.as_str());
        let frac_digits = caps
            .get(4)
            .or_else(|| caps.get(5))
            .map_or("", |m| m.as_str());
        let token = NumberToken {
            text: whole.as_str().to_string(),
            negative: !caps[1].is_empty(),
            int_digits: int_digits.to_string(),
            dot: caps.get(3).is_some() || caps.get(5).is_some(),
            frac_digits: frac_digits.to_string(),
            suffix: caps[6].to_string(),
        };
        Some((token, end))
    }

    /// Digits and point only, without sign or suffix.
    pub(crate) fn body(&self) -> String {
        if self.dot {
            format!("{}.{}", self.int_digits, self.frac_digits)
        } else {
            self.int_digits.clone()
        }
    }
}

/// A field label resolved to its channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Label {
    pub text: String,
    pub channel: Channel,
}

/// Lex an optional label at `pos`.
///
/// `Ok(None)` when there is no label, `Err(())` when a label is present
/// but does not name a channel.
pub(crate) fn label(text: &str, pos: usize) -> Result<Option<(Label, usize)>, ()> {
    let Some(caps) = text.get(pos..).and_then(|rest| LABEL_RE.captures(rest)) else {
        return Ok(None);
    };
    let whole = &caps[0];
    // `::` is a path separator, not a label.
    if whole.trim_end().ends_with(':') && text[pos + whole.len()..].starts_with(':') {
        return Ok(None);
    }
    let channel = Channel::from_label(&caps[1]).ok_or(())?;
    Ok(Some((
        Label {
            text: whole.to_string(),
            channel,
        },
        pos + whole.len(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(s: &str) -> NumberToken {
        NumberToken::lex(s, 0).unwrap().0
    }

    #[test]
    fn lexes_number_shapes() {
        let n = number("0.384,");
        assert_eq!((n.int_digits.as_str(), n.dot, n.frac_digits.as_str()), ("0", true, "384"));

        let n = number(".5)");
        assert_eq!((n.int_digits.as_str(), n.dot, n.frac_digits.as_str()), ("", true, "5"));

        let n = number("1.)");
        assert_eq!((n.int_digits.as_str(), n.dot, n.frac_digits.as_str()), ("1", true, ""));

        let n = number("0.50f}");
        assert_eq!(n.suffix, "f");
        assert_eq!(n.body(), "0.50");

        let n = number("-12 ");
        assert!(n.negative);
        assert_eq!(n.text, "-12");
    }

    #[test]
    fn number_must_end_cleanly() {
        assert!(NumberToken::lex("12px", 0).is_none());
        assert!(NumberToken::lex("1.2.3", 0).is_none());
        assert!(NumberToken::lex("0x1F", 0).is_none());
        assert!(NumberToken::lex("abc", 0).is_none());
        assert!(NumberToken::lex(".", 0).is_none());
    }

    #[test]
    fn labels_resolve_channels() {
        let (l, end) = label("red: 0.5", 0).unwrap().unwrap();
        assert_eq!(l.channel, Channel::Red);
        assert_eq!(l.text, "red: ");
        assert_eq!(end, 5);

        let (l, _) = label(".a = 255", 0).unwrap().unwrap();
        assert_eq!(l.channel, Channel::Alpha);
        assert_eq!(l.text, ".a = ");

        assert_eq!(label("255", 0), Ok(None));
        assert_eq!(label("hue: 3", 0), Err(()));
        assert_eq!(label("Color::x", 0), Ok(None));
    }

    #[test]
    fn paths_join_segments() {
        assert_eq!(path("QColor::fromRgbF(", 0), Some("QColor::fromRgbF"));
        assert_eq!(
            path("System.Drawing.Color.FromArgb(1", 0),
            Some("System.Drawing.Color.FromArgb")
        );
        assert_eq!(path("(1, 2, 3)", 0), None);
    }

    #[test]
    fn hex_runs_and_suffixes() {
        assert_eq!(hex_run("0xFF5722u;", 2), 6);
        assert_eq!(int_suffix("0xFF5722ULL;", 8), 3);
        assert_eq!(int_suffix("0xFF5722;", 8), 0);
    }
}
