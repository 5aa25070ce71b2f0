//! Descriptor dispatch: recognize, parse and serialize per [`FormatKind`].
//!
//! The format set is closed, so every operation is a `match` on the kind
//! rather than a trait object.

use swatch_common::{CanonicalColor, EngineError, ParseError, Span};
use swatch_config::FormatConfig;

use super::kind::{Family, FormatKind};
use super::style::Style;
use super::{call, field, hex, list};
use super::{HexCapture, ListCapture};
use crate::settings::ScanOptions;

/// Raw tokens captured by a recognizer.
#[derive(Debug, Clone, PartialEq)]
pub enum Capture {
    List(ListCapture),
    Hex(HexCapture),
}

/// A literal a recognizer accepted, not yet parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Recognized {
    pub kind: FormatKind,
    /// Byte range relative to the recognized text.
    pub span: Span,
    pub capture: Capture,
}

impl FormatKind {
    /// Does a literal of this kind start at `pos`, and how far does it reach?
    ///
    /// `pos` must be a char boundary of `text`.
    pub fn recognize(self, text: &str, pos: usize, opts: &ScanOptions) -> Option<Recognized> {
        let (kind, capture, end) = match self.family() {
            Family::Call => {
                let (kind, capture, end) = call::recognize(text, pos, opts)?;
                (kind, Capture::List(capture), end)
            }
            Family::Hex => {
                let (kind, capture, end) = hex::recognize(text, pos, opts)?;
                (kind, Capture::Hex(capture), end)
            }
            Family::Field => {
                let (kind, capture, end) = field::recognize(text, pos)?;
                (kind, Capture::List(capture), end)
            }
        };
        (kind == self).then(|| Recognized {
            kind,
            span: Span::new(pos, end),
            capture,
        })
    }

    /// Turn captured tokens into a color and the style that reproduces them.
    pub fn parse(self, capture: &Capture) -> Result<(CanonicalColor, Style), ParseError> {
        match capture {
            Capture::List(list) => {
                let (color, style) = list.parse()?;
                Ok((color, Style::List(style)))
            }
            Capture::Hex(hex) => {
                let (color, style) = hex.parse();
                Ok((color, Style::Hex(style)))
            }
        }
    }

    /// Render `color` in this notation using a captured or synthesized style.
    pub fn serialize(
        self,
        color: &CanonicalColor,
        style: &Style,
        cfg: &FormatConfig,
    ) -> Result<String, EngineError> {
        match (self.family(), style) {
            (Family::Call | Family::Field, Style::List(list_style)) => {
                Ok(list::serialize(color, list_style, cfg))
            }
            (Family::Hex, Style::Hex(hex_style)) => Ok(hex::serialize(color, hex_style, cfg)),
            _ => Err(EngineError::StyleMismatch {
                kind: self.name().to_string(),
            }),
        }
    }
}

/// First descriptor, in registry order, that accepts `pos`.
pub fn recognize_at(text: &str, pos: usize, opts: &ScanOptions) -> Option<Recognized> {
    FormatKind::ALL
        .into_iter()
        .find_map(|kind| kind.recognize(text, pos, opts))
}
