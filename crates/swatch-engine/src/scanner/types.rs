//! Scan result types: ColorMatch, ScanDiagnostic.

use serde::Serialize;
use swatch_common::{CanonicalColor, ParseError, Span, TextVersion};

use crate::format::{FormatKind, Style};

/// A located, parsed color literal.
///
/// Only valid against the text version it was produced from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorMatch {
    pub kind: FormatKind,
    /// Absolute byte range in the buffer.
    pub span: Span,
    pub color: CanonicalColor,
    pub style: Style,
    pub version: TextVersion,
}

impl ColorMatch {
    /// `#rrggbb[aa]` preview swatch.
    pub fn swatch(&self) -> String {
        self.color.to_hex()
    }

    pub(crate) fn shifted(mut self, delta: isize, version: TextVersion) -> Self {
        self.span = self.span.shift(delta);
        self.version = version;
        self
    }
}

/// A recognized literal that failed to parse. Reported, never edited.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanDiagnostic {
    pub kind: FormatKind,
    pub span: Span,
    pub error: ParseError,
    pub version: TextVersion,
}

impl ScanDiagnostic {
    pub(crate) fn shifted(mut self, delta: isize, version: TextVersion) -> Self {
        self.span = self.span.shift(delta);
        self.version = version;
        self
    }
}
