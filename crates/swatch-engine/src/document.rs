//! Buffer collaborators and an in-memory buffer implementing both.

use swatch_common::{EngineError, Span, TextVersion};
use tracing::debug;

use crate::edit::TextPatch;

/// Read access to a versioned text buffer.
pub trait TextSource {
    /// Token that changes every time the text does.
    fn version(&self) -> TextVersion;

    fn text(&self) -> &str;

    /// Text in `span`, or `None` when it is out of bounds or splits a char.
    fn region(&self, span: Span) -> Option<&str> {
        self.text().get(span.range())
    }
}

/// Applies patches atomically.
pub trait BufferWriter {
    /// Apply `patch` and return the new version.
    ///
    /// Patches computed against another version are rejected with
    /// [`EngineError::StaleMatch`].
    fn apply(&mut self, patch: &TextPatch) -> Result<TextVersion, EngineError>;
}

/// A plain string buffer with a version counter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
    version: TextVersion,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Document {
            text: text.into(),
            version: TextVersion::default(),
        }
    }

    /// Zero-based line and byte column of `offset`.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let before = &self.text[..offset.min(self.text.len())];
        let line = before.matches('\n').count();
        let col = before.rfind('\n').map_or(before.len(), |nl| before.len() - nl - 1);
        (line, col)
    }
}

impl TextSource for Document {
    fn version(&self) -> TextVersion {
        self.version
    }

    fn text(&self) -> &str {
        &self.text
    }
}

impl BufferWriter for Document {
    fn apply(&mut self, patch: &TextPatch) -> Result<TextVersion, EngineError> {
        if patch.version != self.version {
            return Err(EngineError::StaleMatch {
                expected: patch.version,
                current: self.version,
            });
        }
        if self.region(patch.span).is_none() {
            return Err(EngineError::SpanOutOfBounds {
                span: patch.span,
                len: self.text.len(),
            });
        }

        self.text.replace_range(patch.span.range(), &patch.replacement);
        self.version = self.version.next();
        debug!(
            "applied patch at {} ({} -> {} bytes), now {}",
            patch.span,
            patch.span.len(),
            patch.replacement.len(),
            self.version
        );
        Ok(self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patch(start: usize, end: usize, text: &str, version: u64) -> TextPatch {
        TextPatch {
            span: Span::new(start, end),
            replacement: text.into(),
            version: TextVersion(version),
        }
    }

    #[test]
    fn apply_replaces_and_bumps_version() {
        let mut doc = Document::new("let c = #000000;");
        let v = doc.apply(&patch(8, 15, "#ffffff", 0)).unwrap();
        assert_eq!(v, TextVersion(1));
        assert_eq!(doc.text(), "let c = #ffffff;");
        assert_eq!(doc.version(), TextVersion(1));
    }

    #[test]
    fn stale_patch_is_rejected() {
        let mut doc = Document::new("abc");
        doc.apply(&patch(0, 1, "x", 0)).unwrap();
        let err = doc.apply(&patch(0, 1, "y", 0)).unwrap_err();
        assert_eq!(
            err,
            EngineError::StaleMatch {
                expected: TextVersion(0),
                current: TextVersion(1)
            }
        );
        assert_eq!(doc.text(), "xbc");
    }

    #[test]
    fn out_of_bounds_patch_is_rejected() {
        let mut doc = Document::new("abc");
        let err = doc.apply(&patch(2, 9, "x", 0)).unwrap_err();
        assert!(matches!(err, EngineError::SpanOutOfBounds { len: 3, .. }));

        let mut doc = Document::new("é");
        assert!(doc.apply(&patch(1, 2, "x", 0)).is_err());
        assert_eq!(doc.version(), TextVersion(0));
    }

    #[test]
    fn region_reads_spans() {
        let doc = Document::new("hello world");
        assert_eq!(doc.region(Span::new(6, 11)), Some("world"));
        assert_eq!(doc.region(Span::new(6, 12)), None);
    }

    #[test]
    fn line_col_of_offsets() {
        let doc = Document::new("ab\ncd\n");
        assert_eq!(doc.line_col(0), (0, 0));
        assert_eq!(doc.line_col(4), (1, 1));
        assert_eq!(doc.line_col(6), (2, 0));
    }
}
