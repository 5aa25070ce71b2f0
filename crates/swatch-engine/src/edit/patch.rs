//! Text patches: re-serializing edited colors against a located match.

use serde::Serialize;
use swatch_common::{CanonicalColor, EngineError, Span, TextVersion};
use swatch_config::FormatConfig;
use tracing::debug;

use crate::document::{BufferWriter, TextSource};
use crate::format::{FormatKind, Style};
use crate::scanner::{ColorMatch, MatchSet, Scanner, TextEdit};
use crate::settings::Settings;

/// A replacement of `span` with `replacement`, valid only at `version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextPatch {
    pub span: Span,
    pub replacement: String,
    pub version: TextVersion,
}

impl TextPatch {
    /// The buffer change this patch makes once applied.
    pub fn edit(&self) -> TextEdit {
        TextEdit::new(self.span.start, self.span.len(), self.replacement.len())
    }

    /// True when applying the patch would not change the text.
    pub fn is_noop(&self, source: &impl TextSource) -> bool {
        source.region(self.span) == Some(self.replacement.as_str())
    }
}

/// Fail unless `m` still describes the text in `source`.
fn check_current(source: &impl TextSource, m: &ColorMatch) -> Result<(), EngineError> {
    let current = source.version();
    if m.version != current {
        return Err(EngineError::StaleMatch {
            expected: m.version,
            current,
        });
    }
    if source.region(m.span).is_none() {
        return Err(EngineError::SpanOutOfBounds {
            span: m.span,
            len: source.text().len(),
        });
    }
    Ok(())
}

/// Re-serialize `color` in the match's own notation and captured style.
///
/// The patch is returned, never applied.
pub fn propose(
    source: &impl TextSource,
    m: &ColorMatch,
    color: &CanonicalColor,
    cfg: &FormatConfig,
) -> Result<TextPatch, EngineError> {
    check_current(source, m)?;
    let replacement = m.kind.serialize(color, &m.style, cfg)?;
    Ok(TextPatch {
        span: m.span,
        replacement,
        version: m.version,
    })
}

/// Rewrite the match's color in another notation.
///
/// A translucent color cannot move to a notation without an alpha channel.
pub fn convert(
    source: &impl TextSource,
    m: &ColorMatch,
    target: FormatKind,
    settings: &Settings,
) -> Result<TextPatch, EngineError> {
    check_current(source, m)?;
    if !target.has_alpha() && !m.color.is_opaque() {
        return Err(EngineError::UnsupportedConversion {
            from: m.kind.name().to_string(),
            to: target.name().to_string(),
        });
    }

    let replacement = render(target, &m.color, settings)?;
    debug!("convert {} at {} to {}: {replacement}", m.kind, m.span, target);
    Ok(TextPatch {
        span: m.span,
        replacement,
        version: m.version,
    })
}

/// Text for a brand-new literal of `kind`, styled from configuration.
pub fn render_new(
    kind: FormatKind,
    color: &CanonicalColor,
    settings: &Settings,
) -> Result<String, EngineError> {
    if !kind.has_alpha() && !color.is_opaque() {
        return Err(EngineError::UnsupportedConversion {
            from: color.to_hex(),
            to: kind.name().to_string(),
        });
    }
    render(kind, color, settings)
}

fn render(
    kind: FormatKind,
    color: &CanonicalColor,
    settings: &Settings,
) -> Result<String, EngineError> {
    let style = Style::synthesize(kind, &settings.format, settings.scan.hash_alpha_order);
    kind.serialize(color, &style, &settings.format)
}

/// Apply `patch` to `doc` and bring `set` up to the new version.
pub fn apply_and_rescan<D>(
    doc: &mut D,
    patch: &TextPatch,
    set: &MatchSet,
    scanner: &Scanner,
) -> Result<MatchSet, EngineError>
where
    D: TextSource + BufferWriter,
{
    if set.version() != patch.version {
        return Err(EngineError::StaleMatch {
            expected: set.version(),
            current: patch.version,
        });
    }
    let edit = patch.edit();
    let version = doc.apply(patch)?;
    Ok(set.apply_edit(scanner, doc.text(), edit, version))
}
