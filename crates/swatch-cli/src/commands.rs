//! Subcommand implementations. Each returns the text to print.

use std::fs;
use std::path::Path;

use serde_json::json;
use swatch_common::{CanonicalColor, EngineError, SwatchError};
use swatch_config::SwatchConfig;
use swatch_engine::{
    apply_and_rescan, convert as convert_match, ColorMatch, Document, FormatKind, MatchSet,
    PickerSession, Scanner, SessionEvent, Settings, TextPatch, TextSource,
};
use tracing::info;

use crate::cli::Cursor;

/// Engine state shared by every subcommand.
pub struct Context {
    settings: Settings,
    scanner: Scanner,
}

impl Context {
    pub fn new(config: &SwatchConfig) -> Self {
        let settings = Settings::from(config);
        let scanner = Scanner::new(settings.scan);
        Self { settings, scanner }
    }

    fn open(&self, file: &Path) -> Result<(Document, MatchSet), SwatchError> {
        let doc = Document::new(fs::read_to_string(file)?);
        let set = self.scanner.collect(doc.text(), doc.version());
        Ok((doc, set))
    }

    fn locate(
        &self,
        file: &Path,
        cursor: Cursor,
    ) -> Result<(Document, MatchSet, ColorMatch), SwatchError> {
        let (doc, set) = self.open(file)?;
        let (line, col) = (cursor.line.saturating_sub(1), cursor.col.saturating_sub(1));
        let found = set
            .at_line_col(doc.text(), line, col)
            .cloned()
            .ok_or_else(|| {
                SwatchError::Other(format!(
                    "no color literal at {}:{}:{}",
                    file.display(),
                    cursor.line,
                    cursor.col
                ))
            })?;
        Ok((doc, set, found))
    }
}

/// `line:col kind swatch text`, one-based.
fn describe(doc: &Document, m: &ColorMatch) -> String {
    let (line, col) = doc.line_col(m.span.start);
    format!(
        "{}:{} {} {} {}",
        line + 1,
        col + 1,
        m.kind,
        m.swatch(),
        doc.region(m.span).unwrap_or_default()
    )
}

pub fn scan(ctx: &Context, file: &Path, as_json: bool) -> Result<String, SwatchError> {
    let (doc, set) = ctx.open(file)?;

    if as_json {
        let diagnostics: Vec<_> = set
            .diagnostics()
            .iter()
            .map(|d| {
                json!({
                    "kind": d.kind,
                    "span": d.span,
                    "error": d.error.to_string(),
                })
            })
            .collect();
        let report = json!({
            "file": file.display().to_string(),
            "matches": set.matches(),
            "diagnostics": diagnostics,
        });
        return serde_json::to_string_pretty(&report)
            .map_err(|e| SwatchError::Other(format!("failed to encode scan: {e}")));
    }

    let mut lines: Vec<String> = set.iter().map(|m| describe(&doc, m)).collect();
    for d in set.diagnostics() {
        let (line, col) = doc.line_col(d.span.start);
        lines.push(format!("{}:{} {} rejected: {}", line + 1, col + 1, d.kind, d.error));
    }
    Ok(lines.join("\n"))
}

pub fn at(ctx: &Context, file: &Path, cursor: Cursor) -> Result<String, SwatchError> {
    let (doc, _, found) = ctx.locate(file, cursor)?;
    Ok(describe(&doc, &found))
}

pub fn set(
    ctx: &Context,
    file: &Path,
    cursor: Cursor,
    color: &str,
    write: bool,
) -> Result<String, SwatchError> {
    let color = CanonicalColor::from_hex(color)
        .ok_or_else(|| EngineError::InvalidColor(color.to_string()))?;
    let (doc, set, found) = ctx.locate(file, cursor)?;

    let mut session = PickerSession::new();
    let mut committed = None;
    for event in [
        SessionEvent::Locate(found),
        SessionEvent::Open,
        SessionEvent::Tick(color),
        SessionEvent::Commit,
    ] {
        committed = session.handle(event, &doc, &ctx.settings.format)?;
    }
    let patch = committed.ok_or_else(|| SwatchError::Other("session did not commit".into()))?;
    finish(ctx, file, doc, &set, &patch, write)
}

pub fn convert(
    ctx: &Context,
    file: &Path,
    cursor: Cursor,
    to: FormatKind,
    write: bool,
) -> Result<String, SwatchError> {
    let (doc, set, found) = ctx.locate(file, cursor)?;
    let patch = convert_match(&doc, &found, to, &ctx.settings)?;
    finish(ctx, file, doc, &set, &patch, write)
}

/// Print the change, or apply it and save the file.
fn finish(
    ctx: &Context,
    file: &Path,
    mut doc: Document,
    set: &MatchSet,
    patch: &TextPatch,
    write: bool,
) -> Result<String, SwatchError> {
    let (line, col) = doc.line_col(patch.span.start);
    let before = doc.region(patch.span).unwrap_or_default().to_string();
    let change = format!("{}:{} {before} -> {}", line + 1, col + 1, patch.replacement);
    if !write || patch.is_noop(&doc) {
        return Ok(change);
    }

    let updated = apply_and_rescan(&mut doc, patch, set, &ctx.scanner)?;
    fs::write(file, doc.text())?;
    info!("wrote {} ({})", file.display(), doc.version());

    match updated.at(patch.span.start) {
        Some(m) => Ok(describe(&doc, m)),
        None => Ok(change),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SOURCE: &str = "QColor(98, 0, 238)\nQColor::fromRgbF(0.384, 0.000, 0.933)\n";

    fn source_file(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    fn ctx() -> Context {
        Context::new(&SwatchConfig::default())
    }

    fn cursor(line: usize, col: usize) -> Cursor {
        Cursor { line, col }
    }

    #[test]
    fn scan_lists_matches() {
        let file = source_file(SOURCE);
        let out = scan(&ctx(), file.path(), false).unwrap();
        assert_eq!(
            out,
            "1:1 int-rgb #6200ee QColor(98, 0, 238)\n\
             2:1 float-rgb #6200ee QColor::fromRgbF(0.384, 0.000, 0.933)"
        );
    }

    #[test]
    fn scan_reports_rejected_literals() {
        let file = source_file("x = QColor::fromRgbF(1.5, 0.0, 0.0)\n");
        let out = scan(&ctx(), file.path(), false).unwrap();
        assert_eq!(
            out,
            "1:5 float-rgb rejected: red channel value 1.5 is outside 0.0-1.0"
        );
    }

    #[test]
    fn scan_json_is_structured() {
        let file = source_file(SOURCE);
        let out = scan(&ctx(), file.path(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let matches = value["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0]["kind"], "int-rgb");
        assert_eq!(matches[1]["span"]["start"], 19);
        assert!(value["diagnostics"].as_array().unwrap().is_empty());
    }

    #[test]
    fn at_finds_literal_under_cursor() {
        let file = source_file(SOURCE);
        let out = at(&ctx(), file.path(), cursor(2, 10)).unwrap();
        assert!(out.starts_with("2:1 float-rgb"));

        let err = at(&ctx(), file.path(), cursor(3, 1)).unwrap_err();
        assert!(err.to_string().contains("no color literal"));
    }

    #[test]
    fn set_prints_without_writing() {
        let file = source_file(SOURCE);
        let out = set(&ctx(), file.path(), cursor(1, 3), "#ff0000", false).unwrap();
        assert_eq!(out, "1:1 QColor(98, 0, 238) -> QColor(255, 0, 0)");
        assert_eq!(fs::read_to_string(file.path()).unwrap(), SOURCE);
    }

    #[test]
    fn set_writes_file() {
        let file = source_file(SOURCE);
        let out = set(&ctx(), file.path(), cursor(1, 3), "#ff0000", true).unwrap();
        assert_eq!(out, "1:1 int-rgb #ff0000 QColor(255, 0, 0)");
        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "QColor(255, 0, 0)\nQColor::fromRgbF(0.384, 0.000, 0.933)\n"
        );
    }

    #[test]
    fn set_rejects_bad_color() {
        let file = source_file(SOURCE);
        let err = set(&ctx(), file.path(), cursor(1, 1), "red", false).unwrap_err();
        assert_eq!(err.to_string(), "invalid color: red");
    }

    #[test]
    fn convert_rewrites_notation() {
        let file = source_file("val Primary = Color(0xFF6200EE)\n");
        let out = convert(&ctx(), file.path(), cursor(1, 21), FormatKind::IntRgb, true).unwrap();
        assert_eq!(out, "1:21 int-rgb #6200ee rgb(98, 0, 238)");
        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "val Primary = Color(rgb(98, 0, 238))\n"
        );
    }

    #[test]
    fn convert_refuses_lossy_alpha() {
        let file = source_file("scrim = 0x80000000\n");
        let err = convert(&ctx(), file.path(), cursor(1, 9), FormatKind::HexRgb, false)
            .unwrap_err();
        assert!(matches!(
            err,
            SwatchError::Engine(EngineError::UnsupportedConversion { .. })
        ));
    }
}
