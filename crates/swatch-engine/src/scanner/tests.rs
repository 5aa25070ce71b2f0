use super::*;
use crate::format::FormatKind;
use crate::settings::ScanOptions;
use swatch_common::{ParseError, Span, TextVersion};

const V0: TextVersion = TextVersion(0);

fn kinds(set: &MatchSet) -> Vec<FormatKind> {
    set.iter().map(|m| m.kind).collect()
}

fn texts<'a>(text: &'a str, set: &MatchSet) -> Vec<&'a str> {
    set.iter().map(|m| &text[m.span.range()]).collect()
}

#[test]
fn scan_finds_literals_left_to_right() {
    let text = "a = QColor(98, 0, 238); b = 0xFF5722; c = {0.1f, 0.2f, 0.3f};";
    let set = Scanner::default().collect(text, V0);
    assert_eq!(
        kinds(&set),
        [FormatKind::IntRgb, FormatKind::HexRgb, FormatKind::FieldFloat]
    );
    assert_eq!(
        texts(text, &set),
        ["QColor(98, 0, 238)", "0xFF5722", "{0.1f, 0.2f, 0.3f}"]
    );
    assert!(set.iter().all(|m| m.version == V0));
}

#[test]
fn scenario_two_qcolor_lines() {
    let text = "QColor(98, 0, 238)\nQColor::fromRgbF(0.384, 0.000, 0.933)\n";
    let set = Scanner::default().collect(text, V0);
    assert_eq!(kinds(&set), [FormatKind::IntRgb, FormatKind::FloatRgb]);

    let (first, second) = (&set.matches()[0], &set.matches()[1]);
    assert!(first.color.approx_eq(&second.color, 1e-3));
    assert!((first.color.r() - 0.384).abs() < 1e-3);
    assert_eq!(first.color.a(), 1.0);
}

#[test]
fn invalid_literal_is_reported_and_skipped_whole() {
    let text = "x = QColor::fromRgbF(1.5, 0.0, 0.0); y = #00ff00";
    let set = Scanner::default().collect(text, V0);
    assert_eq!(kinds(&set), [FormatKind::HexRgb]);

    let diags = set.diagnostics();
    assert_eq!(diags.len(), 1);
    assert_eq!(&text[diags[0].span.range()], "QColor::fromRgbF(1.5, 0.0, 0.0)");
    assert!(matches!(diags[0].error, ParseError::OutOfRange { .. }));
}

#[test]
fn failed_literal_does_not_rematch_inside() {
    let text = "{1.5, 0.5, 0.5} (1, 2, 3)";
    let set = Scanner::default().collect(text, V0);
    assert_eq!(set.diagnostics().len(), 1);
    assert_eq!(texts(text, &set), ["(1, 2, 3)"]);
}

#[test]
fn non_ascii_text_keeps_byte_offsets() {
    let text = "颜色 = QColor(1, 2, 3) // ünïcode #abcdef";
    let set = Scanner::default().collect(text, V0);
    assert_eq!(texts(text, &set), ["QColor(1, 2, 3)", "#abcdef"]);
}

#[test]
fn identifier_prefixes_do_not_match() {
    let text = "myColor(1, 2, 3); QColors(1, 2, 3); x0xFF5722; #FF5722AA11";
    let set = Scanner::default().collect(text, V0);
    assert!(set.is_empty(), "unexpected matches: {:?}", texts(text, &set));
}

#[test]
fn region_scan_reports_absolute_spans() {
    let text = "line one\nQColor(1, 2, 3)\n";
    let scanner = Scanner::default();
    let region = &text[9..];
    let found: Vec<_> = scanner
        .scan_region(region, 9, V0)
        .filter_map(Result::ok)
        .collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].span, Span::new(9, 24));
}

#[test]
fn scan_is_restartable() {
    let text = "#111111 #222222 #333333";
    let scanner = Scanner::default();
    let mut scan = scanner.scan(text, V0);
    scan.next();
    let rest: Vec<_> = scan.clone().filter_map(Result::ok).collect();
    let again: Vec<_> = scan.filter_map(Result::ok).collect();
    assert_eq!(rest.len(), 2);
    assert_eq!(rest, again);
}

#[test]
fn bare_tuples_can_be_disabled() {
    let scanner = Scanner::new(ScanOptions {
        bare_tuples: false,
        ..ScanOptions::default()
    });
    let set = scanner.collect("RED = (255, 0, 0)", V0);
    assert!(set.is_empty());
}

#[test]
fn at_selects_containing_or_just_after() {
    let text = "#111111 #222222";
    let set = Scanner::default().collect(text, V0);
    assert_eq!(set.at(0).unwrap().span.start, 0);
    assert_eq!(set.at(3).unwrap().span.start, 0);
    // Right after the first literal.
    assert_eq!(set.at(7).unwrap().span.start, 0);
    assert_eq!(set.at(8).unwrap().span.start, 8);
    assert_eq!(set.at(15).unwrap().span.start, 8);
    assert!(set.at(16).is_none());

    let adjacent = "(1, 2, 3)#444444";
    let set = Scanner::default().collect(adjacent, V0);
    assert_eq!(set.at(9).unwrap().kind, FormatKind::HexRgb);
}

#[test]
fn at_line_col_uses_zero_based_positions() {
    let text = "fn main() {\n    let c = QColor(1, 2, 3);\n}\n";
    let set = Scanner::default().collect(text, V0);
    assert_eq!(set.at_line_col(text, 1, 14).unwrap().kind, FormatKind::IntRgb);
    assert!(set.at_line_col(text, 1, 2).is_none());
    assert!(set.at_line_col(text, 9, 0).is_none());
}

#[test]
fn line_region_widens_by_context() {
    let text = "a\nb\nc\nd\ne\n";
    // Edit inside "c".
    assert_eq!(line_region(text, 4..5, 0), Span::new(4, 6));
    assert_eq!(line_region(text, 4..5, 1), Span::new(2, 8));
    assert_eq!(line_region(text, 4..5, 5), Span::new(0, 10));
    assert_eq!(line_region("no newline", 3..3, 1), Span::new(0, 10));
}

#[test]
fn offset_of_clamps_columns() {
    let text = "ab\ncdef\n";
    assert_eq!(offset_of(text, 0, 1), Some(1));
    assert_eq!(offset_of(text, 1, 2), Some(5));
    assert_eq!(offset_of(text, 1, 99), Some(7));
    assert_eq!(offset_of(text, 5, 0), None);
    assert_eq!(offset_of("é", 0, 1), Some(0));
}

fn apply(text: &str, start: usize, old_len: usize, insert: &str) -> (String, TextEdit) {
    let mut new_text = text.to_string();
    new_text.replace_range(start..start + old_len, insert);
    (new_text, TextEdit::new(start, old_len, insert.len()))
}

fn assert_incremental_matches_full(text: &str, start: usize, old_len: usize, insert: &str) {
    let scanner = Scanner::default();
    let before = scanner.collect(text, V0);
    let (new_text, edit) = apply(text, start, old_len, insert);
    let v1 = V0.next();

    let incremental = before.apply_edit(&scanner, &new_text, edit, v1);
    let full = scanner.collect(&new_text, v1);
    assert_eq!(incremental, full, "after editing {text:?} into {new_text:?}");
}

#[test]
fn incremental_rescan_matches_full_scan() {
    let text = "QColor(98, 0, 238)\nQColor::fromRgbF(0.384, 0.000, 0.933)\n#123456\n\n(1, 2, 3)\n";
    // Replace the first literal.
    assert_incremental_matches_full(text, 0, 18, "QColor(255, 0, 0)");
    // Insert a line at the top.
    assert_incremental_matches_full(text, 0, 0, "// header\n");
    // Break the hex literal.
    assert_incremental_matches_full(text, 58, 1, "");
    // Make the float literal invalid.
    assert_incremental_matches_full(text, 36, 1, "5");
    // Delete a whole line.
    assert_incremental_matches_full(text, 19, 38, "");
    // Append at the end.
    assert_incremental_matches_full(text, text.len(), 0, "0xFF000000\n");
}

#[test]
fn incremental_rescan_covers_multiline_literals() {
    let text = "x = (\n    1,\n    2,\n    3\n)\ny = #abcdef\n";
    let line = text.find("    2").unwrap();
    let scanner = Scanner::new(ScanOptions {
        context_lines: 0,
        ..ScanOptions::default()
    });
    let before = scanner.collect(text, V0);
    assert_eq!(before.len(), 2);

    let (new_text, edit) = apply(text, line + 4, 1, "9");
    let after = before.apply_edit(&scanner, &new_text, edit, V0.next());
    assert_eq!(after, scanner.collect(&new_text, V0.next()));
    assert_eq!(after.matches()[0].color.to_int8()[1], 9);
}

#[test]
fn literal_completed_outside_context_needs_full_scan() {
    let text = "Q(1,\n2,\n3)\n";
    let scanner = Scanner::new(ScanOptions {
        context_lines: 0,
        ..ScanOptions::default()
    });
    let before = scanner.collect(text, V0);
    assert!(before.is_empty());

    let (new_text, edit) = apply(text, 0, 1, "QColor");
    let after = before.apply_edit(&scanner, &new_text, edit, V0.next());
    assert!(after.is_empty());

    let full = scanner.collect(&new_text, V0.next());
    assert_eq!(kinds(&full), vec![FormatKind::IntRgb]);
    assert_eq!(texts(&new_text, &full), vec!["QColor(1,\n2,\n3)"]);
}

#[test]
fn apply_edit_shifts_trailing_matches() {
    let text = "#111111\n#222222\n#333333\n";
    let scanner = Scanner::new(ScanOptions {
        context_lines: 0,
        ..ScanOptions::default()
    });
    let before = scanner.collect(text, V0);
    let (new_text, edit) = apply(text, 0, 0, "// one more line\n");
    let after = before.apply_edit(&scanner, &new_text, edit, TextVersion(7));

    assert_eq!(after.version(), TextVersion(7));
    assert_eq!(after.len(), 3);
    assert_eq!(after.matches()[2].span, before.matches()[2].span.shift(17));
    assert!(after.iter().all(|m| m.version == TextVersion(7)));
}
