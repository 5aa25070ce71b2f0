//! Property-based tests for scanning and round-tripping using proptest.

use proptest::prelude::*;
use swatch_common::{CanonicalColor, TextVersion};
use swatch_engine::{propose, Document, FormatKind, Scanner, Settings, TextSource};

// ============================================================================
// Test helpers
// ============================================================================

const FRAGMENTS: &[&str] = &[
    "QColor(", "rgba(", "Color::srgb(", "(", ")", "{", "}", ", ", ",", "0", "1", "25", "255",
    "007", ".5", "0.", "f", "#", "ff", "a0", "0x", " ", "\n", "x", "\"",
];

/// Text made of pieces that often combine into color literals.
fn literal_soup() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..60).prop_map(|parts| parts.concat())
}

fn unit_text() -> impl Strategy<Value = String> {
    (0u32..=1000).prop_map(|n| format!("{:.3}", f64::from(n) / 1000.0))
}

fn single(text: &str) -> swatch_engine::ColorMatch {
    let set = Scanner::default().collect(text, TextVersion(0));
    assert_eq!(set.len(), 1, "{text}");
    set.matches()[0].clone()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Every accepted literal serializes back to its own text.
    #[test]
    fn scanned_literals_round_trip(text in literal_soup()) {
        let set = Scanner::default().collect(&text, TextVersion(0));
        let cfg = Settings::default().format;
        for m in &set {
            let again = m.kind.serialize(&m.color, &m.style, &cfg).unwrap();
            prop_assert_eq!(again.as_str(), &text[m.span.range()]);
        }
    }

    /// Matches come out in order and never overlap.
    #[test]
    fn spans_are_increasing_and_disjoint(text in literal_soup()) {
        let set = Scanner::default().collect(&text, TextVersion(0));
        for pair in set.matches().windows(2) {
            prop_assert!(pair[0].span.end <= pair[1].span.start);
            prop_assert!(!pair[0].span.is_empty());
        }
        for d in set.diagnostics() {
            prop_assert!(set.iter().all(|m| !m.span.overlaps(&d.span)));
        }
    }

    /// Integer channels survive the canonical model unchanged.
    #[test]
    fn int8_is_identity(r: u8, g: u8, b: u8, a: u8) {
        let color = CanonicalColor::from_int8(r, g, b, Some(a));
        prop_assert_eq!(color.to_int8(), [r, g, b, a]);
    }

    #[test]
    fn float_literals_keep_their_digits(
        r in unit_text(),
        g in unit_text(),
        b in unit_text(),
        a in unit_text(),
    ) {
        let text = format!("Color::srgba({r}, {g}, {b}, {a})");
        let m = single(&text);
        prop_assert_eq!(m.kind, FormatKind::FloatRgba);
        let again = m.kind.serialize(&m.color, &m.style, &Settings::default().format).unwrap();
        prop_assert_eq!(again, text);
    }

    /// Tokens longer than an f64 can hold come back unchanged.
    #[test]
    fn long_float_literals_keep_their_digits(
        r in "0\\.[0-9]{17,25}",
        g in "0\\.[0-9]{1,25}",
    ) {
        let text = format!("Color({r}, {g}, 0.5)");
        let m = single(&text);
        let again = m.kind.serialize(&m.color, &m.style, &Settings::default().format).unwrap();
        prop_assert_eq!(again, text);
    }

    #[test]
    fn hex_literals_keep_their_digits(value: u32, upper: bool) {
        let text = if upper {
            format!("0x{value:08X}")
        } else {
            format!("0x{value:08x}")
        };
        let m = single(&text);
        prop_assert_eq!(m.kind, FormatKind::HexArgb);
        prop_assert_eq!(m.color.channel_int8(swatch_common::Channel::Alpha), (value >> 24) as u8);
        let again = m.kind.serialize(&m.color, &m.style, &Settings::default().format).unwrap();
        prop_assert_eq!(again, text);
    }

    /// An edit writes exactly the new bytes and rescans to the same color.
    #[test]
    fn edits_rescan_to_the_written_color(r: u8, g: u8, b: u8, a: u8) {
        let doc = Document::new("c = QColor(98, 0, 238, 255);");
        let m = single(doc.text());
        let color = CanonicalColor::from_int8(r, g, b, Some(a));
        let patch = propose(&doc, &m, &color, &Settings::default().format).unwrap();
        prop_assert_eq!(&patch.replacement, &format!("QColor({r}, {g}, {b}, {a})"));
        prop_assert_eq!(single(&patch.replacement).color.to_int8(), [r, g, b, a]);
    }
}
