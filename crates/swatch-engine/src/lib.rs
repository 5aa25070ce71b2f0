//! Color literal detection and round-trip editing.
//!
//! The [`Scanner`] finds color literals in source text using the
//! [`format`] registry, parsing each into a [`CanonicalColor`] plus the
//! [`Style`] it was written in. Edits go back through [`propose`], which
//! re-serializes the new color in the literal's own notation, so an
//! unchanged color reproduces its text byte for byte.
//!
//! ```
//! use swatch_common::CanonicalColor;
//! use swatch_engine::{propose, Document, Scanner, Settings, TextSource};
//!
//! let doc = Document::new("let c = QColor(98, 0, 238);");
//! let set = Scanner::default().collect(doc.text(), doc.version());
//! let red = CanonicalColor::from_int8(255, 0, 0, None);
//! let patch = propose(&doc, &set.matches()[0], &red, &Settings::default().format).unwrap();
//! assert_eq!(patch.replacement, "QColor(255, 0, 0)");
//! ```
//!
//! [`CanonicalColor`]: swatch_common::CanonicalColor

pub mod document;
pub mod edit;
pub mod format;
pub mod scanner;
pub mod settings;

pub use document::{BufferWriter, Document, TextSource};
pub use edit::{
    apply_and_rescan, convert, propose, render_new, PickerSession, Preview, SessionEvent,
    SessionState, Step, TextPatch,
};
pub use format::{FormatKind, Style};
pub use scanner::{ColorMatch, MatchSet, ScanDiagnostic, Scanner, TextEdit};
pub use settings::{ScanOptions, Settings};
