//! Format registry -- the catalog of supported color notations.
//!
//! Each [`FormatKind`] owns a recognizer, a parser and a serializer.
//! Recognizers are tried in [`FormatKind::ALL`] order and are disjoint by
//! construction: hex kinds by exact digit count, integer versus float by a
//! decimal point or a float-only constructor, and aggregate initializers
//! only where nothing else matched.
//!
//! HSL or named colors would be new kinds here; none are supported today.

mod call;
mod field;
mod hex;
mod kind;
mod lex;
mod list;
mod registry;
mod style;
mod synthesize;

pub use hex::HexCapture;
pub use kind::{Family, FormatKind};
pub use list::ListCapture;
pub use registry::{recognize_at, Capture, Recognized};
pub use style::{FieldStyle, HexCase, HexOrder, HexStyle, ListStyle, NumberStyle, Style};

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
