//! Edit/replace engine.
//!
//! Turns an edited [`CanonicalColor`](swatch_common::CanonicalColor) back
//! into a [`TextPatch`] that keeps the literal's notation and style. Patches
//! are proposed here and applied by a [`BufferWriter`](crate::document::BufferWriter).

mod patch;
mod session;

pub use patch::*;
pub use session::*;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
