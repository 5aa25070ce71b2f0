//! Scanner -- locate color literals in a buffer.
//!
//! Walks text one character at a time, trying registry descriptors in
//! priority order. Results are left-to-right and never overlap; literals that
//! are recognized but fail to parse are reported as diagnostics and skipped
//! whole. [`MatchSet`] keeps the published results and updates them after
//! an edit by rescanning only the touched lines.

mod engine;
mod match_set;
mod types;

pub use engine::*;
pub use match_set::*;
pub use types::*;

#[cfg(test)]
mod tests;
