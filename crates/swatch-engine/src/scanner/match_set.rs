//! The published match set and its incremental maintenance.

use std::time::Instant;
use swatch_common::{Span, TextVersion};
use tracing::{debug, warn};

use super::engine::Scanner;
use super::types::{ColorMatch, ScanDiagnostic};

/// A single buffer change: bytes `start..old_end` became `start..new_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEdit {
    pub start: usize,
    pub old_end: usize,
    pub new_end: usize,
}

impl TextEdit {
    pub fn new(start: usize, old_len: usize, new_len: usize) -> Self {
        TextEdit {
            start,
            old_end: start + old_len,
            new_end: start + new_len,
        }
    }

    pub fn delta(&self) -> isize {
        self.new_end as isize - self.old_end as isize
    }
}

/// All matches found in one text version, in span order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchSet {
    version: TextVersion,
    matches: Vec<ColorMatch>,
    diagnostics: Vec<ScanDiagnostic>,
}

impl MatchSet {
    pub(crate) fn from_scan(
        version: TextVersion,
        results: impl Iterator<Item = Result<ColorMatch, ScanDiagnostic>>,
    ) -> Self {
        let mut set = MatchSet {
            version,
            ..MatchSet::default()
        };
        for result in results {
            match result {
                Ok(m) => set.matches.push(m),
                Err(d) => set.diagnostics.push(d),
            }
        }
        set
    }

    pub fn version(&self) -> TextVersion {
        self.version
    }

    pub fn matches(&self) -> &[ColorMatch] {
        &self.matches
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorMatch> {
        self.matches.iter()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Literals that were recognized but rejected.
    pub fn diagnostics(&self) -> &[ScanDiagnostic] {
        &self.diagnostics
    }

    /// The match under a cursor at `offset`.
    ///
    /// A cursor resting right after a literal also selects it.
    pub fn at(&self, offset: usize) -> Option<&ColorMatch> {
        let idx = self.matches.partition_point(|m| m.span.end < offset);
        self.matches[idx..]
            .iter()
            .take(2)
            .find(|m| m.span.contains(offset))
            .or_else(|| self.matches.get(idx).filter(|m| m.span.end == offset))
    }

    /// The match under a zero-based `line` / byte `col` cursor in `text`.
    pub fn at_line_col(&self, text: &str, line: usize, col: usize) -> Option<&ColorMatch> {
        offset_of(text, line, col).and_then(|offset| self.at(offset))
    }

    /// Bring the set up to date after `edit` produced `new_text`.
    ///
    /// Matches before the edited lines are kept, matches after are shifted,
    /// and only the edited lines plus `context_lines` on each side (widened
    /// to cover any literal that touched them) are rescanned.
    ///
    /// A literal that only becomes recognizable through the edit and reaches
    /// beyond that window, such as a constructor name typed in front of a
    /// tuple spread over more lines than the context covers, is not found
    /// until the next full scan.
    pub fn apply_edit(
        &self,
        scanner: &Scanner,
        new_text: &str,
        edit: TextEdit,
        new_version: TextVersion,
    ) -> MatchSet {
        let started = Instant::now();
        let delta = edit.delta();
        let context = scanner.options().context_lines;

        let region = line_region(new_text, edit.start..edit.new_end, context);
        // `lo` sits before the edit, so it means the same in both versions.
        let mut lo = region.start;
        let mut hi = old_offset(region.end, delta);
        loop {
            let (prev_lo, prev_hi) = (lo, hi);
            for span in self.spans() {
                if span.start < hi && lo < span.end {
                    lo = lo.min(span.start);
                    hi = hi.max(span.end);
                }
            }
            lo = line_start(new_text, lo);
            if (lo, hi) == (prev_lo, prev_hi) {
                break;
            }
        }
        let new_hi = new_offset(hi, delta).min(new_text.len());

        let mut set = MatchSet {
            version: new_version,
            ..MatchSet::default()
        };
        set.matches.extend(
            self.matches
                .iter()
                .filter(|m| m.span.end <= lo)
                .map(|m| m.clone().shifted(0, new_version)),
        );
        set.diagnostics.extend(
            self.diagnostics
                .iter()
                .filter(|d| d.span.end <= lo)
                .map(|d| d.clone().shifted(0, new_version)),
        );

        let mut rescanned = 0;
        for result in scanner.scan_region(&new_text[lo..new_hi], lo, new_version) {
            rescanned += 1;
            match result {
                Ok(m) => set.matches.push(m),
                Err(d) => {
                    warn!("rejected {} literal at {}: {}", d.kind, d.span, d.error);
                    set.diagnostics.push(d);
                }
            }
        }

        set.matches.extend(
            self.matches
                .iter()
                .filter(|m| m.span.start >= hi)
                .map(|m| m.clone().shifted(delta, new_version)),
        );
        set.diagnostics.extend(
            self.diagnostics
                .iter()
                .filter(|d| d.span.start >= hi)
                .map(|d| d.clone().shifted(delta, new_version)),
        );

        debug!(
            rescanned,
            kept = set.len() + set.diagnostics.len() - rescanned,
            elapsed_us = started.elapsed().as_micros() as u64,
            "incremental scan of {lo}..{new_hi} at {new_version}"
        );
        set
    }

    fn spans(&self) -> impl Iterator<Item = Span> + '_ {
        self.matches
            .iter()
            .map(|m| m.span)
            .chain(self.diagnostics.iter().map(|d| d.span))
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a ColorMatch;
    type IntoIter = std::slice::Iter<'a, ColorMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

fn old_offset(new: usize, delta: isize) -> usize {
    new.saturating_add_signed(-delta)
}

fn new_offset(old: usize, delta: isize) -> usize {
    old.saturating_add_signed(delta)
}

fn line_start(text: &str, offset: usize) -> usize {
    text[..offset.min(text.len())]
        .rfind('\n')
        .map_or(0, |nl| nl + 1)
}

/// Whole lines covering `range`, widened by `context` lines on each side.
///
/// The end includes the final line's newline when there is one.
pub fn line_region(text: &str, range: std::ops::Range<usize>, context: usize) -> Span {
    let mut start = line_start(text, range.start);
    for _ in 0..context {
        if start == 0 {
            break;
        }
        start = line_start(text, start - 1);
    }

    let mut end = range.end.max(range.start).min(text.len());
    for _ in 0..=context {
        match text[end..].find('\n') {
            Some(nl) => end += nl + 1,
            None => {
                end = text.len();
                break;
            }
        }
    }
    Span::new(start, end)
}

/// Byte offset of a zero-based `line` / byte `col` position.
///
/// Columns past the end of the line clamp to the line end.
pub fn offset_of(text: &str, line: usize, col: usize) -> Option<usize> {
    let mut start = 0;
    for _ in 0..line {
        start += text[start..].find('\n')? + 1;
    }
    let line_len = text[start..].find('\n').unwrap_or(text.len() - start);
    let mut offset = start + col.min(line_len);
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    Some(offset)
}
