//! Scanner: walks text and yields located color literals.

use std::time::Instant;
use swatch_common::{Span, TextVersion};
use tracing::{debug, warn};

use crate::format::recognize_at;
use crate::settings::ScanOptions;

use super::match_set::MatchSet;
use super::types::{ColorMatch, ScanDiagnostic};

/// Applies the format registry to text.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Self {
        Scanner { options }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Lazily scan a whole buffer.
    pub fn scan<'a>(&'a self, text: &'a str, version: TextVersion) -> Scan<'a> {
        self.scan_region(text, 0, version)
    }

    /// Lazily scan `region`, a slice that starts at `base_offset` in the buffer.
    ///
    /// Yielded spans are absolute.
    pub fn scan_region<'a>(
        &'a self,
        region: &'a str,
        base_offset: usize,
        version: TextVersion,
    ) -> Scan<'a> {
        Scan {
            text: region,
            base: base_offset,
            pos: 0,
            version,
            options: &self.options,
        }
    }

    /// Scan a whole buffer into a [`MatchSet`], logging a summary.
    pub fn collect(&self, text: &str, version: TextVersion) -> MatchSet {
        let started = Instant::now();
        let set = MatchSet::from_scan(version, self.scan(text, version));
        debug!(
            matches = set.len(),
            rejected = set.diagnostics().len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "full scan of {} bytes at {version}",
            text.len()
        );
        for diag in set.diagnostics() {
            warn!("rejected {} literal at {}: {}", diag.kind, diag.span, diag.error);
        }
        set
    }
}

/// Left-to-right, non-overlapping sequence of scan results.
///
/// Cloning a `Scan` restarts from the clone's position.
#[derive(Debug, Clone)]
pub struct Scan<'a> {
    text: &'a str,
    base: usize,
    pos: usize,
    version: TextVersion,
    options: &'a ScanOptions,
}

impl Iterator for Scan<'_> {
    type Item = Result<ColorMatch, ScanDiagnostic>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let pos = self.pos;
            let byte = self.text.as_bytes()[pos];

            let recognized = if byte.is_ascii() {
                recognize_at(self.text, pos, self.options)
            } else {
                None
            };
            let Some(rec) = recognized else {
                self.pos += utf8_width(byte);
                continue;
            };

            // A failed parse still consumes the whole literal.
            self.pos = rec.span.end;
            let span = Span::new(self.base + rec.span.start, self.base + rec.span.end);
            let item = match rec.kind.parse(&rec.capture) {
                Ok((color, style)) => Ok(ColorMatch {
                    kind: rec.kind,
                    span,
                    color,
                    style,
                    version: self.version,
                }),
                Err(error) => Err(ScanDiagnostic {
                    kind: rec.kind,
                    span,
                    error,
                    version: self.version,
                }),
            };
            return Some(item);
        }
        None
    }
}

fn utf8_width(lead: u8) -> usize {
    match lead {
        0xF0..=0xFF => 4,
        0xE0..=0xEF => 3,
        0xC0..=0xDF => 2,
        _ => 1,
    }
}
