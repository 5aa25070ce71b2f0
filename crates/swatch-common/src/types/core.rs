use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Half-open byte range `[start, end)` into a text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} past end {end}");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Move the span by `delta` bytes. Callers guarantee the result stays non-negative.
    pub fn shift(self, delta: isize) -> Self {
        Self {
            start: self.start.saturating_add_signed(delta),
            end: self.end.saturating_add_signed(delta),
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(r: Range<usize>) -> Self {
        Span::new(r.start, r.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Monotonically increasing token identifying one state of a text buffer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TextVersion(pub u64);

impl TextVersion {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TextVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "version {}", self.0)
    }
}

/// One of the four color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    pub const RGB: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
    pub const RGBA: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];
    pub const ARGB: [Channel; 4] = [Channel::Alpha, Channel::Red, Channel::Green, Channel::Blue];

    /// Position of this channel in `[r, g, b, a]` arrays.
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Alpha => 3,
        }
    }

    /// Resolve an argument or field label (`red`, `R`, `alpha`, ...).
    pub fn from_label(label: &str) -> Option<Channel> {
        match label.to_ascii_lowercase().as_str() {
            "r" | "red" => Some(Channel::Red),
            "g" | "green" => Some(Channel::Green),
            "b" | "blue" => Some(Channel::Blue),
            "a" | "alpha" => Some(Channel::Alpha),
            _ => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
        };
        f.write_str(name)
    }
}

/// Value domain a literal channel is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelDomain {
    /// Integer 0-255 (decimal or a hex byte pair).
    Byte,
    /// Real 0.0-1.0.
    Unit,
}

impl fmt::Display for ChannelDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelDomain::Byte => f.write_str("0-255"),
            ChannelDomain::Unit => f.write_str("0.0-1.0"),
        }
    }
}
