use std::path::PathBuf;

use crate::types::{Channel, ChannelDomain, Span, TextVersion};

/// A recognized literal whose contents cannot become a color.
///
/// Non-fatal: the scanner drops the literal and keeps going.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("{channel} channel value {value} is outside {domain}")]
    OutOfRange {
        channel: Channel,
        value: String,
        domain: ChannelDomain,
    },

    #[error("malformed number literal: {0}")]
    MalformedNumber(String),

    #[error("{0} channel given more than once")]
    DuplicateChannel(Channel),

    #[error("{0} channel missing")]
    MissingChannel(Channel),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("stale match: computed against {expected}, buffer is at {current}")]
    StaleMatch {
        expected: TextVersion,
        current: TextVersion,
    },

    #[error("span {span} is outside the {len}-byte buffer")]
    SpanOutOfBounds { span: Span, len: usize },

    #[error("style does not belong to {kind}")]
    StyleMismatch { kind: String },

    #[error("invalid session transition: {event} while {state}")]
    InvalidTransition {
        state: &'static str,
        event: &'static str,
    },

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("cannot convert {from} to {to}")]
    UnsupportedConversion { from: String, to: String },

    #[error("unknown format kind: {0}")]
    UnknownKind(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("ambiguous config value {key} = {value}: {reason}")]
    Ambiguous {
        key: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SwatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
