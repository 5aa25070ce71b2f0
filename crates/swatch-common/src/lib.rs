pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, EngineError, ParseError, SwatchError};
pub use id::SessionId;
pub use types::{CanonicalColor, Channel, ChannelDomain, Span, TextVersion};

pub type Result<T> = std::result::Result<T, SwatchError>;
