//! Calendar symbol error types

use crispy_sys::SysError;
use thiserror::Error;

/// Errors raised while parsing styles, decoding native values, or reading options
#[derive(Debug, Error)]
pub enum CalendarError {
    /// Text does not name any `SymbolStyle`
    #[error("unknown symbol style `{0}` (expected one of: normal, short, very-short)")]
    UnknownStyle(String),

    /// Native layer rejected a value
    #[error(transparent)]
    Sys(#[from] SysError),

    /// Symbol options are not valid TOML or contain unknown keys or styles
    #[error("invalid symbol options: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for calendar symbol operations
pub type Result<T> = std::result::Result<T, CalendarError>;
