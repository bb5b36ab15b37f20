//! Lower-layer error types

use std::ffi::c_int;

use thiserror::Error;

/// Errors raised while decoding values handed over by native callers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SysError {
    /// Ordinal does not name any `RawSymbolStyle` variant
    #[error("invalid symbol style ordinal: {0}")]
    InvalidOrdinal(c_int),
}

/// Result type for lower-layer operations
pub type Result<T> = std::result::Result<T, SysError>;
