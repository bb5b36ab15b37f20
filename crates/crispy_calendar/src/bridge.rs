//! Conversion between [`SymbolStyle`] and the native layer's [`RawSymbolStyle`].
//!
//! Both directions are exhaustive matches with no fallback arm: adding a variant on
//! either side fails to compile until the mapping is updated here.

use std::ffi::c_int;

use crispy_sys::RawSymbolStyle;

use crate::error::Result;
use crate::style::SymbolStyle;

/// Native equivalent of `style`.
pub const fn to_raw(style: SymbolStyle) -> RawSymbolStyle {
    match style {
        SymbolStyle::Normal => RawSymbolStyle::Normal,
        SymbolStyle::Short => RawSymbolStyle::Short,
        SymbolStyle::VeryShort => RawSymbolStyle::VeryShort,
    }
}

/// Style equivalent to a native `raw` value.
pub const fn from_raw(raw: RawSymbolStyle) -> SymbolStyle {
    match raw {
        RawSymbolStyle::Normal => SymbolStyle::Normal,
        RawSymbolStyle::Short => SymbolStyle::Short,
        RawSymbolStyle::VeryShort => SymbolStyle::VeryShort,
    }
}

/// Decode a style passed across the C boundary as a bare ordinal.
pub fn from_raw_ordinal(ordinal: c_int) -> Result<SymbolStyle> {
    Ok(from_raw(RawSymbolStyle::from_ordinal(ordinal)?))
}

impl From<SymbolStyle> for RawSymbolStyle {
    fn from(style: SymbolStyle) -> Self {
        to_raw(style)
    }
}

impl From<RawSymbolStyle> for SymbolStyle {
    fn from(raw: RawSymbolStyle) -> Self {
        from_raw(raw)
    }
}

impl SymbolStyle {
    /// Native equivalent of this style.
    pub const fn to_raw(self) -> RawSymbolStyle {
        to_raw(self)
    }
}
