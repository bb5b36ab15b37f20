use std::ffi::c_int;

use tracing::warn;

use crate::error::{Result, SysError};

/// Symbol style as declared by the native calendar layer.
///
/// Ordinals match the C enumeration and must not be reordered.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawSymbolStyle {
    Normal = 0,
    Short = 1,
    VeryShort = 2,
}

impl RawSymbolStyle {
    /// Every variant in ordinal order.
    pub const ALL: [RawSymbolStyle; 3] = [Self::Normal, Self::Short, Self::VeryShort];

    /// C ordinal of this variant.
    pub const fn ordinal(self) -> c_int {
        self as c_int
    }

    /// Decode an ordinal received from native code.
    ///
    /// Native callers pass plain integers, so anything outside the declared range
    /// is rejected here instead of being transmuted.
    pub fn from_ordinal(ordinal: c_int) -> Result<Self> {
        match ordinal {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Short),
            2 => Ok(Self::VeryShort),
            other => {
                warn!(ordinal = other, "rejecting unknown native symbol style");
                Err(SysError::InvalidOrdinal(other))
            }
        }
    }
}

impl TryFrom<c_int> for RawSymbolStyle {
    type Error = SysError;

    fn try_from(ordinal: c_int) -> Result<Self> {
        Self::from_ordinal(ordinal)
    }
}

impl From<RawSymbolStyle> for c_int {
    fn from(style: RawSymbolStyle) -> Self {
        style.ordinal()
    }
}

/// Default symbol style, exported for the native layer.
#[no_mangle]
pub extern "C" fn crispy_symbol_style_default() -> RawSymbolStyle {
    RawSymbolStyle::Normal
}
