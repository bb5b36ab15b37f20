//! Crispy native layer types
//!
//! Mirrors the C declarations used by the native calendar view. Everything here is
//! `#[repr(C)]` so it can cross the FFI boundary unchanged; richer Rust-side types
//! live in `crispy_calendar` and convert to and from these.

mod error;
mod style;

pub use error::{Result, SysError};
pub use style::{crispy_symbol_style_default, RawSymbolStyle};
