//! Crispy calendar unit symbols
//!
//! - [`SymbolStyle`]: how abbreviated a unit's label is (`Normal`, `Short`, `VeryShort`)
//! - [`CalendarUnitSymbol`]: the one method a calendar unit implements to be labelled
//! - [`CalendarUnitSymbolExt`]: default-filling conveniences available on every implementor
//! - [`bridge`]: lossless conversion to and from the native layer's [`RawSymbolStyle`]
//!
//! ```
//! use crispy_calendar::prelude::*;
//!
//! struct Monday;
//!
//! impl CalendarUnitSymbol for Monday {
//!     fn symbol_with(&self, style: SymbolStyle, _standalone: bool) -> String {
//!         match style {
//!             SymbolStyle::Normal => "Monday",
//!             SymbolStyle::Short => "Mon",
//!             SymbolStyle::VeryShort => "M",
//!         }
//!         .to_string()
//!     }
//! }
//!
//! assert_eq!(Monday.symbol(), "Monday");
//! assert_eq!(Monday.styled_symbol(SymbolStyle::Short), "Mon");
//! ```

pub mod bridge;
mod error;
mod options;
mod style;
mod symbol;

pub use crispy_sys::RawSymbolStyle;
pub use error::{CalendarError, Result};
pub use options::SymbolOptions;
pub use style::SymbolStyle;
pub use symbol::{CalendarUnitSymbol, CalendarUnitSymbolExt};

/// Glob-import the capability traits together with the style type.
pub mod prelude {
    pub use crate::style::SymbolStyle;
    pub use crate::symbol::{CalendarUnitSymbol, CalendarUnitSymbolExt};
}
