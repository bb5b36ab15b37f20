use std::rc::Rc;
use std::sync::Arc;

use crate::style::SymbolStyle;

/// Calendar unit that has a localizable symbol in addition to its value.
///
/// Implementors provide [`symbol_with`](Self::symbol_with) only; the shorter forms come
/// from [`CalendarUnitSymbolExt`], which every implementor gets for free.
pub trait CalendarUnitSymbol {
    /// Localized name of this unit.
    ///
    /// `standalone` is `true` when the result is shown on its own (a column header,
    /// a picker row) and `false` when it is embedded in a longer phrase. Some
    /// languages inflect the two differently.
    ///
    /// Should never return an empty string; what to show when locale data has no
    /// entry for the requested style and context is up to the implementor.
    fn symbol_with(&self, style: SymbolStyle, standalone: bool) -> String;
}

/// Default-filling shorthands for [`CalendarUnitSymbol`].
///
/// Blanket-implemented, so the shorthands always forward to the primitive.
pub trait CalendarUnitSymbolExt: CalendarUnitSymbol {
    /// Symbol with the default style, for standalone use.
    fn symbol(&self) -> String {
        self.symbol_with(SymbolStyle::DEFAULT, true)
    }

    /// Symbol with the default style for the given context.
    fn context_symbol(&self, standalone: bool) -> String {
        self.symbol_with(SymbolStyle::DEFAULT, standalone)
    }

    /// Symbol with the given style, for standalone use.
    fn styled_symbol(&self, style: SymbolStyle) -> String {
        self.symbol_with(style, true)
    }
}

impl<T: CalendarUnitSymbol + ?Sized> CalendarUnitSymbolExt for T {}

impl<T: CalendarUnitSymbol + ?Sized> CalendarUnitSymbol for &T {
    fn symbol_with(&self, style: SymbolStyle, standalone: bool) -> String {
        (**self).symbol_with(style, standalone)
    }
}

impl<T: CalendarUnitSymbol + ?Sized> CalendarUnitSymbol for Box<T> {
    fn symbol_with(&self, style: SymbolStyle, standalone: bool) -> String {
        (**self).symbol_with(style, standalone)
    }
}

impl<T: CalendarUnitSymbol + ?Sized> CalendarUnitSymbol for Rc<T> {
    fn symbol_with(&self, style: SymbolStyle, standalone: bool) -> String {
        (**self).symbol_with(style, standalone)
    }
}

impl<T: CalendarUnitSymbol + ?Sized> CalendarUnitSymbol for Arc<T> {
    fn symbol_with(&self, style: SymbolStyle, standalone: bool) -> String {
        (**self).symbol_with(style, standalone)
    }
}
