//! Demo calendar units backed by a [`SymbolCatalog`].

use crispy_calendar::{CalendarUnitSymbol, SymbolStyle};

use crate::catalog::SymbolCatalog;

/// A calendar unit with a stable catalog key and an English canonical name.
pub trait NamedUnit: Copy + 'static {
    /// Catalog key prefix, e.g. `weekday`.
    const KIND: &'static str;

    fn all() -> &'static [Self];

    /// Lowercase catalog key segment, e.g. `monday`.
    fn key(self) -> &'static str;

    fn english(self) -> &'static str;
}

macro_rules! named_unit {
    ($ty:ident, $kind:literal, [$($variant:ident => $key:literal, $english:literal;)+]) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $ty {
            $($variant,)+
        }

        impl NamedUnit for $ty {
            const KIND: &'static str = $kind;

            fn all() -> &'static [Self] {
                &[$(Self::$variant,)+]
            }

            fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }

            fn english(self) -> &'static str {
                match self {
                    $(Self::$variant => $english,)+
                }
            }
        }
    };
}

named_unit!(Weekday, "weekday", [
    Monday => "monday", "Monday";
    Tuesday => "tuesday", "Tuesday";
    Wednesday => "wednesday", "Wednesday";
    Thursday => "thursday", "Thursday";
    Friday => "friday", "Friday";
    Saturday => "saturday", "Saturday";
    Sunday => "sunday", "Sunday";
]);

named_unit!(Month, "month", [
    January => "january", "January";
    February => "february", "February";
    March => "march", "March";
    April => "april", "April";
    May => "may", "May";
    June => "june", "June";
    July => "july", "July";
    August => "august", "August";
    September => "september", "September";
    October => "october", "October";
    November => "november", "November";
    December => "december", "December";
]);

/// Canonical English symbol: full name, first three letters, or first letter.
fn english_symbol(name: &str, style: SymbolStyle) -> String {
    match style {
        SymbolStyle::Normal => name.to_string(),
        SymbolStyle::Short => name.chars().take(3).collect(),
        SymbolStyle::VeryShort => name.chars().take(1).collect(),
    }
}

/// A unit paired with the catalog it is labelled from.
#[derive(Clone, Copy, Debug)]
pub struct Localized<'a, U> {
    pub unit: U,
    catalog: &'a SymbolCatalog,
}

impl<'a, U: NamedUnit> Localized<'a, U> {
    pub fn new(unit: U, catalog: &'a SymbolCatalog) -> Self {
        Self { unit, catalog }
    }

    /// Every unit of this kind, in calendar order.
    pub fn all(catalog: &'a SymbolCatalog) -> Vec<Self> {
        U::all().iter().map(|&unit| Self::new(unit, catalog)).collect()
    }
}

impl<U: NamedUnit> CalendarUnitSymbol for Localized<'_, U> {
    /// Uses the exact catalog entry when present; otherwise the canonical English
    /// symbol, which has no separate inline form.
    fn symbol_with(&self, style: SymbolStyle, standalone: bool) -> String {
        match self
            .catalog
            .lookup(U::KIND, self.unit.key(), style, standalone)
        {
            Some(s) => s.to_string(),
            None => {
                tracing::trace!(
                    unit = U::KIND,
                    name = self.unit.key(),
                    %style,
                    standalone,
                    "no catalog entry, using canonical name"
                );
                english_symbol(self.unit.english(), style)
            }
        }
    }
}
