use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Style of a localized string representing a calendar unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum SymbolStyle {
    /// Full localized name, e.g. "Monday".
    #[default]
    Normal,
    /// Abbreviated name, usually a few letters, e.g. "Mon".
    Short,
    /// Shortest name, usually a single letter, e.g. "M".
    VeryShort,
}

impl SymbolStyle {
    /// Style used when the caller does not ask for a specific one.
    pub const DEFAULT: SymbolStyle = SymbolStyle::Normal;

    /// Stable style id for config/serialization.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Short => "short",
            Self::VeryShort => "very-short",
        }
    }

    /// Full style list, longest first.
    pub fn all() -> &'static [SymbolStyle] {
        const STYLES: [SymbolStyle; 3] = [
            SymbolStyle::Normal,
            SymbolStyle::Short,
            SymbolStyle::VeryShort,
        ];
        &STYLES
    }
}

impl Display for SymbolStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SymbolStyle {
    type Err = CalendarError;

    /// Accepts style ids case-insensitively, with `_` standing in for `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::all()
            .iter()
            .copied()
            .find(|style| style.id() == id)
            .ok_or_else(|| CalendarError::UnknownStyle(s.trim().to_string()))
    }
}

impl From<SymbolStyle> for &'static str {
    fn from(style: SymbolStyle) -> Self {
        style.id()
    }
}

impl TryFrom<String> for SymbolStyle {
    type Error = CalendarError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_normal() {
        assert_eq!(SymbolStyle::DEFAULT, SymbolStyle::Normal);
        assert_eq!(SymbolStyle::default(), SymbolStyle::DEFAULT);
    }

    #[test]
    fn parses_ids_leniently() {
        assert_eq!("short".parse::<SymbolStyle>().unwrap(), SymbolStyle::Short);
        assert_eq!(
            " Very_Short ".parse::<SymbolStyle>().unwrap(),
            SymbolStyle::VeryShort
        );
        assert_eq!("NORMAL".parse::<SymbolStyle>().unwrap(), SymbolStyle::Normal);
    }

    #[test]
    fn unknown_id_is_reported_verbatim() {
        let err = "tiny".parse::<SymbolStyle>().unwrap_err();
        assert!(matches!(err, CalendarError::UnknownStyle(ref s) if s == "tiny"));
    }

    #[test]
    fn display_matches_id() {
        for style in SymbolStyle::all() {
            assert_eq!(style.to_string(), style.id());
            assert_eq!(style.id().parse::<SymbolStyle>().unwrap(), *style);
        }
    }

    #[test]
    fn serde_uses_style_ids() {
        assert_eq!(
            serde_json::to_string(&SymbolStyle::VeryShort).unwrap(),
            "\"very-short\""
        );
        let style: SymbolStyle = serde_json::from_str("\"Short\"").unwrap();
        assert_eq!(style, SymbolStyle::Short);
        assert!(serde_json::from_str::<SymbolStyle>("\"medium\"").is_err());
    }
}
