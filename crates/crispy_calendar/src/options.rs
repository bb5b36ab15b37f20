use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::style::SymbolStyle;
use crate::symbol::CalendarUnitSymbol;

/// Symbol request settings, usually read from a config file.
///
/// ```toml
/// style = "short"
/// standalone = false
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SymbolOptions {
    /// Requested abbreviation level
    pub style: SymbolStyle,
    /// Whether labels are shown on their own rather than inside a phrase
    pub standalone: bool,
}

impl Default for SymbolOptions {
    fn default() -> Self {
        Self {
            style: SymbolStyle::DEFAULT,
            standalone: true,
        }
    }
}

impl SymbolOptions {
    pub fn new(style: SymbolStyle, standalone: bool) -> Self {
        Self { style, standalone }
    }

    /// Parse options from a TOML table. Missing keys keep their defaults.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let options: SymbolOptions = toml::from_str(src)?;
        debug!(
            style = %options.style,
            standalone = options.standalone,
            "loaded symbol options"
        );
        Ok(options)
    }

    pub fn with_style(mut self, style: SymbolStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Resolve `unit`'s symbol with these options.
    pub fn symbol_for<U: CalendarUnitSymbol + ?Sized>(&self, unit: &U) -> String {
        unit.symbol_with(self.style, self.standalone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CalendarError;

    #[test]
    fn empty_table_uses_defaults() {
        let options = SymbolOptions::from_toml_str("").unwrap();
        assert_eq!(options, SymbolOptions::default());
        assert_eq!(options.style, SymbolStyle::DEFAULT);
        assert!(options.standalone);
    }

    #[test]
    fn reads_style_and_context() {
        let options = SymbolOptions::from_toml_str(
            r#"
style = "very-short"
standalone = false
"#,
        )
        .unwrap();
        assert_eq!(options, SymbolOptions::new(SymbolStyle::VeryShort, false));
    }

    #[test]
    fn unknown_style_is_a_config_error() {
        let err = SymbolOptions::from_toml_str(r#"style = "tiny""#).unwrap_err();
        assert!(matches!(err, CalendarError::Config(_)));
        assert!(err.to_string().contains("tiny"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = SymbolOptions::from_toml_str("verbose = true").unwrap_err();
        assert!(matches!(err, CalendarError::Config(_)));
    }

    #[test]
    fn builders_override_single_fields() {
        let options = SymbolOptions::default()
            .with_style(SymbolStyle::Short)
            .with_standalone(false);
        assert_eq!(options, SymbolOptions::new(SymbolStyle::Short, false));
    }
}
