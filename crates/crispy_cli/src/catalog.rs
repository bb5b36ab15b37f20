//! YAML symbol catalogs
//!
//! A catalog is a flat mapping from symbol keys to display strings:
//!
//! ```yaml
//! weekday.monday.normal: "lundi"
//! weekday.monday.short: "lun."
//! month.may.normal.inline: "mai"
//! ```
//!
//! Keys are `<unit>.<name>.<style>` for standalone labels, with an `.inline` suffix
//! for labels embedded in a phrase.

use std::collections::HashMap;

use crispy_calendar::SymbolStyle;
use thiserror::Error;

const MAX_CATALOG_ENTRIES: usize = 4_096;
const MAX_KEY_BYTES: usize = 128;
const MAX_VALUE_BYTES: usize = 1024;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("yaml parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("catalog must be a yaml mapping of keys to strings")]
    NotAMapping,

    #[error("too many entries (max {})", MAX_CATALOG_ENTRIES)]
    TooManyEntries,

    #[error(
        "invalid key `{}` (allowed: [a-z0-9][a-z0-9_.-]*, up to {} bytes)",
        .0,
        MAX_KEY_BYTES
    )]
    InvalidKey(String),

    #[error(
        "value for key `{}` must be a non-empty string of at most {} bytes",
        .0,
        MAX_VALUE_BYTES
    )]
    InvalidValue(String),
}

fn is_valid_key(key: &str) -> bool {
    if key.len() > MAX_KEY_BYTES {
        return false;
    }
    let mut it = key.chars();
    match it.next() {
        Some(c) if c.is_ascii_lowercase() || c.is_ascii_digit() => {}
        _ => return false,
    }
    it.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '.' | '-'))
}

/// Build the catalog key for a unit symbol.
pub fn symbol_key(unit: &str, name: &str, style: SymbolStyle, standalone: bool) -> String {
    if standalone {
        format!("{unit}.{name}.{style}")
    } else {
        format!("{unit}.{name}.{style}.inline")
    }
}

#[derive(Clone, Debug, Default)]
pub struct SymbolCatalog {
    entries: HashMap<String, String>,
}

impl SymbolCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up the symbol for one unit, style and context.
    pub fn lookup(
        &self,
        unit: &str,
        name: &str,
        style: SymbolStyle,
        standalone: bool,
    ) -> Option<&str> {
        self.get(&symbol_key(unit, name, style, standalone))
    }

    pub fn parse(src: &str) -> Result<Self, CatalogError> {
        let raw = match serde_yaml::from_str::<serde_yaml::Value>(src)? {
            serde_yaml::Value::Mapping(raw) => raw,
            // An empty document is an empty catalog.
            serde_yaml::Value::Null => return Ok(Self::new()),
            _ => return Err(CatalogError::NotAMapping),
        };
        if raw.len() > MAX_CATALOG_ENTRIES {
            return Err(CatalogError::TooManyEntries);
        }

        let mut cat = Self::new();
        for (k, v) in raw {
            let Some(key) = k.as_str() else {
                return Err(CatalogError::NotAMapping);
            };
            if !is_valid_key(key) {
                return Err(CatalogError::InvalidKey(key.to_string()));
            }
            match v.as_str() {
                Some(val) if !val.is_empty() && val.len() <= MAX_VALUE_BYTES => {
                    cat.insert(key, val);
                }
                _ => return Err(CatalogError::InvalidValue(key.to_string())),
            }
        }
        Ok(cat)
    }
}
