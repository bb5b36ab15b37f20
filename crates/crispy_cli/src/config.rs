//! Crispy configuration file handling

use anyhow::{Context, Result};
use crispy_calendar::SymbolOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "crispy.toml";

/// Top-level Crispy configuration (crispy.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CrispyConfig {
    /// How symbols are requested
    #[serde(default)]
    pub symbols: SymbolOptions,
    /// YAML symbol catalog, relative to the config file
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl CrispyConfig {
    /// Load an explicit config file, or `crispy.toml` from the working directory if
    /// it exists, or the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::load_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        // Catalog paths are relative to the file that names them.
        if let (Some(catalog), Some(dir)) = (config.catalog.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(src: &str) -> Result<Self> {
        toml::from_str(src).context("Invalid crispy config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crispy_calendar::SymbolStyle;

    #[test]
    fn empty_config_is_default() {
        let config = CrispyConfig::from_toml_str("").unwrap();
        assert_eq!(config.symbols, SymbolOptions::default());
        assert!(config.catalog.is_none());
    }

    #[test]
    fn reads_symbols_table_and_catalog() {
        let config = CrispyConfig::from_toml_str(
            r#"
catalog = "symbols.fr.yaml"

[symbols]
style = "short"
standalone = false
"#,
        )
        .unwrap();
        assert_eq!(
            config.symbols,
            SymbolOptions::new(SymbolStyle::Short, false)
        );
        assert_eq!(config.catalog, Some(PathBuf::from("symbols.fr.yaml")));
    }

    #[test]
    fn rejects_unknown_style() {
        assert!(CrispyConfig::from_toml_str("[symbols]\nstyle = \"huge\"").is_err());
    }
}
