//! Crispy CLI - print localized calendar unit symbols
//!
//! ```text
//! crispy weekdays --style short
//! crispy months --inline --catalog resource/symbols/fr.yaml
//! crispy styles
//! ```

mod catalog;
mod config;
mod units;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crispy_calendar::bridge::to_raw;
use crispy_calendar::{SymbolOptions, SymbolStyle};
use tracing_subscriber::EnvFilter;

use crate::catalog::SymbolCatalog;
use crate::config::CrispyConfig;
use crate::units::{Localized, Month, NamedUnit, Weekday};

/// Print localized calendar unit symbols
#[derive(Parser, Debug)]
#[command(name = "crispy")]
#[command(about = "Print localized calendar unit symbols")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Symbol style: normal, short or very-short
    #[arg(short, long, global = true)]
    style: Option<SymbolStyle>,

    /// Request inline (in-phrase) symbols instead of standalone ones
    #[arg(long, global = true, conflicts_with = "standalone")]
    inline: bool,

    /// Request standalone symbols, even if the config file asks for inline ones
    #[arg(long, global = true)]
    standalone: bool,

    /// Config file (defaults to ./crispy.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// YAML symbol catalog, overriding the config file
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the seven weekday symbols
    Weekdays,

    /// Print the twelve month symbols
    Months,

    /// List symbol styles with their native ordinals
    Styles,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CrispyConfig::load(cli.config.as_deref())?;
    let options = resolve_options(&cli, &config);
    tracing::debug!(?options, "resolved symbol options");

    let catalog_path = cli.catalog.as_deref().or(config.catalog.as_deref());
    let lines = match cli.command {
        Commands::Weekdays => unit_symbols::<Weekday>(&load_catalog(catalog_path)?, &options),
        Commands::Months => unit_symbols::<Month>(&load_catalog(catalog_path)?, &options),
        Commands::Styles => style_table(),
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// Command-line flags win over the config file.
fn resolve_options(cli: &Cli, config: &CrispyConfig) -> SymbolOptions {
    let mut options = config.symbols;
    if let Some(style) = cli.style {
        options = options.with_style(style);
    }
    if cli.inline {
        options = options.with_standalone(false);
    } else if cli.standalone {
        options = options.with_standalone(true);
    }
    options
}

fn load_catalog(path: Option<&Path>) -> Result<SymbolCatalog> {
    let Some(path) = path else {
        return Ok(SymbolCatalog::new());
    };
    let src = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let catalog = SymbolCatalog::parse(&src)
        .with_context(|| format!("Failed to parse catalog {}", path.display()))?;
    tracing::info!(path = %path.display(), entries = catalog.len(), "loaded symbol catalog");
    Ok(catalog)
}

fn unit_symbols<U: NamedUnit>(catalog: &SymbolCatalog, options: &SymbolOptions) -> Vec<String> {
    Localized::<U>::all(catalog)
        .iter()
        .map(|unit| options.symbol_for(unit))
        .collect()
}

fn style_table() -> Vec<String> {
    SymbolStyle::all()
        .iter()
        .map(|&style| {
            let marker = if style == SymbolStyle::DEFAULT {
                " (default)"
            } else {
                ""
            };
            format!("{:<10} {}{marker}", style.id(), to_raw(style).ordinal())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("crispy").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_override_config() {
        let config = CrispyConfig::from_toml_str("[symbols]\nstyle = \"short\"").unwrap();

        let options = resolve_options(&cli(&["weekdays"]), &config);
        assert_eq!(options, SymbolOptions::new(SymbolStyle::Short, true));

        let options = resolve_options(
            &cli(&["weekdays", "--style", "very-short", "--inline"]),
            &config,
        );
        assert_eq!(options, SymbolOptions::new(SymbolStyle::VeryShort, false));
    }

    #[test]
    fn standalone_flag_overrides_inline_config() {
        let config = CrispyConfig::from_toml_str("[symbols]\nstandalone = false").unwrap();

        let options = resolve_options(&cli(&["weekdays"]), &config);
        assert!(!options.standalone);

        let options = resolve_options(&cli(&["weekdays", "--standalone"]), &config);
        assert_eq!(options, SymbolOptions::new(SymbolStyle::DEFAULT, true));
    }

    #[test]
    fn inline_and_standalone_conflict() {
        let parsed = Cli::try_parse_from(["crispy", "weekdays", "--inline", "--standalone"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn rejects_unknown_style_flag() {
        let parsed = Cli::try_parse_from(["crispy", "months", "--style", "tiny"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn short_weekdays_without_catalog() {
        let options = SymbolOptions::default().with_style(SymbolStyle::Short);
        let lines = unit_symbols::<Weekday>(&SymbolCatalog::new(), &options);
        assert_eq!(lines, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }

    #[test]
    fn months_use_catalog_entries() {
        let catalog = SymbolCatalog::parse("month.january.normal.inline: \"janvier\"").unwrap();
        let options = SymbolOptions::default().with_standalone(false);
        let lines = unit_symbols::<Month>(&catalog, &options);
        assert_eq!(lines[0], "janvier");
        assert_eq!(lines[1], "February");
    }

    #[test]
    fn style_table_lists_native_ordinals() {
        assert_eq!(
            style_table(),
            vec!["normal     0 (default)", "short      1", "very-short 2"]
        );
    }
}
