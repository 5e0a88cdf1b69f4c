// File: crates/demo/src/settings.rs
// Summary: Boundary layer: CLI flags and an optional TOML file, validated into a ChartConfig.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use stockchart_core::{select_overlays, ChartConfig, OverlayFlags, RangeTag, Symbol};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Serialized view model, for a front-end renderer.
    #[default]
    Json,
    /// Human-readable digest on stdout.
    Summary,
}

#[derive(Debug, Default, Parser)]
#[command(version, about = "Build a candlestick chart view model from daily OHLCV bars")]
pub struct Cli {
    /// TOML settings file; flags given here override it.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Ticker, e.g. AMZN, GT or EBAY.
    #[arg(long)]
    pub symbol: Option<String>,
    /// Lookback tag (1m, 3m, 6m, ytd, 1y, 2y, 5y). Defaults to the symbol's reference range.
    #[arg(long)]
    pub range: Option<String>,
    /// Directory holding `<SYMBOL>_<range>.json` or `.csv`.
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
    /// Draw the 50-period moving average.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub sma50: Option<bool>,
    /// Draw Bollinger bands instead of the plain 20-period moving average.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub bollinger: Option<bool>,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Output file for the json format.
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Settings file shape. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub symbol: Option<String>,
    pub range: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub show_sma50: Option<bool>,
    pub show_bollinger: Option<bool>,
    pub format: Option<OutputFormat>,
    pub out: Option<PathBuf>,
}

impl FileSettings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }
}

/// Validated settings for one run.
#[derive(Debug)]
pub struct Settings {
    pub chart: ChartConfig,
    pub data_dir: PathBuf,
    pub format: OutputFormat,
    pub out: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(cli: Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileSettings::load(path)?,
            None => FileSettings::default(),
        };
        Self::merge(cli, file)
    }

    /// CLI values win over file values.
    pub fn merge(cli: Cli, file: FileSettings) -> Result<Self> {
        let Some(raw_symbol) = cli.symbol.or(file.symbol) else {
            bail!("no symbol given; pass --symbol or set `symbol` in the settings file");
        };
        let symbol = Symbol::parse(&raw_symbol)?;

        let range = match cli.range.or(file.range) {
            Some(raw) => raw.parse::<RangeTag>()?,
            None => match symbol.reference_range() {
                Some(r) => r,
                None => bail!("no range given and {symbol} has no default; pass --range"),
            },
        };

        let overlays = select_overlays(OverlayFlags {
            show_sma50: cli.sma50.or(file.show_sma50).unwrap_or(false),
            show_bollinger: cli.bollinger.or(file.show_bollinger).unwrap_or(false),
        });

        Ok(Self {
            chart: ChartConfig::new(symbol, range, overlays),
            data_dir: cli.data_dir.or(file.data_dir).unwrap_or_else(|| PathBuf::from(".")),
            format: cli.format.or(file.format).unwrap_or_default(),
            out: cli.out.or(file.out),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockchart_core::PriceOverlay;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("stockchart").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn reference_symbol_gets_default_range() {
        let s = Settings::merge(cli(&["--symbol", "gt"]), FileSettings::default()).unwrap();
        assert_eq!(s.chart.symbol.as_str(), "GT");
        assert_eq!(s.chart.range, RangeTag::ThreeMonths);
        assert_eq!(s.chart.overlays.price, PriceOverlay::Sma20);
        assert!(!s.chart.overlays.sma50);
        assert_eq!(s.format, OutputFormat::Json);
    }

    #[test]
    fn unknown_symbol_needs_a_range() {
        assert!(Settings::merge(cli(&["--symbol", "MSFT"]), FileSettings::default()).is_err());
        let s = Settings::merge(cli(&["--symbol", "MSFT", "--range", "1Y"]), FileSettings::default()).unwrap();
        assert_eq!(s.chart.range, RangeTag::OneYear);
    }

    #[test]
    fn invalid_input_is_rejected_at_the_boundary() {
        assert!(Settings::merge(cli(&[]), FileSettings::default()).is_err());
        assert!(Settings::merge(cli(&["--symbol", "AM ZN"]), FileSettings::default()).is_err());
        assert!(Settings::merge(cli(&["--symbol", "AMZN", "--range", "6 months"]), FileSettings::default()).is_err());
    }

    #[test]
    fn flags_select_overlays() {
        let s = Settings::merge(cli(&["--symbol", "ebay", "--sma50", "--bollinger"]), FileSettings::default()).unwrap();
        assert_eq!(s.chart.overlays.price, PriceOverlay::BollingerBands);
        assert!(s.chart.overlays.sma50);
    }

    #[test]
    fn cli_overrides_file() {
        let file: FileSettings = toml::from_str(
            r#"
            symbol = "AMZN"
            range = "1y"
            data_dir = "data"
            show_sma50 = true
            show_bollinger = true
            format = "summary"
            "#,
        )
        .unwrap();
        let s = Settings::merge(cli(&["--range", "6m", "--bollinger", "false"]), file).unwrap();
        assert_eq!(s.chart.symbol.as_str(), "AMZN");
        assert_eq!(s.chart.range, RangeTag::SixMonths);
        assert_eq!(s.chart.overlays.price, PriceOverlay::Sma20);
        assert!(s.chart.overlays.sma50);
        assert_eq!(s.data_dir, PathBuf::from("data"));
        assert_eq!(s.format, OutputFormat::Summary);
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        assert!(toml::from_str::<FileSettings>("symbol = \"GT\"\ncolour = \"red\"").is_err());
    }
}
