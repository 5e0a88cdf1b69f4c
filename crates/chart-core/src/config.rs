// File: crates/chart-core/src/config.rs
// Summary: Validated chart request: symbol, lookback range tag and overlay selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::overlay::OverlaySet;

/// Upper-cased ticker, e.g. `AMZN` or `BRK.B`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn parse(raw: &str) -> Result<Self, ChartError> {
        let s = raw.trim().to_ascii_uppercase();
        if s.is_empty() {
            return Err(ChartError::Config("symbol is empty".into()));
        }
        if let Some(bad) = s.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '.' || *c == '-')) {
            return Err(ChartError::Config(format!("symbol {raw:?} contains {bad:?}")));
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str { &self.0 }

    /// Range the reference data set ships for this symbol, if any.
    pub fn reference_range(&self) -> Option<RangeTag> {
        match self.0.as_str() {
            "AMZN" => Some(RangeTag::SixMonths),
            "GT" => Some(RangeTag::ThreeMonths),
            "EBAY" => Some(RangeTag::OneYear),
            _ => None,
        }
    }
}

impl TryFrom<String> for Symbol {
    type Error = ChartError;
    fn try_from(s: String) -> Result<Self, Self::Error> { Symbol::parse(&s) }
}

impl From<Symbol> for String {
    fn from(s: Symbol) -> Self { s.0 }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

/// Lookback tag. Only picks which source file to load; indicator math ignores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeTag {
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "ytd")]
    YearToDate,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
    #[serde(rename = "5y")]
    FiveYears,
}

impl RangeTag {
    pub const ALL: [RangeTag; 7] = [
        RangeTag::OneMonth,
        RangeTag::ThreeMonths,
        RangeTag::SixMonths,
        RangeTag::YearToDate,
        RangeTag::OneYear,
        RangeTag::TwoYears,
        RangeTag::FiveYears,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RangeTag::OneMonth => "1m",
            RangeTag::ThreeMonths => "3m",
            RangeTag::SixMonths => "6m",
            RangeTag::YearToDate => "ytd",
            RangeTag::OneYear => "1y",
            RangeTag::TwoYears => "2y",
            RangeTag::FiveYears => "5y",
        }
    }
}

impl FromStr for RangeTag {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        RangeTag::ALL
            .into_iter()
            .find(|r| r.as_str() == wanted)
            .ok_or_else(|| ChartError::Config(format!("unknown range {s:?} (expected one of 1m, 3m, 6m, ytd, 1y, 2y, 5y)")))
    }
}

impl fmt::Display for RangeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Everything the pipeline needs to produce one chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub symbol: Symbol,
    pub range: RangeTag,
    #[serde(default)]
    pub overlays: OverlaySet,
}

impl ChartConfig {
    pub fn new(symbol: Symbol, range: RangeTag, overlays: OverlaySet) -> Self {
        Self { symbol, range, overlays }
    }

    /// `AMZN (6m)`
    pub fn title(&self) -> String { format!("{} ({})", self.symbol, self.range) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_is_normalised_and_checked() {
        assert_eq!(Symbol::parse(" amzn ").unwrap().as_str(), "AMZN");
        assert_eq!(Symbol::parse("brk.b").unwrap().as_str(), "BRK.B");
        assert!(Symbol::parse("").is_err());
        assert!(Symbol::parse("AM ZN").is_err());
        assert!(Symbol::parse("../etc").is_err());
    }

    #[test]
    fn reference_ranges() {
        assert_eq!(Symbol::parse("amzn").unwrap().reference_range(), Some(RangeTag::SixMonths));
        assert_eq!(Symbol::parse("GT").unwrap().reference_range(), Some(RangeTag::ThreeMonths));
        assert_eq!(Symbol::parse("ebay").unwrap().reference_range(), Some(RangeTag::OneYear));
        assert_eq!(Symbol::parse("MSFT").unwrap().reference_range(), None);
    }

    #[test]
    fn range_tag_parses_case_insensitively() {
        assert_eq!("6M".parse::<RangeTag>().unwrap(), RangeTag::SixMonths);
        assert_eq!("ytd".parse::<RangeTag>().unwrap(), RangeTag::YearToDate);
        assert!("6 months".parse::<RangeTag>().is_err());
        for r in RangeTag::ALL {
            assert_eq!(r.as_str().parse::<RangeTag>().unwrap(), r);
        }
    }

    #[test]
    fn title_combines_symbol_and_range() {
        let cfg = ChartConfig::new(Symbol::parse("gt").unwrap(), RangeTag::ThreeMonths, OverlaySet::default());
        assert_eq!(cfg.title(), "GT (3m)");
    }
}
