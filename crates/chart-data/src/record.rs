// File: crates/chart-data/src/record.rs
// Summary: One raw OHLCV record as it appears in a source file, and its conversion to a Bar.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use stockchart_core::{Bar, ChartError};

/// Fields a record must carry. Anything else in the record is ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawBarRecord {
    #[serde(alias = "Date")]
    pub date: String,
    #[serde(alias = "Open")]
    pub open: f64,
    #[serde(alias = "High")]
    pub high: f64,
    #[serde(alias = "Low")]
    pub low: f64,
    #[serde(alias = "Close")]
    pub close: f64,
    #[serde(alias = "Volume")]
    pub volume: f64,
}

/// Accepts `2019-01-02`, `2019-01-02 16:00:00`, `2019-01-02T16:00:00` and RFC 3339;
/// only the calendar date is kept.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

impl RawBarRecord {
    /// `index` is the record's position in the file, used for error reporting.
    pub fn into_bar(self, index: usize) -> Result<Bar, ChartError> {
        let date = parse_date(&self.date).ok_or_else(|| ChartError::MalformedRecord {
            index,
            reason: format!("unparseable date {:?}", self.date),
        })?;
        if !self.volume.is_finite() || self.volume < 0.0 || self.volume.fract() != 0.0 {
            return Err(ChartError::MalformedRecord {
                index,
                reason: format!("volume {} is not a non-negative whole number", self.volume),
            });
        }
        // `u64::MAX as f64` rounds up to 2^64, itself out of range.
        if self.volume >= u64::MAX as f64 {
            return Err(ChartError::MalformedRecord {
                index,
                reason: format!("volume {} does not fit in 64 bits", self.volume),
            });
        }
        Bar::try_new(date, self.open, self.high, self.low, self.close, self.volume as u64)
            .map_err(|source| ChartError::InvalidBar { index, source })
    }
}
