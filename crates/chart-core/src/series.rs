// File: crates/chart-core/src/series.rs
// Summary: Bar and BarSeries model; OHLC invariants and the contiguous display index.
// Notes:
// - A BarSeries is immutable once built. Every derived structure is a pure
//   function of it, so nothing downstream re-validates ordering.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{BarError, ChartError};

/// One trading day of OHLCV data.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Bar {
    /// Try to construct a bar enforcing OHLC invariants:
    /// prices finite and positive, l <= min(o,c) and h >= max(o,c).
    pub fn try_new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Result<Self, BarError> {
        let prices = [open, high, low, close];
        if prices.iter().any(|p| !p.is_finite()) { return Err(BarError::NonFinitePrice); }
        if prices.iter().any(|&p| p <= 0.0) { return Err(BarError::NonPositivePrice); }
        if low > open.min(close) { return Err(BarError::LowAboveBody); }
        if high < open.max(close) { return Err(BarError::HighBelowBody); }
        Ok(Self { date, open, high, low, close, volume })
    }
}

/// Bars strictly increasing by date. A bar's position is its display index,
/// so weekends and holidays leave no gap on the x-axis.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BarSeries {
    bars: Vec<Bar>,
}

impl BarSeries {
    /// Wrap already-sorted bars. Sorting is the source's job; a bar that does not
    /// come strictly after its predecessor is reported, never reordered.
    pub fn new(bars: Vec<Bar>) -> Result<Self, ChartError> {
        if let Some(i) = bars.windows(2).position(|w| w[1].date <= w[0].date) {
            return Err(ChartError::UnsortedOrDuplicateDates {
                index: i + 1,
                previous: bars[i].date,
                date: bars[i + 1].date,
            });
        }
        Ok(Self { bars })
    }

    pub fn len(&self) -> usize { self.bars.len() }

    pub fn is_empty(&self) -> bool { self.bars.is_empty() }

    pub fn bars(&self) -> &[Bar] { &self.bars }

    /// Bar at a display index.
    pub fn get(&self, display_index: usize) -> Option<&Bar> { self.bars.get(display_index) }

    /// `(display_index, bar)` pairs in order.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, &Bar)> + '_ {
        self.bars.iter().enumerate()
    }

    pub fn closes(&self) -> Vec<f64> { self.bars.iter().map(|b| b.close).collect() }

    pub fn first_date(&self) -> Option<NaiveDate> { self.bars.first().map(|b| b.date) }

    pub fn last_date(&self) -> Option<NaiveDate> { self.bars.last().map(|b| b.date) }
}
