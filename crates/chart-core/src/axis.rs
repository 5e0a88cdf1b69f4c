// File: crates/chart-core/src/axis.rs
// Summary: X-axis label overrides and bounds keyed by display index; price (Y) range.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::ChartError;
use crate::indicator::DerivedBar;
use crate::overlay::OverlayLine;
use crate::series::BarSeries;

/// Abbreviated month and zero-padded day, e.g. "Jan 05".
pub const AXIS_LABEL_FORMAT: &str = "%b %d";

/// Display index -> tick label.
pub type AxisLabels = BTreeMap<usize, String>;

/// Inclusive display-index range with data; pan/zoom is clipped to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AxisBounds {
    pub first: usize,
    pub last: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

pub fn build_axis_labels(series: &BarSeries) -> AxisLabels {
    series
        .iter_indexed()
        .map(|(i, bar)| (i, bar.date.format(AXIS_LABEL_FORMAT).to_string()))
        .collect()
}

pub fn build_axis_bounds(series: &BarSeries) -> Result<AxisBounds, ChartError> {
    if series.is_empty() { return Err(ChartError::EmptySeries); }
    Ok(AxisBounds { first: 0, last: series.len() - 1 })
}

/// Lowest low to highest high, widened by any visible overlay line, plus a 2% margin.
pub fn price_range(bars: &[DerivedBar], lines: &[OverlayLine]) -> ValueRange {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for b in bars {
        y_min = y_min.min(b.bar.low);
        y_max = y_max.max(b.bar.high);
    }
    for &(_, y) in lines.iter().flat_map(|l| &l.points) {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        return ValueRange { min: 0.0, max: 1.0 };
    }
    if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
    let m = (y_max - y_min) * 0.02;
    ValueRange { min: y_min - m, max: y_max + m }
}
