// File: crates/chart-core/src/indicator.rs
// Summary: Indicator engine: rolling SMA, rolling sample std-dev, Bollinger bands, volume scaling.
// Notes:
// - Undefined values (not enough history) are `None`, never NaN.
// - Every window is trailing: index i only ever reads bars 0..=i.

use serde::Serialize;
use tracing::debug;

use crate::series::{Bar, BarSeries};
use crate::view_model::{classify_direction, Direction};

/// Short moving-average window; also the Bollinger period.
pub const SMA_SHORT: usize = 20;
/// Long moving-average window.
pub const SMA_LONG: usize = 50;
/// Volume bars are scaled to at most this fraction of the highest high.
pub const VOLUME_HEIGHT_FRACTION: f64 = 1.0 / 6.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BollingerParams {
    pub period: usize,
    pub num_std: f64,
}

impl Default for BollingerParams {
    fn default() -> Self { Self { period: SMA_SHORT, num_std: 2.0 } }
}

/// Upper and lower envelopes; `upper[i]`/`lower[i]` are undefined together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BollingerBands {
    pub upper: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Mean and spread of one trailing window, accumulated as offsets from the
/// window's own first value. A flat window therefore has a mean equal to that
/// value and a variance of exactly zero, however long the preceding series is.
struct WindowStats<'a> {
    values: &'a [f64],
    mean: f64,
}

impl<'a> WindowStats<'a> {
    /// `values` must be non-empty.
    fn new(values: &'a [f64]) -> Self {
        let anchor = values[0];
        let offset = values.iter().map(|v| v - anchor).sum::<f64>() / values.len() as f64;
        Self { values, mean: anchor + offset }
    }

    fn len(&self) -> usize { self.values.len() }

    /// Unbiased (n-1) variance, two-pass around the mean.
    fn sample_variance(&self) -> Option<f64> {
        if self.len() < 2 { return None; }
        let ss: f64 = self.values.iter().map(|v| (v - self.mean) * (v - self.mean)).sum();
        Some(ss / (self.len() - 1) as f64)
    }
}

/// Bars `i + 1 - window ..= i`, or from 0 while the history is shorter.
fn trailing(values: &[f64], i: usize, window: usize) -> &[f64] {
    &values[(i + 1).saturating_sub(window)..=i]
}

/// Plain (unweighted) moving average of `close`. `None` while `i + 1 < window`.
pub fn simple_moving_average(series: &BarSeries, window: usize) -> Vec<Option<f64>> {
    let closes = series.closes();
    if window == 0 { return vec![None; closes.len()]; }
    (0..closes.len())
        .map(|i| (i + 1 >= window).then(|| WindowStats::new(trailing(&closes, i, window)).mean))
        .collect()
}

/// Rolling sample standard deviation of `close`.
///
/// The trailing window holds `min(i + 1, window)` bars; the value is defined once
/// it holds at least `min_periods` of them (clamped to `window`) and at least two.
pub fn rolling_std_dev(series: &BarSeries, window: usize, min_periods: usize) -> Vec<Option<f64>> {
    let closes = series.closes();
    if window == 0 { return vec![None; closes.len()]; }
    let min_periods = min_periods.clamp(1, window);
    (0..closes.len())
        .map(|i| {
            let stats = WindowStats::new(trailing(&closes, i, window));
            if stats.len() < min_periods { return None; }
            stats.sample_variance().map(f64::sqrt)
        })
        .collect()
}

/// SMA20 ± 2σ over the same 20 bars.
pub fn bollinger_bands(series: &BarSeries) -> BollingerBands {
    bollinger_bands_with(series, BollingerParams::default())
}

pub fn bollinger_bands_with(series: &BarSeries, params: BollingerParams) -> BollingerBands {
    let mid = simple_moving_average(series, params.period);
    let sd = rolling_std_dev(series, params.period, params.period);
    bands_from(&mid, &sd, params.num_std)
}

fn bands_from(mid: &[Option<f64>], sd: &[Option<f64>], num_std: f64) -> BollingerBands {
    let (upper, lower) = mid
        .iter()
        .zip(sd)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => (Some(m + num_std * s), Some(m - num_std * s)),
            _ => (None, None),
        })
        .unzip();
    BollingerBands { upper, lower }
}

/// Display-scale volume: `volume / max(volume) * max(high) / 6`, maxima over the
/// whole series. All-zero volume maps to all zeros.
pub fn volume_height(series: &BarSeries) -> Vec<f64> {
    let bars = series.bars();
    let max_volume = bars.iter().map(|b| b.volume).max().unwrap_or(0);
    if max_volume == 0 { return vec![0.0; bars.len()]; }
    let max_high = bars.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
    let scale = max_high * VOLUME_HEIGHT_FRACTION;
    bars.iter().map(|b| b.volume as f64 / max_volume as f64 * scale).collect()
}

/// A bar with every indicator value attached.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DerivedBar {
    pub display_index: usize,
    #[serde(flatten)]
    pub bar: Bar,
    pub direction: Direction,
    pub volume_height: f64,
    pub sma20: Option<f64>,
    pub sma50: Option<f64>,
    pub std_dev20: Option<f64>,
    pub bollinger_upper: Option<f64>,
    pub bollinger_lower: Option<f64>,
}

/// Compute all indicators in one pass over the series and zip them with the bars.
pub fn derive_bars(series: &BarSeries) -> Vec<DerivedBar> {
    let sma20 = simple_moving_average(series, SMA_SHORT);
    let sma50 = simple_moving_average(series, SMA_LONG);
    let sd20 = rolling_std_dev(series, SMA_SHORT, SMA_SHORT);
    let bands = bands_from(&sma20, &sd20, BollingerParams::default().num_std);
    let vol = volume_height(series);
    debug!(
        bars = series.len(),
        sma20_defined = sma20.iter().flatten().count(),
        sma50_defined = sma50.iter().flatten().count(),
        "derived indicators"
    );

    series
        .iter_indexed()
        .map(|(i, bar)| DerivedBar {
            display_index: i,
            bar: *bar,
            direction: classify_direction(bar),
            volume_height: vol[i],
            sma20: sma20[i],
            sma50: sma50[i],
            std_dev20: sd20[i],
            bollinger_upper: bands.upper[i],
            bollinger_lower: bands.lower[i],
        })
        .collect()
}
