// File: crates/chart-core/src/view_model.rs
// Summary: Chart view model: everything a renderer needs, precomputed from a BarSeries and overlay selection.

use serde::Serialize;
use tracing::debug;

use crate::axis::{build_axis_bounds, build_axis_labels, price_range, AxisBounds, AxisLabels, ValueRange};
use crate::error::ChartError;
use crate::indicator::{derive_bars, DerivedBar};
use crate::overlay::{overlay_lines, OverlayLine, OverlaySet};
use crate::series::{Bar, BarSeries};
use crate::theme::Palette;
use crate::tooltip::{build_tooltip_spec, TooltipSpec, ValueFormat};
use crate::types::ChartLayout;

/// Candle colouring. There is no neutral state: an unchanged bar is `Up`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

pub fn classify_direction(bar: &Bar) -> Direction {
    if bar.close >= bar.open { Direction::Up } else { Direction::Down }
}

/// Renderer-agnostic description of one chart.
///
/// Indicators, directions, labels and overlay polylines are all resolved here;
/// a renderer only maps them to pixels.
#[derive(Clone, Debug, Serialize)]
pub struct ChartViewModel {
    pub title: String,
    pub bars: Vec<DerivedBar>,
    pub axis_labels: AxisLabels,
    pub axis_bounds: AxisBounds,
    pub price_range: ValueRange,
    pub overlays: OverlaySet,
    pub lines: Vec<OverlayLine>,
    pub tooltip: TooltipSpec,
    pub price_axis_format: ValueFormat,
    pub layout: ChartLayout,
    pub palette: Palette,
}

impl ChartViewModel {
    pub fn build(series: &BarSeries, overlays: OverlaySet, title: impl Into<String>) -> Result<Self, ChartError> {
        let axis_bounds = build_axis_bounds(series)?;
        let bars = derive_bars(series);
        let palette = Palette::default();
        let lines = overlay_lines(&bars, overlays, &palette);
        let model = Self {
            title: title.into(),
            price_range: price_range(&bars, &lines),
            axis_labels: build_axis_labels(series),
            axis_bounds,
            bars,
            overlays,
            lines,
            tooltip: build_tooltip_spec(),
            price_axis_format: ValueFormat::PRICE_AXIS,
            layout: ChartLayout::default(),
            palette,
        };
        debug!(
            title = %model.title,
            bars = model.bars.len(),
            lines = model.lines.len(),
            "built chart view model"
        );
        Ok(model)
    }

    /// Swap the overlay selection. Derived bars are reused; only lines and the
    /// price range depend on the selection.
    pub fn with_overlays(mut self, overlays: OverlaySet) -> Self {
        self.lines = overlay_lines(&self.bars, overlays, &self.palette);
        self.price_range = price_range(&self.bars, &self.lines);
        self.overlays = overlays;
        self
    }

    pub fn directions(&self) -> Vec<Direction> { self.bars.iter().map(|b| b.direction).collect() }

    pub fn len(&self) -> usize { self.bars.len() }

    /// True when the model holds no bars.
    pub fn is_empty(&self) -> bool { self.bars.is_empty() }
}
