// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; bar model, indicator engine and chart view-model construction.

pub mod axis;
pub mod config;
pub mod error;
pub mod indicator;
pub mod overlay;
pub mod pipeline;
pub mod render;
pub mod series;
pub mod source;
pub mod theme;
pub mod tooltip;
pub mod types;
pub mod view_model;

pub use axis::{build_axis_bounds, build_axis_labels, AxisBounds, AxisLabels};
pub use config::{ChartConfig, RangeTag, Symbol};
pub use error::{BarError, ChartError};
pub use indicator::{
    bollinger_bands, bollinger_bands_with, derive_bars, rolling_std_dev, simple_moving_average, volume_height,
    BollingerBands, BollingerParams, DerivedBar,
};
pub use overlay::{select_overlays, Overlay, OverlayFlags, OverlayLine, OverlaySet, PriceOverlay};
pub use pipeline::build_chart;
pub use render::ChartRenderer;
pub use series::{Bar, BarSeries};
pub use source::{BarSource, StaticSource};
pub use theme::Palette;
pub use tooltip::{build_tooltip_spec, TooltipSpec, ValueFormat};
pub use view_model::{classify_direction, ChartViewModel, Direction};
