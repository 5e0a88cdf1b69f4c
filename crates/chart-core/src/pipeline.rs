// File: crates/chart-core/src/pipeline.rs
// Summary: Bar Source -> Bar Series -> indicators -> view model, for one validated config.

use tracing::info;

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::source::BarSource;
use crate::view_model::ChartViewModel;

/// Load the configured symbol/range from `source` and build its chart.
pub fn build_chart(source: &dyn BarSource, config: &ChartConfig) -> Result<ChartViewModel, ChartError> {
    let series = source.load(&config.symbol, config.range)?;
    info!(
        source = source.id(),
        symbol = %config.symbol,
        range = %config.range,
        bars = series.len(),
        first = ?series.first_date(),
        last = ?series.last_date(),
        "loaded bar series"
    );
    ChartViewModel::build(&series, config.overlays, config.title())
}
