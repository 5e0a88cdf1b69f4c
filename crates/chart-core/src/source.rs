// File: crates/chart-core/src/source.rs
// Summary: Bar Source seam: anything that can turn (symbol, range) into a validated BarSeries.

use crate::config::{RangeTag, Symbol};
use crate::error::ChartError;
use crate::series::BarSeries;

/// Supplies raw bars. Implementations own parsing, sorting and de-duplication;
/// the series they return must already satisfy the ordering invariant.
pub trait BarSource {
    fn id(&self) -> &'static str;
    fn load(&self, symbol: &Symbol, range: RangeTag) -> Result<BarSeries, ChartError>;
}

/// In-memory source, handy for tests and for callers that already hold bars.
pub struct StaticSource {
    series: BarSeries,
}

impl StaticSource {
    pub fn new(series: BarSeries) -> Self { Self { series } }
}

impl BarSource for StaticSource {
    fn id(&self) -> &'static str { "static" }

    fn load(&self, _symbol: &Symbol, _range: RangeTag) -> Result<BarSeries, ChartError> {
        Ok(self.series.clone())
    }
}
