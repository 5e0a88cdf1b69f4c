// File: crates/chart-data/src/json.rs
// Summary: JSON Bar Source: an array of daily records as dumped from a market-data API.

use std::path::{Path, PathBuf};

use stockchart_core::{BarSeries, BarSource, ChartError, RangeTag, Symbol};
use tracing::info;

use crate::normalize::into_series;
use crate::record::RawBarRecord;
use crate::resolve::{read_source_file, source_file_name};

/// Reads `<dir>/<SYMBOL>_<range>.json`.
pub struct JsonBarSource {
    dir: PathBuf,
}

impl JsonBarSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    pub fn path_for(&self, symbol: &Symbol, range: RangeTag) -> PathBuf {
        self.dir.join(source_file_name(symbol, range, "json"))
    }
}

impl BarSource for JsonBarSource {
    fn id(&self) -> &'static str { "json" }

    fn load(&self, symbol: &Symbol, range: RangeTag) -> Result<BarSeries, ChartError> {
        let path = self.path_for(symbol, range);
        let text = read_source_file(&path)?;
        let series = read_json_bars(&text, &path)?;
        info!(path = %path.display(), bars = series.len(), "read json bars");
        Ok(series)
    }
}

/// Parse a JSON array of records. Each element is converted on its own so a
/// bad record is reported with its position; any bad record fails the load.
pub fn read_json_bars(text: &str, origin: &Path) -> Result<BarSeries, ChartError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(text).map_err(|e| ChartError::Format {
        path: origin.to_path_buf(),
        reason: format!("expected a JSON array of bar records: {e}"),
    })?;
    let bars = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value::<RawBarRecord>(value)
                .map_err(|e| ChartError::MalformedRecord { index, reason: e.to_string() })?
                .into_bar(index)
        })
        .collect::<Result<Vec<_>, _>>()?;
    into_series(bars)
}
