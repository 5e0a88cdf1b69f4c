// File: crates/chart-data/src/resolve.rs
// Summary: Source file naming and lookup (prefers .json, falls back to .csv).

use std::io::ErrorKind;
use std::path::Path;

use stockchart_core::{BarSource, ChartError, RangeTag, Symbol};
use tracing::debug;

use crate::csv::CsvBarSource;
use crate::json::JsonBarSource;

/// `AMZN_6m.json`
pub fn source_file_name(symbol: &Symbol, range: RangeTag, ext: &str) -> String {
    format!("{}_{}.{}", symbol, range, ext)
}

/// Pick the source whose file exists in `dir` for this symbol and range.
pub fn resolve_source(dir: &Path, symbol: &Symbol, range: RangeTag) -> Result<Box<dyn BarSource>, ChartError> {
    let json = JsonBarSource::new(dir);
    let json_path = json.path_for(symbol, range);
    if json_path.is_file() {
        debug!(path = %json_path.display(), "using json source");
        return Ok(Box::new(json));
    }
    let csv = CsvBarSource::new(dir);
    let csv_path = csv.path_for(symbol, range);
    if csv_path.is_file() {
        debug!(path = %csv_path.display(), "using csv source (no json file)");
        return Ok(Box::new(csv));
    }
    Err(ChartError::SourceNotFound { path: json_path })
}

pub(crate) fn read_source_file(path: &Path) -> Result<String, ChartError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ChartError::SourceNotFound { path: path.to_path_buf() },
        _ => ChartError::Io { path: path.to_path_buf(), source },
    })
}
