// File: crates/chart-data/src/csv.rs
// Summary: CSV Bar Source: header row plus one bar per line; column order is free.

use std::io::Read;
use std::path::{Path, PathBuf};

use stockchart_core::{BarSeries, BarSource, ChartError, RangeTag, Symbol};
use tracing::info;

use crate::normalize::into_series;
use crate::record::RawBarRecord;
use crate::resolve::{read_source_file, source_file_name};

/// Reads `<dir>/<SYMBOL>_<range>.csv`.
pub struct CsvBarSource {
    dir: PathBuf,
}

impl CsvBarSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    pub fn path_for(&self, symbol: &Symbol, range: RangeTag) -> PathBuf {
        self.dir.join(source_file_name(symbol, range, "csv"))
    }
}

impl BarSource for CsvBarSource {
    fn id(&self) -> &'static str { "csv" }

    fn load(&self, symbol: &Symbol, range: RangeTag) -> Result<BarSeries, ChartError> {
        let path = self.path_for(symbol, range);
        let text = read_source_file(&path)?;
        let series = read_csv_bars(text.as_bytes(), &path)?;
        info!(path = %path.display(), bars = series.len(), "read csv bars");
        Ok(series)
    }
}

/// Headers are matched by name (`date`/`Date`, `open`/`Open`, ...); extra columns are ignored.
pub fn read_csv_bars<R: Read>(reader: R, origin: &Path) -> Result<BarSeries, ChartError> {
    let mut rdr = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(::csv::Trim::All)
        .from_reader(reader);

    rdr.headers().map_err(|e| ChartError::Format {
        path: origin.to_path_buf(),
        reason: format!("unreadable header row: {e}"),
    })?;

    let bars = rdr
        .deserialize::<RawBarRecord>()
        .enumerate()
        .map(|(index, rec)| {
            rec.map_err(|e| ChartError::MalformedRecord { index, reason: e.to_string() })?
                .into_bar(index)
        })
        .collect::<Result<Vec<_>, _>>()?;
    into_series(bars)
}
