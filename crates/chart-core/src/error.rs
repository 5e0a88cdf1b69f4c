// File: crates/chart-core/src/error.rs
// Summary: Error types shared by the bar model, data sources and view-model builder.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Why a single bar failed the OHLC invariants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BarError {
    #[error("price is not a finite number")]
    NonFinitePrice,
    #[error("prices must be positive")]
    NonPositivePrice,
    #[error("low above min(open,close)")]
    LowAboveBody,
    #[error("high below max(open,close)")]
    HighBelowBody,
}

#[derive(Debug, Error)]
pub enum ChartError {
    /// No bars to chart; nothing partial is produced.
    #[error("bar series is empty")]
    EmptySeries,

    #[error("bar {index} dated {date} does not come after {previous}; the source must sort and de-duplicate")]
    UnsortedOrDuplicateDates {
        index: usize,
        previous: NaiveDate,
        date: NaiveDate,
    },

    #[error("bar {index} is invalid")]
    InvalidBar {
        index: usize,
        #[source]
        source: BarError,
    },

    /// A source record could not be read as a bar (bad date, non-numeric field, ...).
    #[error("record {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("no bar source found at {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source file as a whole is not in the expected format.
    #[error("{}: {reason}", path.display())]
    Format { path: PathBuf, reason: String },
}
