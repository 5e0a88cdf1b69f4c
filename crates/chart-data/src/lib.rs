// File: crates/chart-data/src/lib.rs
// Summary: File-backed Bar Sources: JSON dumps and CSV exports named `<SYMBOL>_<range>.<ext>`.

pub mod csv;
pub mod json;
pub mod normalize;
pub mod record;
pub mod resolve;

pub use self::csv::{read_csv_bars, CsvBarSource};
pub use self::json::{read_json_bars, JsonBarSource};
pub use self::normalize::into_series;
pub use self::record::{parse_date, RawBarRecord};
pub use self::resolve::{resolve_source, source_file_name};
