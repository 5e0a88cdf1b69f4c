// File: crates/chart-data/tests/loaders.rs
// Purpose: JSON/CSV sources against files on disk: field aliases, ordering, per-record errors, resolution.

use std::path::Path;

use stockchart_core::{BarSource, ChartError, RangeTag, Symbol};
use stockchart_data::{read_csv_bars, read_json_bars, resolve_source, CsvBarSource, JsonBarSource};

const IEX_STYLE: &str = r#"[
  {"date":"2019-01-02","open":1465.2,"close":1539.13,"high":1553.36,"low":1460.93,"volume":7983103,
   "uOpen":1465.2,"uClose":1539.13,"uHigh":1553.36,"uLow":1460.93,"uVolume":7983103,
   "change":0,"changePercent":0,"label":"Jan 2","changeOverTime":0},
  {"date":"2019-01-03","open":1520.01,"close":1500.28,"high":1538,"low":1497.11,"volume":6975572,
   "uOpen":1520.01,"uClose":1500.28,"uHigh":1538,"uLow":1497.11,"uVolume":6975572,
   "change":-38.85,"changePercent":-2.5242,"label":"Jan 3","changeOverTime":-0.025242}
]"#;

fn amzn() -> Symbol {
    Symbol::parse("AMZN").unwrap()
}

#[test]
fn json_ignores_extra_fields() {
    let s = read_json_bars(IEX_STYLE, Path::new("AMZN_6m.json")).unwrap();
    assert_eq!(s.len(), 2);
    assert_eq!(s.bars()[0].volume, 7_983_103);
    assert_eq!(s.bars()[1].close, 1500.28);
}

#[test]
fn json_accepts_capitalised_open_close() {
    let text = r#"[{"date":"2020-05-01","Open":10,"Close":11,"high":12,"low":9,"volume":3}]"#;
    let s = read_json_bars(text, Path::new("x.json")).unwrap();
    assert_eq!(s.bars()[0].open, 10.0);
    assert_eq!(s.bars()[0].close, 11.0);
}

#[test]
fn json_sorts_unordered_records() {
    let text = r#"[
      {"date":"2020-05-04","open":10,"close":11,"high":12,"low":9,"volume":3},
      {"date":"2020-05-01","open":10,"close":11,"high":12,"low":9,"volume":1}
    ]"#;
    let s = read_json_bars(text, Path::new("x.json")).unwrap();
    assert_eq!(s.bars()[0].volume, 1);
    assert_eq!(s.bars()[1].volume, 3);
}

#[test]
fn json_reports_the_bad_record() {
    let text = r#"[
      {"date":"2020-05-01","open":10,"close":11,"high":12,"low":9,"volume":1},
      {"date":"2020-05-04","open":"n/a","close":11,"high":12,"low":9,"volume":3}
    ]"#;
    let err = read_json_bars(text, Path::new("x.json")).unwrap_err();
    assert!(matches!(err, ChartError::MalformedRecord { index: 1, .. }), "{err}");
}

#[test]
fn json_missing_field_is_malformed() {
    let text = r#"[{"date":"2020-05-01","open":10,"close":11,"high":12,"low":9}]"#;
    let err = read_json_bars(text, Path::new("x.json")).unwrap_err();
    assert!(matches!(err, ChartError::MalformedRecord { index: 0, .. }), "{err}");
}

#[test]
fn json_that_is_not_an_array_is_a_format_error() {
    let err = read_json_bars(r#"{"chart":[]}"#, Path::new("x.json")).unwrap_err();
    assert!(matches!(err, ChartError::Format { .. }), "{err}");
}

#[test]
fn csv_matches_headers_by_name() {
    let text = "Date,Open,High,Low,Close,Adj Close,Volume\n\
                2021-03-01,10,12,9,11,11,500\n\
                2021-03-02,11,11.5,10,10.5,10.5,700\n";
    let s = read_csv_bars(text.as_bytes(), Path::new("x.csv")).unwrap();
    assert_eq!(s.len(), 2);
    assert_eq!(s.bars()[1].high, 11.5);
    assert_eq!(s.bars()[1].volume, 700);
}

#[test]
fn csv_reports_unparseable_date() {
    let text = "date,open,high,low,close,volume\n2021-03-01,10,12,9,11,5\nnot-a-date,10,12,9,11,5\n";
    let err = read_csv_bars(text.as_bytes(), Path::new("x.csv")).unwrap_err();
    assert!(matches!(err, ChartError::MalformedRecord { index: 1, .. }), "{err}");
}

#[test]
fn sources_load_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("AMZN_6m.json"), IEX_STYLE).unwrap();
    std::fs::write(
        dir.path().join("GT_3m.csv"),
        "date,open,high,low,close,volume\n2019-01-02,10,11,9,10.5,100\n",
    )
    .unwrap();

    let json = JsonBarSource::new(dir.path()).load(&amzn(), RangeTag::SixMonths).unwrap();
    assert_eq!(json.len(), 2);

    let gt = Symbol::parse("gt").unwrap();
    let csv = CsvBarSource::new(dir.path()).load(&gt, RangeTag::ThreeMonths).unwrap();
    assert_eq!(csv.len(), 1);

    assert_eq!(resolve_source(dir.path(), &amzn(), RangeTag::SixMonths).unwrap().id(), "json");
    assert_eq!(resolve_source(dir.path(), &gt, RangeTag::ThreeMonths).unwrap().id(), "csv");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = resolve_source(dir.path(), &amzn(), RangeTag::OneYear).err().unwrap();
    match err {
        ChartError::SourceNotFound { path } => assert!(path.ends_with("AMZN_1y.json")),
        other => panic!("unexpected: {other}"),
    }
    let err = JsonBarSource::new(dir.path()).load(&amzn(), RangeTag::OneYear).unwrap_err();
    assert!(matches!(err, ChartError::SourceNotFound { .. }));
}
