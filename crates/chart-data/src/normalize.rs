// File: crates/chart-data/src/normalize.rs
// Summary: Sort and de-duplicate loaded bars before handing them to the core as a BarSeries.

use stockchart_core::{Bar, BarSeries, ChartError};
use tracing::warn;

/// Stable sort by date; when a date repeats, the record appearing last in the
/// file wins.
pub fn into_series(mut bars: Vec<Bar>) -> Result<BarSeries, ChartError> {
    bars.sort_by_key(|b| b.date);
    let mut out: Vec<Bar> = Vec::with_capacity(bars.len());
    for bar in bars {
        match out.last_mut() {
            Some(prev) if prev.date == bar.date => {
                warn!(date = %bar.date, "duplicate bar date; keeping the later record");
                *prev = bar;
            }
            _ => out.push(bar),
        }
    }
    BarSeries::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bar(d: u32, close: f64) -> Bar {
        Bar::try_new(NaiveDate::from_ymd_opt(2021, 7, d).unwrap(), close, close + 1.0, close / 2.0, close, 1).unwrap()
    }

    #[test]
    fn sorts_out_of_order_input() {
        let s = into_series(vec![bar(3, 3.0), bar(1, 1.0), bar(2, 2.0)]).unwrap();
        let closes = s.closes();
        assert_eq!(closes, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn later_duplicate_wins() {
        let s = into_series(vec![bar(1, 1.0), bar(2, 2.0), bar(1, 9.0)]).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.closes(), vec![9.0, 2.0]);
    }
}
