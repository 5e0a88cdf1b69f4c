// File: crates/chart-core/src/tooltip.rs
// Summary: Static hover-tooltip bindings plus the numeral-style formatters they name.

use serde::Serialize;

use crate::indicator::DerivedBar;

/// Number/date display rules, expressed as numeral.js-style patterns for
/// renderers that have a formatter and applied directly for those that don't.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueFormat {
    /// strftime pattern.
    Date { pattern: &'static str },
    /// `0,0.00`: thousands separators, fixed decimals.
    Grouped { decimals: usize },
    /// `0.00 a`: scaled to k/m/b/t.
    Abbreviated { decimals: usize },
    /// `0,0[.]000`: decimals only when the rounded value has a fraction.
    OptionalDecimals { decimals: usize },
}

impl ValueFormat {
    pub const PRICE_AXIS: Self = ValueFormat::OptionalDecimals { decimals: 3 };

    pub fn pattern(&self) -> String {
        match *self {
            ValueFormat::Date { pattern } => pattern.to_string(),
            ValueFormat::Grouped { decimals } => format!("0,0{}", decimal_suffix(decimals)),
            ValueFormat::Abbreviated { decimals } => format!("0{} a", decimal_suffix(decimals)),
            ValueFormat::OptionalDecimals { decimals } => format!("0,0[.]{}", "0".repeat(decimals)),
        }
    }

    /// Format a number. `Date` formats have no numeric meaning and fall back to `Grouped { 2 }`.
    pub fn format_number(&self, v: f64) -> String {
        match *self {
            ValueFormat::Grouped { decimals } => grouped(v, decimals),
            ValueFormat::Abbreviated { decimals } => abbreviated(v, decimals),
            ValueFormat::OptionalDecimals { decimals } => optional_decimals(v, decimals),
            ValueFormat::Date { .. } => grouped(v, 2),
        }
    }
}

fn decimal_suffix(decimals: usize) -> String {
    if decimals == 0 { String::new() } else { format!(".{}", "0".repeat(decimals)) }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 { out.push(','); }
        out.push(ch);
    }
    out
}

fn grouped(v: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, v.abs());
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s.as_str(), None),
    };
    let sign = if v < 0.0 { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{}.{f}", group_thousands(int_part)),
        None => format!("{sign}{}", group_thousands(int_part)),
    }
}

const UNITS: [(f64, &str); 5] = [(1.0, ""), (1e3, "k"), (1e6, "m"), (1e9, "b"), (1e12, "t")];

fn abbreviated(v: f64, decimals: usize) -> String {
    let a = v.abs();
    let mut unit = UNITS.iter().rposition(|&(div, _)| a >= div).unwrap_or(0);
    // Rounding may carry into the next unit: 999_999 is 1.00 m, not 1000.00 k.
    let scale = 10f64.powi(decimals as i32);
    while unit + 1 < UNITS.len() && (a / UNITS[unit].0 * scale).round() / scale >= 1000.0 {
        unit += 1;
    }
    let (div, suffix) = UNITS[unit];
    let s = format!("{:.*}", decimals, v / div);
    if suffix.is_empty() { s } else { format!("{s} {suffix}") }
}

fn optional_decimals(v: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (v * scale).round() / scale;
    if rounded.fract() == 0.0 { grouped(rounded, 0) } else { grouped(rounded, decimals) }
}

/// Bar field a tooltip row reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TooltipField {
    Date,
    Open,
    Close,
    Volume,
}

impl TooltipField {
    /// Column name in the rendered data source.
    pub fn column(&self) -> &'static str {
        match self {
            TooltipField::Date => "date",
            TooltipField::Open => "Open",
            TooltipField::Close => "Close",
            TooltipField::Volume => "volume",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TooltipEntry {
    pub label: &'static str,
    pub field: TooltipField,
    pub format: ValueFormat,
}

impl TooltipEntry {
    /// Binding string such as `@Open{0,0.00}`.
    pub fn binding(&self) -> String {
        format!("@{}{{{}}}", self.field.column(), self.format.pattern())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TooltipSpec {
    pub entries: Vec<TooltipEntry>,
}

/// Date, open, close and volume; independent of the data.
pub fn build_tooltip_spec() -> TooltipSpec {
    TooltipSpec {
        entries: vec![
            TooltipEntry { label: "Date", field: TooltipField::Date, format: ValueFormat::Date { pattern: "%d-%m-%Y" } },
            TooltipEntry { label: "Open", field: TooltipField::Open, format: ValueFormat::Grouped { decimals: 2 } },
            TooltipEntry { label: "Close", field: TooltipField::Close, format: ValueFormat::Grouped { decimals: 2 } },
            TooltipEntry { label: "Volume", field: TooltipField::Volume, format: ValueFormat::Abbreviated { decimals: 2 } },
        ],
    }
}

impl TooltipSpec {
    /// `(label, text)` rows for one bar.
    pub fn render(&self, bar: &DerivedBar) -> Vec<(&'static str, String)> {
        self.entries
            .iter()
            .map(|e| {
                let text = match (e.field, e.format) {
                    (TooltipField::Date, ValueFormat::Date { pattern }) => bar.bar.date.format(pattern).to_string(),
                    (TooltipField::Date, _) => bar.bar.date.to_string(),
                    (TooltipField::Open, f) => f.format_number(bar.bar.open),
                    (TooltipField::Close, f) => f.format_number(bar.bar.close),
                    (TooltipField::Volume, f) => f.format_number(bar.bar.volume as f64),
                };
                (e.label, text)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bindings_match_hover_tool_syntax() {
        let spec = build_tooltip_spec();
        let b: Vec<String> = spec.entries.iter().map(TooltipEntry::binding).collect();
        assert_eq!(b, vec!["@date{%d-%m-%Y}", "@Open{0,0.00}", "@Close{0,0.00}", "@volume{0.00 a}"]);
    }

    #[test]
    fn grouped_numbers() {
        let f = ValueFormat::Grouped { decimals: 2 };
        assert_eq!(f.format_number(1234.5), "1,234.50");
        assert_eq!(f.format_number(12.0), "12.00");
        assert_eq!(f.format_number(1_234_567.891), "1,234,567.89");
        assert_eq!(f.format_number(-1234.5), "-1,234.50");
    }

    #[test]
    fn abbreviated_numbers() {
        let f = ValueFormat::Abbreviated { decimals: 2 };
        assert_eq!(f.format_number(999.0), "999.00");
        assert_eq!(f.format_number(12_500.0), "12.50 k");
        assert_eq!(f.format_number(1_234_567.0), "1.23 m");
        assert_eq!(f.format_number(3_000_000_000.0), "3.00 b");
    }

    #[test]
    fn abbreviation_unit_follows_rounding() {
        let f = ValueFormat::Abbreviated { decimals: 2 };
        assert_eq!(f.format_number(999_999.0), "1.00 m");
        assert_eq!(f.format_number(999.999), "1.00 k");
        assert_eq!(f.format_number(999_994_999.0), "999.99 m");
        assert_eq!(f.format_number(-999_999.0), "-1.00 m");
        assert_eq!(ValueFormat::Abbreviated { decimals: 0 }.format_number(999_600.0), "1 m");
    }

    #[test]
    fn price_axis_drops_empty_decimals() {
        let f = ValueFormat::PRICE_AXIS;
        assert_eq!(f.pattern(), "0,0[.]000");
        assert_eq!(f.format_number(1234.0), "1,234");
        assert_eq!(f.format_number(1234.5678), "1,234.568");
        assert_eq!(f.format_number(0.0004), "0");
    }
}
