// File: crates/chart-core/src/theme.rs
// Summary: Dark palette for candles, volume bars and overlay lines.

use serde::Serialize;

/// 8-bit RGB with a 0..=1 alpha.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 1.0 } }
    pub const fn with_alpha(self, a: f32) -> Self { Self { a, ..self } }

    /// `#rrggbb`, alpha dropped.
    pub fn hex(&self) -> String { format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b) }
}

/// Overlay lines are drawn semi-transparent over the candles.
pub const LINE_ALPHA: f32 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Palette {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub candle_up: Rgba,
    pub candle_down: Rgba,
    pub wick: Rgba,
    pub sma20: Rgba,
    pub sma50: Rgba,
    pub bollinger_upper: Rgba,
    pub bollinger_lower: Rgba,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(32, 38, 43),
            grid: Rgba::rgb(255, 255, 255).with_alpha(0.1),
            candle_up: Rgba::rgb(0, 200, 0),
            candle_down: Rgba::rgb(245, 0, 0),
            wick: Rgba::rgb(235, 235, 235),
            sma20: Rgba::rgb(255, 255, 0).with_alpha(LINE_ALPHA),   // yellow
            sma50: Rgba::rgb(255, 165, 0).with_alpha(LINE_ALPHA),   // orange
            bollinger_upper: Rgba::rgb(169, 94, 255).with_alpha(LINE_ALPHA),
            bollinger_lower: Rgba::rgb(77, 178, 255).with_alpha(LINE_ALPHA),
        }
    }
}

impl Default for Palette {
    fn default() -> Self { Self::dark() }
}
