// File: crates/chart-core/src/types.rs
// Summary: Shared layout constants (surface size, bar widths, tick density).

use serde::Serialize;

/// Default surface width in pixels.
pub const WIDTH: u32 = 1200;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 700;

/// Candle body width in display-index units.
pub const CANDLE_WIDTH: f64 = 0.3;

/// Geometry hints for the renderer. Widths are in display-index units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ChartLayout {
    pub width: u32,
    pub height: u32,
    pub candle_width: f64,
    /// Volume bars are half as wide as candle bodies.
    pub volume_width: f64,
    /// Fraction of the x span added on both sides.
    pub range_padding: f64,
    pub desired_x_ticks: u32,
    /// Radians.
    pub x_label_rotation: f64,
    pub grid_alpha: f32,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            candle_width: CANDLE_WIDTH,
            volume_width: CANDLE_WIDTH / 2.0,
            range_padding: 0.05,
            desired_x_ticks: 40,
            x_label_rotation: std::f64::consts::FRAC_PI_4,
            grid_alpha: 0.1,
        }
    }
}
