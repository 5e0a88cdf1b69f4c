// File: crates/chart-core/src/overlay.rs
// Summary: Overlay selection (plain SMA20 vs Bollinger, optional SMA50) and precomputed overlay lines.

use serde::{Deserialize, Serialize};

use crate::indicator::DerivedBar;
use crate::theme::{Palette, Rgba};

/// What is drawn over the candles around the 20-bar mean. The variants are
/// alternatives: Bollinger bands replace the plain SMA20 line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceOverlay {
    None,
    #[default]
    Sma20,
    BollingerBands,
}

/// A single enabled series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Overlay {
    Sma20,
    Sma50,
    BollingerBands,
}

/// The two yes/no answers a user gives: "50-period MA?" and "Bollinger bands (instead of SMA20)?".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayFlags {
    pub show_sma50: bool,
    pub show_bollinger: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlaySet {
    #[serde(default)]
    pub price: PriceOverlay,
    #[serde(default)]
    pub sma50: bool,
}

impl OverlaySet {
    pub fn contains(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::Sma20 => self.price == PriceOverlay::Sma20,
            Overlay::BollingerBands => self.price == PriceOverlay::BollingerBands,
            Overlay::Sma50 => self.sma50,
        }
    }

    /// Enabled overlays, price overlay first.
    pub fn enabled(&self) -> Vec<Overlay> {
        [Overlay::Sma20, Overlay::BollingerBands, Overlay::Sma50]
            .into_iter()
            .filter(|o| self.contains(*o))
            .collect()
    }
}

pub fn select_overlays(flags: OverlayFlags) -> OverlaySet {
    let price = if flags.show_bollinger { PriceOverlay::BollingerBands } else { PriceOverlay::Sma20 };
    OverlaySet { price, sma50: flags.show_sma50 }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineRole {
    Sma20,
    Sma50,
    BollingerUpper,
    BollingerLower,
}

impl LineRole {
    pub fn overlay(&self) -> Overlay {
        match self {
            LineRole::Sma20 => Overlay::Sma20,
            LineRole::Sma50 => Overlay::Sma50,
            LineRole::BollingerUpper | LineRole::BollingerLower => Overlay::BollingerBands,
        }
    }

    fn value(&self, bar: &DerivedBar) -> Option<f64> {
        match self {
            LineRole::Sma20 => bar.sma20,
            LineRole::Sma50 => bar.sma50,
            LineRole::BollingerUpper => bar.bollinger_upper,
            LineRole::BollingerLower => bar.bollinger_lower,
        }
    }

    fn color(&self, palette: &Palette) -> Rgba {
        match self {
            LineRole::Sma20 => palette.sma20,
            LineRole::Sma50 => palette.sma50,
            LineRole::BollingerUpper => palette.bollinger_upper,
            LineRole::BollingerLower => palette.bollinger_lower,
        }
    }
}

/// A polyline in (display index, price) space. Bars whose indicator is
/// undefined are left out, so the line simply starts later.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OverlayLine {
    pub role: LineRole,
    pub color: Rgba,
    pub points: Vec<(usize, f64)>,
}

pub fn overlay_lines(bars: &[DerivedBar], overlays: OverlaySet, palette: &Palette) -> Vec<OverlayLine> {
    let mut roles = Vec::new();
    match overlays.price {
        PriceOverlay::None => {}
        PriceOverlay::Sma20 => roles.push(LineRole::Sma20),
        PriceOverlay::BollingerBands => roles.extend([LineRole::BollingerUpper, LineRole::BollingerLower]),
    }
    if overlays.sma50 { roles.push(LineRole::Sma50); }

    roles
        .into_iter()
        .map(|role| OverlayLine {
            role,
            color: role.color(palette),
            points: bars.iter().filter_map(|b| role.value(b).map(|v| (b.display_index, v))).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bollinger_and_sma20_are_exclusive() {
        for show_sma50 in [false, true] {
            let bb = select_overlays(OverlayFlags { show_sma50, show_bollinger: true });
            assert!(bb.contains(Overlay::BollingerBands));
            assert!(!bb.contains(Overlay::Sma20));
            assert_eq!(bb.contains(Overlay::Sma50), show_sma50);

            let plain = select_overlays(OverlayFlags { show_sma50, show_bollinger: false });
            assert!(plain.contains(Overlay::Sma20));
            assert!(!plain.contains(Overlay::BollingerBands));
            assert_eq!(plain.contains(Overlay::Sma50), show_sma50);
        }
    }

    #[test]
    fn enabled_lists_price_overlay_first() {
        let set = select_overlays(OverlayFlags { show_sma50: true, show_bollinger: true });
        assert_eq!(set.enabled(), vec![Overlay::BollingerBands, Overlay::Sma50]);
        let none = OverlaySet { price: PriceOverlay::None, sma50: false };
        assert!(none.enabled().is_empty());
    }

    #[test]
    fn roles_map_back_to_overlays() {
        assert_eq!(LineRole::BollingerLower.overlay(), Overlay::BollingerBands);
        assert_eq!(LineRole::Sma50.overlay(), Overlay::Sma50);
    }
}
