// File: crates/chart-core/src/render.rs
// Summary: Chart Renderer seam. Renderers consume a finished view model and never recompute indicators.

use anyhow::Result;

use crate::view_model::ChartViewModel;

pub trait ChartRenderer {
    fn id(&self) -> &'static str;
    fn render(&mut self, model: &ChartViewModel) -> Result<()>;
}
