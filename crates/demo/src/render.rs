// File: crates/demo/src/render.rs
// Summary: Two Chart Renderers: a JSON file writer for front-ends and a plain-text digest.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use stockchart_core::{ChartConfig, ChartRenderer, ChartViewModel, Direction};
use tracing::info;

/// Produce output file name like target/out/chart_<SYMBOL>_<range>.json
pub fn default_out_path(config: &ChartConfig) -> PathBuf {
    PathBuf::from("target/out").join(format!("chart_{}_{}.json", config.symbol, config.range))
}

pub struct JsonRenderer {
    path: PathBuf,
}

impl JsonRenderer {
    pub fn new(path: PathBuf) -> Self { Self { path } }
}

impl ChartRenderer for JsonRenderer {
    fn id(&self) -> &'static str { "json" }

    fn render(&mut self, model: &ChartViewModel) -> Result<()> {
        let json = serde_json::to_string_pretty(model).context("serializing view model")?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(&self.path, json).with_context(|| format!("writing {}", self.path.display()))?;
        info!(path = %self.path.display(), bars = model.len(), "wrote view model");
        Ok(())
    }
}

pub struct SummaryRenderer<W: Write> {
    out: W,
}

impl<W: Write> SummaryRenderer<W> {
    pub fn new(out: W) -> Self { Self { out } }

    #[cfg(test)]
    fn into_inner(self) -> W { self.out }
}

impl<W: Write> ChartRenderer for SummaryRenderer<W> {
    fn id(&self) -> &'static str { "summary" }

    fn render(&mut self, model: &ChartViewModel) -> Result<()> {
        let w = &mut self.out;
        let up = model.bars.iter().filter(|b| b.direction == Direction::Up).count();
        let first = &model.axis_labels[&model.axis_bounds.first];
        let last = &model.axis_labels[&model.axis_bounds.last];

        writeln!(w, "{}", model.title)?;
        writeln!(w, "  bars: {} ({} to {}), {} up / {} down", model.len(), first, last, up, model.len() - up)?;
        writeln!(
            w,
            "  price range: {} .. {}",
            model.price_axis_format.format_number(model.price_range.min),
            model.price_axis_format.format_number(model.price_range.max)
        )?;
        for line in &model.lines {
            writeln!(w, "  {:?}: {} points ({})", line.role, line.points.len(), line.color.hex())?;
        }
        if let Some(bar) = model.bars.last() {
            writeln!(w, "  last bar:")?;
            for (label, text) in model.tooltip.render(bar) {
                writeln!(w, "    {label:<7}{text}")?;
            }
        }
        w.flush()?;
        Ok(())
    }
}
