// File: crates/demo/src/main.rs
// Summary: Loads a symbol's daily bars, builds the chart view model and hands it to a renderer.

mod render;
mod settings;

use anyhow::{Context, Result};
use clap::Parser;
use stockchart_core::{build_chart, ChartRenderer};
use stockchart_data::resolve_source;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::render::{default_out_path, JsonRenderer, SummaryRenderer};
use crate::settings::{Cli, OutputFormat, Settings};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let settings = Settings::resolve(cli)?;
    let chart = &settings.chart;
    info!(symbol = %chart.symbol, range = %chart.range, overlays = ?chart.overlays.enabled(), "chart request");

    let source = resolve_source(&settings.data_dir, &chart.symbol, chart.range)
        .with_context(|| format!("no bars for {} in {}", chart.title(), settings.data_dir.display()))?;
    let model = build_chart(source.as_ref(), chart).with_context(|| format!("building chart {}", chart.title()))?;

    let mut renderer: Box<dyn ChartRenderer> = match settings.format {
        OutputFormat::Json => {
            let path = settings.out.clone().unwrap_or_else(|| default_out_path(chart));
            Box::new(JsonRenderer::new(path))
        }
        OutputFormat::Summary => Box::new(SummaryRenderer::new(std::io::stdout())),
    };
    renderer.render(&model).with_context(|| format!("{} renderer failed", renderer.id()))?;
    Ok(())
}
