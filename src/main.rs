//! geoheat - render a heatmap PNG from geolocated samples
//!
//! This is the main entry point for the geoheat application.

use std::time::Instant;
use tracing::{error, info};

use geoheat::data_loader::load_or_demo;
use geoheat::output::save_png;
use geoheat::{
    init_tracing, log_error, log_operation_end, log_operation_start, log_sample_stats, Config,
    GeoheatError, Heatmap, Result, Sample,
};

fn main() -> Result<()> {
    // Load configuration before tracing so the configured level applies
    let config = Config::load()?;
    init_tracing(&config.log_level);

    info!("Starting geoheat v{}", env!("CARGO_PKG_VERSION"));

    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    if let Some(workers) = config.workers {
        rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build_global()
            .map_err(|e| GeoheatError::Config {
                message: format!("Failed to configure {} render threads: {}", workers, e),
            })?;
    }

    let samples = load_or_demo(config.samples.as_deref()).map_err(|e| {
        log_error(&e, "loading samples");
        e
    })?;

    let source = config
        .samples
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "demo".to_string());

    let start = Instant::now();
    log_operation_start("render", Some(&config.output.display().to_string()));

    let result = render_to_file(&config, &samples);
    log_operation_end("render", start, result.is_ok());
    let heatmap = result?;

    log_sample_stats(&source, samples.len(), &heatmap.range, &heatmap.geobox);
    info!(output = %config.output.display(), "Heatmap written");
    Ok(())
}

/// Render the samples with the configured renderer and write the PNG
fn render_to_file(config: &Config, samples: &[Sample]) -> Result<Heatmap> {
    let renderer = config.render.build_renderer()?;
    let heatmap = renderer
        .render(samples, config.render.grid()?)
        .map_err(|e| {
            log_error(&e, "rendering heatmap");
            e
        })?;

    save_png(&heatmap.image, &config.output).map_err(|e| {
        log_error(&e, "writing PNG");
        e
    })?;

    Ok(heatmap)
}
