//! Print a summary of a sample file: count, value range and bounding box.

use anyhow::Context;
use std::path::PathBuf;

use geoheat::data_loader::load_samples;
use geoheat::{GeoBox, ValueRange};

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: inspect_samples <samples.json> [border]")?;
    let border: f64 = match std::env::args().nth(2) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid border: {}", arg))?,
        None => geoheat::renderer::DEFAULT_BORDER,
    };

    let samples = load_samples(&path)
        .with_context(|| format!("failed to load samples from {}", path.display()))?;
    let range = ValueRange::from_samples(&samples)?;
    let tight = GeoBox::from_samples(&samples, 0.0)?;
    let padded = GeoBox::from_samples(&samples, border)?;

    println!("Inspecting sample file: {}", path.display());
    println!("\n=== SAMPLES ===");
    println!("  count = {}", samples.len());
    println!("  value range = [{}, {}]", range.min, range.max);
    if range.is_degenerate() {
        println!("  (constant value, heatmap will be uniform)");
    }

    println!("\n=== BOUNDING BOX ===");
    println!(
        "  tight:  lat [{}, {}], lon [{}, {}]",
        tight.min_lat, tight.max_lat, tight.min_lon, tight.max_lon
    );
    println!(
        "  padded (border {}):  lat [{}, {}], lon [{}, {}]",
        border, padded.min_lat, padded.max_lat, padded.min_lon, padded.max_lon
    );

    println!("\n=== FIRST SAMPLES ===");
    for s in samples.iter().take(10) {
        println!("  lat={:>10.4} lon={:>10.4} value={}", s.lat, s.lon, s.value);
    }

    Ok(())
}
