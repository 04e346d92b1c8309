// src/main.rs

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use plate_track::{interpolate, results};

/// Densify a vehicle / license-plate results log: fill every frame gap in
/// each vehicle's track with linearly interpolated boxes.
#[derive(Parser, Debug)]
#[command(name = "plate-track")]
#[command(author, version, about)]
struct Args {
    /// Input results CSV (sparse, one row per detection)
    input: PathBuf,

    /// Output CSV with gap frames filled in
    #[arg(short, long, default_value = "results_interpolated.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "plate_track=info".to_string());
    tracing_subscriber::fmt().with_env_filter(filter.as_str()).init();

    let args = Args::parse();

    let rows = results::read_file(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    info!("Loaded {} detection rows from {}", rows.len(), args.input.display());

    let dense = interpolate(&rows).context("interpolating tracks")?;

    let vehicles: HashSet<&str> = dense.iter().map(|r| r.car_id.as_str()).collect();
    info!(
        "✓ {} rows out ({} synthesized across {} vehicles)",
        dense.len(),
        dense.len() - rows.len(),
        vehicles.len()
    );

    results::write_file(&args.output, &dense)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!("✓ Wrote {}", args.output.display());

    Ok(())
}
