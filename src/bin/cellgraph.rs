use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::info;

use cellgraph::grid::Polarity;
use cellgraph::visualization::{binary_map_to_image, cost_map_to_image};
use cellgraph::{CellGraphBuilder, GraphConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Space {
    Metric,
    Pixel,
}

/// Build an 8-connected cell graph from a PGM occupancy map and print it as JSON.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Map metadata (ROS map_server YAML).
    yaml: PathBuf,

    /// Raster to use instead of the YAML `image` entry.
    #[arg(long)]
    image: Option<PathBuf>,

    /// Cell edge length in meters.
    #[arg(long, default_value_t = 0.8)]
    unit_length: f64,

    /// Raster intensity separating free from occupied samples.
    #[arg(long, default_value_t = 210)]
    threshold: u16,

    /// Treat samples above the threshold as free (ROS map_server images).
    #[arg(long)]
    bright_free: bool,

    /// Coordinate space of the printed graph.
    #[arg(long, value_enum, default_value_t = Space::Metric)]
    space: Space,

    /// Write a cost map preview image (PNG).
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Write the thresholded free/occupied pixels as an image (PNG).
    #[arg(long)]
    pixel_preview: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let builder = match &args.image {
        Some(image) => CellGraphBuilder::from_files(image, &args.yaml, None)?,
        None => CellGraphBuilder::from_yaml(&args.yaml, None)?,
    };

    let polarity = if args.bright_free {
        Polarity::BrightFree
    } else {
        Polarity::DarkFree
    };
    let config = GraphConfig::default()
        .with_unit_length(args.unit_length)
        .with_intensity_threshold(args.threshold)
        .with_polarity(polarity);

    let result = builder.with_config(config).build()?;
    info!(
        "{} free cells of {}, {} directed edges",
        result.pixel.len(),
        result.cost_map.h_units() * result.cost_map.v_units(),
        result.pixel.edge_count()
    );

    if let Some(path) = &args.preview {
        cost_map_to_image(&result.cost_map).save(path)?;
        info!("wrote preview to {}", path.display());
    }
    if let Some(path) = &args.pixel_preview {
        binary_map_to_image(&result.binary_map).save(path)?;
        info!("wrote pixel preview to {}", path.display());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match (args.space, args.pretty) {
        (Space::Metric, false) => serde_json::to_writer(&mut out, &result.metric)?,
        (Space::Metric, true) => serde_json::to_writer_pretty(&mut out, &result.metric)?,
        (Space::Pixel, false) => serde_json::to_writer(&mut out, &result.pixel)?,
        (Space::Pixel, true) => serde_json::to_writer_pretty(&mut out, &result.pixel)?,
    }
    writeln!(out)?;

    Ok(())
}
