//! Occupancy-map box baker.
//!
//! Decodes a floor-plan bitmap, decomposes it into a minimal set of static
//! obstacle boxes, and writes the box set as TOML for scene tooling to
//! consume.

mod config;
mod source;

use anyhow::{Context, Result};
use clap::Parser;
use map_plugin::{decompose, BoxDescriptor};
use serde::Serialize;
use std::path::PathBuf;

use config::Params;
use source::ImageSource;

/// Occupancy-map box baker.
#[derive(Parser, Debug)]
#[command(name = "bake_map")]
#[command(about = "Decomposes an occupancy bitmap into static obstacle boxes")]
struct Args {
	/// Path to the occupancy bitmap (e.g. a black/white floor plan).
	image: PathBuf,

	/// Path to a decomposition params TOML file (defaults apply if omitted).
	#[arg(short, long)]
	params: Option<PathBuf>,

	/// Output TOML file for the box set.
	#[arg(short, long, default_value = "boxes.toml")]
	output: PathBuf,

	/// Write the effective params to this file after loading.
	#[arg(long)]
	save_params: Option<PathBuf>,
}

/// Serialized form of one emitted box.
#[derive(Serialize)]
struct BoxRecord {
	name: String,
	center: [f64; 3],
	size: [f64; 3],
	material: String,
	r#static: bool,
}

impl From<BoxDescriptor> for BoxRecord {
	fn from(b: BoxDescriptor) -> Self {
		Self {
			name: b.name,
			center: b.center.to_array(),
			size: b.size.to_array(),
			material: b.material,
			r#static: b.is_static,
		}
	}
}

/// Root of the output document: an ordered `[[boxes]]` list.
#[derive(Serialize)]
struct BoxSet {
	boxes: Vec<BoxRecord>,
}

fn main() -> Result<()> {
	let args = Args::parse();

	let params = match &args.params {
		Some(path) => {
			println!("Loading params from: {}", path.display());
			Params::load(path)?
		}
		None => Params::default(),
	};

	if let Some(path) = &args.save_params {
		params.save(path)?;
		println!("  ✓ params saved to {}", path.display());
	}

	println!("Loading map image: {}", args.image.display());
	let map = ImageSource::open(&args.image)?;

	let output = decompose(&map, &params.to_config()).context("Decomposing map image")?;
	println!(
		"Decomposed {} nodes in {} merge passes: {} boxes from {} leaves",
		output.stats.nodes_allocated,
		output.stats.merge_passes,
		output.stats.boxes_emitted,
		output.stats.leaves_remaining
	);

	let set = BoxSet {
		boxes: output.boxes.into_iter().map(BoxRecord::from).collect(),
	};
	let content = toml::to_string_pretty(&set).context("Serializing box set")?;
	std::fs::write(&args.output, content)
		.with_context(|| format!("Failed to write box set: {}", args.output.display()))?;
	println!("  ✓ {}", args.output.display());

	Ok(())
}
