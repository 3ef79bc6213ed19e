//! Room layout baker.
//!
//! Partitions the root volumes from a TOML config into BSP rooms, applies
//! the configured transforms and post-processing, and writes the layout as
//! JSON:
//!
//! - rooms: extracted leaf boxes after transforms and relaxation
//! - corridors: unit cells joining sibling rooms (when enabled)
//! - bounds: bounding box of everything emitted
//! - stats: split and leaf counters summed over all passes

mod config;
mod layout;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use config::Config;

/// BSP room layout baker.
#[derive(Parser, Debug)]
#[command(name = "bake_rooms")]
#[command(about = "Bakes BSP room layouts into JSON")]
struct Args {
	/// Path to configuration TOML file.
	#[arg(short, long)]
	config: PathBuf,

	/// Output JSON file (default: stdout).
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Seed override (default: from config, else random).
	#[arg(short, long)]
	seed: Option<u64>,

	/// Grow sibling subtrees in parallel.
	#[arg(long)]
	threading: bool,

	/// Pretty-print the JSON output.
	#[arg(long)]
	pretty: bool,
}

fn main() -> Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let args = Args::parse();

	log::info!("Loading config from: {}", args.config.display());
	let mut config = Config::load(&args.config)?;

	if let Some(seed) = args.seed {
		config.seed = Some(seed);
	}
	if args.threading {
		config.generation.threading = true;
	}

	let mut rng = match config.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	};

	log::info!(
		"Baking {} root(s) over {} pass(es), seed {}",
		config.roots.len(),
		config.passes,
		config
			.seed
			.map_or_else(|| "random".to_string(), |seed| seed.to_string())
	);

	let layout = layout::bake(&config, &mut rng)?;

	let json = if args.pretty {
		serde_json::to_string_pretty(&layout)
	} else {
		serde_json::to_string(&layout)
	}
	.context("Failed to serialize layout")?;

	match &args.output {
		Some(path) => {
			std::fs::write(path, json)
				.with_context(|| format!("Failed to write: {}", path.display()))?;
			log::info!("Layout written to: {}", path.display());
		}
		None => println!("{}", json),
	}

	log::info!(
		"{} rooms, {} corridor cells, {} splits ({} rejected), depth {}, {} us",
		layout.rooms.len(),
		layout.corridors.len(),
		layout.stats.splits,
		layout.stats.rejected_splits,
		layout.stats.max_depth,
		layout.stats.elapsed_us
	);
	if let Some(outcome) = layout.relax {
		if !outcome.converged {
			log::warn!(
				"Relaxation stopped after {} iterations with {} overlapping pairs",
				outcome.iterations,
				outcome.remaining_overlaps
			);
		}
	}

	Ok(())
}
