//! Runs the configured passes and collects the baked layout.

use anyhow::{Context, Result};
use rand::{Rng, SeedableRng};
use room_bsp::{
	extract_rooms, generate, partition_all, relax_overlaps, sibling_corridors, BspNode,
	GenerationStats, RelaxOutcome, Room, RoomSet,
};
use serde::Serialize;

use crate::config::Config;

/// Everything written to the output JSON.
#[derive(Debug, Serialize)]
pub struct Layout {
	pub rooms: Vec<Room>,
	pub corridors: Vec<Room>,
	/// Bounding box of rooms and corridors together.
	pub bounds: Option<Room>,
	/// Totals over all passes.
	pub stats: GenerationStats,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub relax: Option<RelaxOutcome>,
}

/// Bake a layout from `config`.
///
/// Every pass but the last goes through `partition_all`. The last pass keeps
/// each tree long enough to walk it for corridors.
pub fn bake<R>(config: &Config, rng: &mut R) -> Result<Layout>
where
	R: Rng + SeedableRng + Send,
{
	let generation = &config.generation;
	let mut rooms = config.root_rooms();
	let mut stats = GenerationStats::default();

	for pass in 1..config.passes {
		let (next, pass_stats) = partition_all(&rooms, generation, rng)
			.with_context(|| format!("BSP pass {} failed", pass))?;
		log::debug!("Pass {}: {} -> {} rooms", pass, rooms.len(), next.len());
		rooms = next;
		stats = stats.merge(pass_stats);
	}

	let mut leaves = Vec::new();
	let mut corridors = Vec::new();
	for room in &rooms {
		let mut root = BspNode::from_room(*room);
		let tree_stats = generate(&mut root, generation, rng)
			.with_context(|| format!("BSP pass {} failed", config.passes))?;
		stats = stats.merge(tree_stats);
		leaves.extend(extract_rooms(&root));
		if config.corridors {
			corridors.extend(sibling_corridors(&root));
		}
	}
	let mut rooms = leaves;

	for transform in &config.transforms {
		transform.apply(&mut rooms);
	}

	let relax = config
		.relax
		.as_ref()
		.map(|relax| relax_overlaps(&mut rooms, relax, rng));

	let bounds = rooms
		.iter()
		.chain(&corridors)
		.copied()
		.collect::<Vec<_>>()
		.bounding_box();

	Ok(Layout {
		rooms,
		corridors,
		bounds,
		stats,
		relax,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::rngs::StdRng;

	fn config(text: &str) -> Config {
		Config::from_toml(text).expect("test config parses")
	}

	#[test]
	fn test_single_pass_rooms_inside_root() {
		let config = config(
			r#"
[[roots]]
width = 48
length = 32
"#,
		);
		let layout = bake(&config, &mut StdRng::seed_from_u64(1)).expect("bake succeeds");

		let root = Room::flat(48, 32);
		assert!(!layout.rooms.is_empty());
		assert!(layout.rooms.iter().all(|room| root.contains_room(room)));
		assert!(layout.corridors.is_empty());
		assert_eq!(layout.stats.leaves, layout.rooms.len());
		assert_eq!(layout.bounds, Some(root));
		assert!(layout.relax.is_none());
	}

	#[test]
	fn test_same_seed_same_layout() {
		let config = config(
			r#"
passes = 2
corridors = true

[[roots]]
width = 64
length = 64

[[roots]]
x = 80
width = 24
length = 40
"#,
		);
		let a = bake(&config, &mut StdRng::seed_from_u64(9)).expect("bake succeeds");
		let b = bake(&config, &mut StdRng::seed_from_u64(9)).expect("bake succeeds");
		assert_eq!(a.rooms, b.rooms);
		assert_eq!(a.corridors, b.corridors);
	}

	#[test]
	fn test_corridors_and_transforms() {
		let config = config(
			r#"
corridors = true

[generation]
continue_chance = 0.0

[[roots]]
width = 32
length = 32

[[transforms]]
op = "shift_size"
width = 1
length = 1
"#,
		);
		let layout = bake(&config, &mut StdRng::seed_from_u64(4)).expect("bake succeeds");

		assert!(!layout.corridors.is_empty());
		assert!(layout
			.corridors
			.iter()
			.all(|cell| cell.width == 1 && cell.height == 1 && cell.length == 1));
		// Shifted rooms start one cell in from the shared walls.
		assert!(layout.rooms.iter().all(|room| room.x >= 1 && room.z >= 1));
	}

	#[test]
	fn test_relax_outcome_reported() {
		let config = config(
			r#"
[[roots]]
width = 24
length = 24

[relax]
max_iterations = 10
"#,
		);
		let layout = bake(&config, &mut StdRng::seed_from_u64(2)).expect("bake succeeds");
		let outcome = layout.relax.expect("relax ran");
		assert!(outcome.iterations <= 10);
	}

	#[test]
	fn test_layout_serializes() {
		let config = config(
			r#"
[[roots]]
width = 16
length = 16
"#,
		);
		let layout = bake(&config, &mut StdRng::seed_from_u64(3)).expect("bake succeeds");
		let json: serde_json::Value =
			serde_json::to_value(&layout).expect("layout serializes");

		assert!(json["rooms"].is_array());
		assert!(json["corridors"].is_array());
		assert_eq!(json["bounds"]["width"], 16);
		assert!(json["stats"]["leaves"].is_u64());
		assert!(json.get("relax").is_none());
	}
}
