//! Configuration parsing for room layout baking.

use anyhow::{Context, Result};
use room_bsp::{GenerationConfig, RelaxConfig, Room, RoomSet};
use serde::Deserialize;
use std::path::Path;

/// Root configuration for a layout bake.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Seed for the whole bake. A random seed is used when absent.
	#[serde(default)]
	pub seed: Option<u64>,
	/// BSP parameters shared by every pass.
	#[serde(default)]
	pub generation: GenerationConfig,
	/// Volumes to partition.
	pub roots: Vec<RootConfig>,
	/// Number of BSP passes. Each pass after the first partitions the rooms
	/// produced by the previous one.
	#[serde(default = "default_passes")]
	pub passes: u32,
	/// Transforms applied in order to the final rooms.
	#[serde(default)]
	pub transforms: Vec<TransformConfig>,
	/// Emit corridors between sibling rooms of the final pass.
	#[serde(default)]
	pub corridors: bool,
	/// Push overlapping rooms apart after the transforms.
	#[serde(default)]
	pub relax: Option<RelaxConfig>,
}

/// One root volume. Origin defaults to zero and height to a single storey.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RootConfig {
	#[serde(default)]
	pub x: i32,
	#[serde(default)]
	pub y: i32,
	#[serde(default)]
	pub z: i32,
	pub width: i32,
	#[serde(default = "default_height")]
	pub height: i32,
	pub length: i32,
}

/// Room-set transform, tagged by `op`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TransformConfig {
	/// Grow (or shrink) every room around its center.
	Resize {
		#[serde(default)]
		width: i32,
		#[serde(default)]
		height: i32,
		#[serde(default)]
		length: i32,
	},
	/// Trim every room on the side given by each shift's sign.
	ShiftSize {
		#[serde(default)]
		width: i32,
		#[serde(default)]
		height: i32,
		#[serde(default)]
		length: i32,
	},
}

fn default_passes() -> u32 {
	1
}

fn default_height() -> i32 {
	1
}

impl Config {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::from_toml(&content)
	}

	/// Parse and validate configuration from TOML text.
	pub fn from_toml(content: &str) -> Result<Self> {
		let config: Config = toml::from_str(content).context("Failed to parse config TOML")?;

		if config.roots.is_empty() {
			anyhow::bail!("Config must have at least one root");
		}
		for (i, root) in config.roots.iter().enumerate() {
			if root.width <= 0 || root.height <= 0 || root.length <= 0 {
				anyhow::bail!(
					"Root {} must have positive dimensions, got {}x{}x{}",
					i,
					root.width,
					root.height,
					root.length
				);
			}
		}
		if config.passes == 0 {
			anyhow::bail!("passes must be at least 1");
		}
		config
			.generation
			.validate()
			.context("Invalid [generation] parameters")?;
		if let Some(relax) = &config.relax {
			relax.validate().context("Invalid [relax] parameters")?;
		}

		Ok(config)
	}

	/// Root volumes as rooms.
	pub fn root_rooms(&self) -> Vec<Room> {
		self.roots.iter().map(|root| root.to_room()).collect()
	}
}

impl RootConfig {
	pub fn to_room(&self) -> Room {
		Room::new(self.x, self.y, self.z, self.width, self.height, self.length)
	}
}

impl TransformConfig {
	/// Apply the transform to every room.
	pub fn apply(&self, rooms: &mut [Room]) {
		match *self {
			TransformConfig::Resize {
				width,
				height,
				length,
			} => {
				rooms.resize_each(width, height, length);
			}
			TransformConfig::ShiftSize {
				width,
				height,
				length,
			} => {
				rooms.shift_size_each(width, height, length);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const MINIMAL: &str = r#"
[[roots]]
width = 32
length = 32
"#;

	#[test]
	fn test_minimal_config_uses_defaults() {
		let config = Config::from_toml(MINIMAL).expect("minimal config parses");
		assert_eq!(config.seed, None);
		assert_eq!(config.passes, 1);
		assert_eq!(config.generation, GenerationConfig::DEFAULT);
		assert!(config.transforms.is_empty());
		assert!(!config.corridors);
		assert!(config.relax.is_none());
		assert_eq!(config.root_rooms(), vec![Room::flat(32, 32)]);
	}

	#[test]
	fn test_full_config() {
		let text = r#"
seed = 7
passes = 2
corridors = true

[generation]
min_size = 3
max_size = 6
size_dependent = false
max_delta_volume = 2.0
retry_bound = "capped"

[[roots]]
x = -16
y = 2
z = 4
width = 40
height = 3
length = 24

[[transforms]]
op = "resize"
width = 2
length = 2

[[transforms]]
op = "shift_size"
width = 1

[relax]
max_iterations = 50
padding = 1
"#;
		let config = Config::from_toml(text).expect("full config parses");
		assert_eq!(config.seed, Some(7));
		assert_eq!(config.passes, 2);
		assert!(config.corridors);
		assert_eq!(config.generation.min_size, 3);
		assert_eq!(config.generation.max_size, 6);
		assert!(!config.generation.size_dependent);
		// Out-of-range ratios are clamped on load.
		assert_eq!(config.generation.max_delta_volume(), 1.0);
		// Unlisted fields keep their defaults.
		assert_eq!(config.generation.max_iter, GenerationConfig::DEFAULT.max_iter);

		assert_eq!(config.root_rooms(), vec![Room::new(-16, 2, 4, 40, 3, 24)]);
		assert_eq!(
			config.transforms,
			vec![
				TransformConfig::Resize {
					width: 2,
					height: 0,
					length: 2
				},
				TransformConfig::ShiftSize {
					width: 1,
					height: 0,
					length: 0
				},
			]
		);

		let relax = config.relax.expect("relax section present");
		assert_eq!(relax.max_iterations, 50);
		assert_eq!(relax.padding, 1);
		assert_eq!(relax.step, 1.0);
	}

	#[test]
	fn test_rejects_missing_roots() {
		let err = Config::from_toml("roots = []").expect_err("empty roots");
		assert!(err.to_string().contains("at least one root"), "{}", err);
	}

	#[test]
	fn test_rejects_bad_root() {
		let text = r#"
[[roots]]
width = 0
length = 8
"#;
		let err = Config::from_toml(text).expect_err("zero width");
		assert!(err.to_string().contains("positive dimensions"), "{}", err);
	}

	#[test]
	fn test_rejects_invalid_generation() {
		let text = r#"
[generation]
min_size = 0

[[roots]]
width = 8
length = 8
"#;
		let err = Config::from_toml(text).expect_err("min_size 0");
		assert!(format!("{:#}", err).contains("min_size"), "{:#}", err);
	}

	#[test]
	fn test_rejects_misspelled_generation_key() {
		let text = r#"
[generation]
max_delta_volum = 0.9

[[roots]]
width = 8
length = 8
"#;
		let err = Config::from_toml(text).expect_err("typo in [generation]");
		assert!(format!("{:#}", err).contains("max_delta_volum"), "{:#}", err);
	}

	#[test]
	fn test_rejects_misspelled_relax_key() {
		let text = r#"
[[roots]]
width = 8
length = 8

[relax]
max_iteration = 10
"#;
		let err = Config::from_toml(text).expect_err("typo in [relax]");
		assert!(format!("{:#}", err).contains("max_iteration"), "{:#}", err);
	}

	#[test]
	fn test_rejects_invalid_relax() {
		for section in ["step = -1.0", "step = 0.0", "padding = -2"] {
			let text = format!(
				r#"
[[roots]]
width = 8
length = 8

[relax]
{}
"#,
				section
			);
			let err = Config::from_toml(&text).expect_err("invalid [relax]");
			assert!(format!("{:#}", err).contains("[relax]"), "{}: {:#}", section, err);
		}
	}

	#[test]
	fn test_rejects_unknown_transform() {
		let text = r#"
[[roots]]
width = 8
length = 8

[[transforms]]
op = "rotate"
"#;
		assert!(Config::from_toml(text).is_err());
	}

	#[test]
	fn test_transform_apply() {
		let mut rooms = vec![Room::new(0, 0, 0, 10, 1, 10)];
		TransformConfig::Resize {
			width: 2,
			height: 0,
			length: 0,
		}
		.apply(&mut rooms);
		assert_eq!(rooms[0], Room::new(-1, 0, 0, 12, 1, 10));

		TransformConfig::ShiftSize {
			width: -2,
			height: 0,
			length: 3,
		}
		.apply(&mut rooms);
		assert_eq!(rooms[0], Room::new(-1, 0, 3, 10, 1, 7));
	}
}
