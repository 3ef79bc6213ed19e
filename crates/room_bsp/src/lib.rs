//! room_bsp - Framework/engine independent BSP room generation
//!
//! This crate partitions an axis-aligned integer volume into a binary space
//! partitioning tree and extracts the leaves of that tree as rooms for a game
//! level. The tree is built by recursively cutting leaves along the width (x)
//! or length (z) axis until a size/stochastic stopping rule holds.
//!
//! # Features
//!
//! - **Two splitting strategies**: unconstrained random cuts, and
//!   size-balanced cuts that retry until sibling volumes are comparable
//! - **Fork-join generation**: sibling subtrees can be grown on rayon's pool;
//!   every subtree owns a forked RNG stream, so a seed always produces the
//!   same rooms whether threading is on or off
//! - **Room-set transforms**: resize, directional shift and bounding box over
//!   a flat room slice
//! - **Post-processing**: optional L-shaped corridors and overlap relaxation
//!
//! # Example
//!
//! ```ignore
//! use rand::{rngs::StdRng, SeedableRng};
//! use room_bsp::{extract_rooms, generate, BspNode, GenerationConfig, Room, RoomSet};
//!
//! let mut root = BspNode::from_room(Room::flat(32, 32));
//! let mut rng = StdRng::seed_from_u64(7);
//! let stats = generate(&mut root, &GenerationConfig::default(), &mut rng)?;
//!
//! let mut rooms = extract_rooms(&root);
//! rooms.shift_size_each(1, 0, 1);
//! println!("{} rooms from {} splits", rooms.len(), stats.splits);
//! ```

pub mod constants;
pub mod types;

pub use types::{Rect2, Room};

// BSP tree, splitters and generation driver
pub mod bsp;
pub use bsp::{
  extract_rooms, generate, BspNode, ConfigError, GenerationConfig, GenerationStats, NodeId,
  RetryBound, SplitAxis,
};

// Batch operations over extracted rooms
pub mod room_set;
pub use room_set::{partition_all, RoomSet};

// Optional corridor and relaxation passes
pub mod postprocess;
pub use postprocess::{connect_rooms, relax_overlaps, sibling_corridors, RelaxConfig, RelaxOutcome};
