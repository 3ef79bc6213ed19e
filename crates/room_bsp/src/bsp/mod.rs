//! BSP module for recursive volume partitioning.
//!
//! The tree is explicit: every internal node owns exactly two children and
//! every leaf owns none. Nodes are only ever split, never merged or re-split.
//!
//! # Split Convention
//!
//! Cuts run across the width (x axis) or the length (z axis); height is never
//! cut. The two children of a cut share a one-unit wall:
//!
//! ```text
//! x ──►  0          split-1 split        width
//!        ├─────────────┼──┤                │   left  = [0, split)
//!        │             ├──┼────────────────┤   right = [split-1, width)
//! ```
//!
//! # Module Structure
//!
//! - [`node`]: `BspNode` - owning tree node with debug identifier
//! - [`config`]: `GenerationConfig` - explicit generation parameters
//! - [`split`]: unconstrained-random and size-balanced splitters
//! - [`generate`]: recursive (optionally fork-join) generation driver
//! - [`extract`]: leaf iteration and room extraction
//! - [`stats`]: `GenerationStats` - per-pass counters

pub mod config;
pub mod extract;
pub mod generate;
pub mod node;
pub mod split;
pub mod stats;

// Re-exports
pub use config::{ConfigError, GenerationConfig, RetryBound};
pub use extract::{extract_rooms, Leaves};
pub use generate::generate;
pub use node::{BspNode, NodeId};
pub use split::{best_volume_ratio, volume_ratio, SplitAxis};
pub use stats::GenerationStats;
