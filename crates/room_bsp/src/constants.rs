//! Default generation parameters and fixed splitting constants.
//!
//! ```text
//! min_size ─┐         ┌─ min_size
//!           ▼         ▼
//!   ├──────┤ split range ├──────┤
//!   0      min      dim - min   dim
//! ```
//!
//! A cut position is drawn from `[min_size, dim - min_size)`, so a node must
//! span at least `2 * min_size` along both horizontal axes to be cut.

/// Smallest span allowed along the split axis after cutting.
pub const DEFAULT_MIN_SIZE: i32 = 4;

/// Nodes stop splitting once width and length are both within this size
/// (unless the stochastic continuation fires).
pub const DEFAULT_MAX_SIZE: i32 = 4;

/// Attempt budget for the size-balanced splitter.
pub const DEFAULT_MAX_ITER: u32 = 5;

/// Minimum smaller/larger child volume ratio accepted by the size-balanced
/// splitter.
pub const DEFAULT_MAX_DELTA_VOLUME: f32 = 0.5;

/// Chance of splitting a node that is already within `max_size`.
pub const DEFAULT_CONTINUE_CHANCE: f64 = 0.75;

/// Aspect ratio at which a node counts as elongated and is always cut across
/// its long side.
pub const ANISOTROPY_THRESHOLD: f32 = 1.1;

/// Children of a cut share one unit of wall on the split axis.
pub const SHARED_WALL: i32 = 1;

/// Iteration cap for overlap relaxation.
pub const DEFAULT_RELAX_ITERATIONS: usize = 1000;
