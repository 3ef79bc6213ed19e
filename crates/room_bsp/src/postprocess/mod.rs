//! Optional passes over extracted rooms.
//!
//! Neither pass is run by the generation driver. Callers opt in after
//! extraction.
//!
//! - [`corridors`]: L-shaped unit-width hallways between room centers
//! - [`relax`]: push overlapping rooms apart on the x/z plane

pub mod corridors;
pub mod relax;

pub use corridors::{connect_rooms, sibling_corridors};
pub use relax::{relax_overlaps, RelaxConfig, RelaxOutcome};
