//! Overlap relaxation on the horizontal plane.
//!
//! Each room is projected to a `Rect2` footprint one unit larger than its
//! extents (plus optional padding), so rooms that share a wall count as
//! overlapping. Every iteration moves each overlapping room one step away
//! from the rooms it overlaps, then snaps positions back to the integer
//! grid. Rooms never change size and `y` is never touched.

use glam::Vec2;
use rand::Rng;

use crate::bsp::ConfigError;
use crate::constants::DEFAULT_RELAX_ITERATIONS;
use crate::types::{Rect2, Room};

/// Parameters for [`relax_overlaps`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RelaxConfig {
  /// Iteration budget. The pass stops here even if rooms still overlap.
  pub max_iterations: usize,
  /// Extra footprint size added on both horizontal axes.
  pub padding: i32,
  /// Distance a room moves per iteration.
  pub step: f32,
}

impl Default for RelaxConfig {
  fn default() -> Self {
    Self {
      max_iterations: DEFAULT_RELAX_ITERATIONS,
      padding: 0,
      step: 1.0,
    }
  }
}

impl RelaxConfig {
  /// Reject parameters that would shrink footprints or stall the pass.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.padding < 0 {
      return Err(ConfigError::NegativePadding(self.padding));
    }
    if !self.step.is_finite() || self.step <= 0.0 {
      return Err(ConfigError::InvalidRelaxStep(self.step));
    }
    Ok(())
  }
}

/// Result of a relaxation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelaxOutcome {
  /// Iterations that moved at least one room.
  pub iterations: usize,
  /// True when no footprints overlap any more.
  pub converged: bool,
  /// Overlapping pairs left when the pass stopped.
  pub remaining_overlaps: usize,
}

fn footprint(room: &Room, padding: i32) -> Rect2 {
  let size = Vec2::new(
    (room.width + 1 + padding) as f32,
    (room.length + 1 + padding) as f32,
  );
  let min = Vec2::new(room.x as f32, room.z as f32);
  Rect2::from_center_size(min + Vec2::new(room.width as f32, room.length as f32) * 0.5, size)
}

fn count_overlaps(rects: &[Rect2]) -> usize {
  let mut count = 0;
  for (i, a) in rects.iter().enumerate() {
    count += rects[i + 1..].iter().filter(|b| a.overlaps(b)).count();
  }
  count
}

/// Random unit vector for rooms whose centers coincide.
fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
  let angle = rng.random_range(0.0..std::f32::consts::TAU);
  Vec2::from_angle(angle)
}

/// Round a move to whole cells. A nonzero move shorter than half a cell
/// still advances one cell along its dominant axis.
fn snap(delta: Vec2) -> (i32, i32) {
  let rounded = delta.round();
  if rounded != Vec2::ZERO || delta == Vec2::ZERO {
    return (rounded.x as i32, rounded.y as i32);
  }
  if delta.x.abs() >= delta.y.abs() {
    (delta.x.signum() as i32, 0)
  } else {
    (0, delta.y.signum() as i32)
  }
}

/// Move rooms apart until their footprints no longer overlap or the budget
/// runs out.
///
/// Moves are computed from one snapshot of all footprints and applied
/// together. The push direction is the sum of unit vectors pointing away
/// from each overlapping neighbor; coincident centers get a random
/// direction from `rng`.
#[tracing::instrument(skip_all, name = "postprocess::relax", fields(rooms = rooms.len()))]
pub fn relax_overlaps<R: Rng + ?Sized>(
  rooms: &mut [Room],
  config: &RelaxConfig,
  rng: &mut R,
) -> RelaxOutcome {
  let mut iterations = 0;
  let mut moves = vec![Vec2::ZERO; rooms.len()];

  while iterations < config.max_iterations {
    let rects: Vec<Rect2> = rooms.iter().map(|room| footprint(room, config.padding)).collect();

    let mut any = false;
    for (i, a) in rects.iter().enumerate() {
      let mut push = Vec2::ZERO;
      let mut overlapped = false;
      for (j, b) in rects.iter().enumerate() {
        if i == j || !a.overlaps(b) {
          continue;
        }
        overlapped = true;
        let away = a.center() - b.center();
        push += away.try_normalize().unwrap_or_else(|| random_direction(rng));
      }
      // Opposing pushes can cancel out; fall back to a random nudge.
      moves[i] = if !overlapped {
        Vec2::ZERO
      } else {
        push.try_normalize().unwrap_or_else(|| random_direction(rng)) * config.step
      };
      any |= overlapped;
    }

    if !any {
      break;
    }
    for (room, delta) in rooms.iter_mut().zip(&moves) {
      let (dx, dz) = snap(*delta);
      room.x += dx;
      room.z += dz;
    }
    iterations += 1;
  }

  let rects: Vec<Rect2> = rooms.iter().map(|room| footprint(room, config.padding)).collect();
  let remaining_overlaps = count_overlaps(&rects);
  let outcome = RelaxOutcome {
    iterations,
    converged: remaining_overlaps == 0,
    remaining_overlaps,
  };
  if outcome.converged {
    tracing::debug!(iterations, "relaxation converged");
  } else {
    tracing::warn!(
      iterations,
      remaining_overlaps,
      "relaxation budget exhausted with overlaps left"
    );
  }
  outcome
}

#[cfg(test)]
#[path = "relax_test.rs"]
mod relax_test;
