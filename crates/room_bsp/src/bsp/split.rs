//! Splitting strategies that turn a leaf into an internal node.
//!
//! Both strategies leave the node untouched when they fail. Failure is the
//! normal way recursion stops: the node is too small to cut.

use rand::Rng;

use super::{BspNode, GenerationConfig, RetryBound};
use crate::constants::{ANISOTROPY_THRESHOLD, SHARED_WALL};
use crate::types::Room;

/// Axis a cut runs across.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SplitAxis {
  /// Cut the width: children sit side by side along x.
  Width,
  /// Cut the length: children sit one after another along z.
  Length,
}

impl SplitAxis {
  /// Span of `room` along this axis.
  #[inline]
  pub fn span(self, room: &Room) -> i32 {
    match self {
      SplitAxis::Width => room.width,
      SplitAxis::Length => room.length,
    }
  }
}

/// Ratio of the smaller to the larger box volume, in [0, 1].
///
/// Two empty boxes have ratio 0.
pub fn volume_ratio(a: &Room, b: &Room) -> f32 {
  let (va, vb) = (a.volume(), b.volume());
  let (small, large) = if va > vb { (vb, va) } else { (va, vb) };
  if large <= 0 {
    return 0.0;
  }
  small as f32 / large as f32
}

/// Check if a box is large enough to cut with the given `min_size`.
#[inline]
pub fn can_split(bounds: &Room, min_size: i32) -> bool {
  (bounds.length.min(bounds.width) as f32) / 2.0 >= min_size as f32
}

/// Axis an elongated box must be cut across, or None when near-square boxes
/// may be cut either way.
fn forced_axis(bounds: &Room) -> Option<SplitAxis> {
  let width = bounds.width as f32;
  let length = bounds.length as f32;
  if width / length >= ANISOTROPY_THRESHOLD {
    Some(SplitAxis::Width)
  } else if length / width >= ANISOTROPY_THRESHOLD {
    Some(SplitAxis::Length)
  } else {
    None
  }
}

/// Pick the cut axis: elongated boxes are always cut across their long side,
/// near-square ones at random.
fn choose_axis<R: Rng + ?Sized>(bounds: &Room, rng: &mut R) -> SplitAxis {
  match forced_axis(bounds) {
    Some(axis) => axis,
    None if rng.random_bool(0.5) => SplitAxis::Length,
    None => SplitAxis::Width,
  }
}

/// Legal cut positions along `axis`, as an inclusive range.
fn split_range(bounds: &Room, axis: SplitAxis, min_size: i32) -> (i32, i32) {
  let (lo, hi) = (min_size, axis.span(bounds) - min_size);
  // Empty range when span == 2 * min_size; the only legal cut is at min_size.
  if hi > lo {
    (lo, hi - 1)
  } else {
    (lo, lo)
  }
}

/// Highest volume ratio any legal cut of `bounds` can reach.
///
/// The ratio peaks where both children are equally long, so only the cuts
/// next to `(span + 1) / 2` are evaluated. Only meaningful when
/// [`can_split`] holds.
pub fn best_volume_ratio(bounds: &Room, min_size: i32) -> f32 {
  let axes: &[SplitAxis] = match forced_axis(bounds) {
    Some(SplitAxis::Width) => &[SplitAxis::Width],
    Some(SplitAxis::Length) => &[SplitAxis::Length],
    None => &[SplitAxis::Width, SplitAxis::Length],
  };
  let mut best = 0.0f32;
  for &axis in axes {
    let (lo, hi) = split_range(bounds, axis, min_size);
    let ideal = (axis.span(bounds) + 1) / 2;
    for split in [ideal, ideal + 1] {
      let [left, right] = cut_bounds(bounds, axis, split.clamp(lo, hi));
      best = best.max(volume_ratio(&left, &right));
    }
  }
  best
}

/// Child boxes of a cut at `split` along `axis`.
///
/// The second child starts one unit before the split so both children share
/// the wall cell.
pub fn cut_bounds(bounds: &Room, axis: SplitAxis, split: i32) -> [Room; 2] {
  let Room {
    x,
    y,
    z,
    width,
    height,
    length,
  } = *bounds;
  match axis {
    SplitAxis::Length => [
      Room::new(x, y, z, width, height, split),
      Room::new(
        x,
        y,
        z + split - SHARED_WALL,
        width,
        height,
        length - split + SHARED_WALL,
      ),
    ],
    SplitAxis::Width => [
      Room::new(x, y, z, split, height, length),
      Room::new(
        x + split - SHARED_WALL,
        y,
        z,
        width - split + SHARED_WALL,
        height,
        length,
      ),
    ],
  }
}

/// One unconstrained cut of `bounds`, or None when it is too small.
fn random_cut<R: Rng + ?Sized>(bounds: &Room, min_size: i32, rng: &mut R) -> Option<[Room; 2]> {
  if !can_split(bounds, min_size) {
    return None;
  }
  let axis = choose_axis(bounds, rng);
  let (lo, hi) = split_range(bounds, axis, min_size);
  let split = if hi > lo { rng.random_range(lo..=hi) } else { lo };
  Some(cut_bounds(bounds, axis, split))
}

/// Cut repeatedly until the children's volume ratio passes the gate or the
/// retry policy gives up. Returns the kept children and the number of
/// rejected cuts.
///
/// Unbounded retries only apply when some legal cut of `bounds` can pass the
/// gate. Otherwise the capped budget is used.
fn balanced_cut<R: Rng + ?Sized>(
  bounds: &Room,
  config: &GenerationConfig,
  rng: &mut R,
) -> Option<([Room; 2], usize)> {
  let mut children = random_cut(bounds, config.min_size, rng)?;
  let gate = config.max_delta_volume();
  let unbounded = config.retry_bound == RetryBound::UntilBalanced
    && best_volume_ratio(bounds, config.min_size) > gate;
  if config.retry_bound == RetryBound::UntilBalanced && !unbounded {
    tracing::trace!(gate, "balance gate unreachable for node, using capped budget");
  }

  let mut attempts: u32 = 1;
  let mut rejected = 0;
  loop {
    let [left, right] = &children;
    if volume_ratio(left, right) > gate {
      return Some((children, rejected));
    }
    if !unbounded && attempts >= config.max_iter {
      tracing::trace!(attempts, "balance budget exhausted, keeping last cut");
      return Some((children, rejected));
    }
    children = random_cut(bounds, config.min_size, rng)?;
    attempts = attempts.saturating_add(1);
    rejected += 1;
  }
}

fn into_nodes([left, right]: [Room; 2]) -> [BspNode; 2] {
  [BspNode::from_room(left), BspNode::from_room(right)]
}

impl BspNode {
  /// Split with a single unconstrained random cut.
  ///
  /// Fails (returns false, node untouched) when the node is already split or
  /// `min(width, length) / 2 < min_size`.
  pub fn split_random<R: Rng + ?Sized>(&mut self, config: &GenerationConfig, rng: &mut R) -> bool {
    if !self.is_leaf() {
      return false;
    }
    match random_cut(self.bounds(), config.min_size, rng) {
      Some(children) => {
        self.attach(into_nodes(children));
        true
      }
      None => false,
    }
  }

  /// Split with cuts retried until the children's volumes are balanced
  /// (ratio above `max_delta_volume`), bounded by `retry_bound`.
  ///
  /// Fails exactly when [`Self::split_random`] would.
  pub fn split_size_dependent<R: Rng + ?Sized>(
    &mut self,
    config: &GenerationConfig,
    rng: &mut R,
  ) -> bool {
    self.split_balanced(config, rng).is_some()
  }

  /// Size-balanced split reporting how many cuts were rejected.
  pub(crate) fn split_balanced<R: Rng + ?Sized>(
    &mut self,
    config: &GenerationConfig,
    rng: &mut R,
  ) -> Option<usize> {
    if !self.is_leaf() {
      return None;
    }
    let (children, rejected) = balanced_cut(self.bounds(), config, rng)?;
    self.attach(into_nodes(children));
    Some(rejected)
  }

  /// Propose children with the strategy selected by `config.size_dependent`
  /// without attaching them.
  ///
  /// Returns the children and the number of rejected cuts, or None when the
  /// node is already split or too small.
  pub(crate) fn cut_with<R: Rng + ?Sized>(
    &self,
    config: &GenerationConfig,
    rng: &mut R,
  ) -> Option<([BspNode; 2], usize)> {
    if !self.is_leaf() {
      return None;
    }
    let (children, rejected) = if config.size_dependent {
      balanced_cut(self.bounds(), config, rng)?
    } else {
      (random_cut(self.bounds(), config.min_size, rng)?, 0)
    };
    Some((into_nodes(children), rejected))
  }
}

#[cfg(test)]
#[path = "split_test.rs"]
mod split_test;
