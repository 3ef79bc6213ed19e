//! Batch operations over a flat set of rooms.
//!
//! `RoomSet` is an extension trait on `[Room]`, so it works on vectors,
//! arrays and sub-slices alike. The in-place transforms return the slice
//! again for chaining.

use glam::IVec3;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use web_time::Instant;

use crate::bsp::{extract_rooms, generate, BspNode, ConfigError, GenerationConfig, GenerationStats};
use crate::types::Room;

/// Transforms and queries over a set of rooms.
pub trait RoomSet {
  /// [`Room::resize`] applied to every room.
  fn resize_each(&mut self, add_width: i32, add_height: i32, add_length: i32) -> &mut Self;

  /// [`Room::shift_size`] applied to every room with the same shifts.
  fn shift_size_each(
    &mut self,
    shift_width: i32,
    shift_height: i32,
    shift_length: i32,
  ) -> &mut Self;

  /// [`Room::shift_size`] with per-room shifts drawn from the closures.
  ///
  /// The closures are called once per room, width then height then length.
  fn shift_size_each_with<W, H, L>(&mut self, width: W, height: H, length: L) -> &mut Self
  where
    W: FnMut() -> i32,
    H: FnMut() -> i32,
    L: FnMut() -> i32;

  /// Component-wise minimum origin. None for an empty set.
  fn min_corner(&self) -> Option<IVec3>;

  /// Component-wise maximum of origin + extents. None for an empty set.
  fn max_corner(&self) -> Option<IVec3>;

  /// Smallest box containing every room. None for an empty set.
  fn bounding_box(&self) -> Option<Room> {
    let min = self.min_corner()?;
    let max = self.max_corner()?;
    Some(Room::from_min_size(min, max - min))
  }

  /// Replace every room with its own BSP partition. See [`partition_all`].
  fn partition_all<R>(
    &self,
    config: &GenerationConfig,
    rng: &mut R,
  ) -> Result<(Vec<Room>, GenerationStats), ConfigError>
  where
    R: Rng + SeedableRng + Send;
}

impl RoomSet for [Room] {
  fn resize_each(&mut self, add_width: i32, add_height: i32, add_length: i32) -> &mut Self {
    for room in self.iter_mut() {
      room.resize(add_width, add_height, add_length);
    }
    self
  }

  fn shift_size_each(
    &mut self,
    shift_width: i32,
    shift_height: i32,
    shift_length: i32,
  ) -> &mut Self {
    for room in self.iter_mut() {
      room.shift_size(shift_width, shift_height, shift_length);
    }
    self
  }

  fn shift_size_each_with<W, H, L>(&mut self, mut width: W, mut height: H, mut length: L) -> &mut Self
  where
    W: FnMut() -> i32,
    H: FnMut() -> i32,
    L: FnMut() -> i32,
  {
    for room in self.iter_mut() {
      let (sw, sh, sl) = (width(), height(), length());
      room.shift_size(sw, sh, sl);
    }
    self
  }

  fn min_corner(&self) -> Option<IVec3> {
    self.iter().map(Room::min).reduce(IVec3::min)
  }

  fn max_corner(&self) -> Option<IVec3> {
    self.iter().map(Room::max).reduce(IVec3::max)
  }

  fn partition_all<R>(
    &self,
    config: &GenerationConfig,
    rng: &mut R,
  ) -> Result<(Vec<Room>, GenerationStats), ConfigError>
  where
    R: Rng + SeedableRng + Send,
  {
    partition_all(self, config, rng)
  }
}

impl Room {
  /// Run the whole pipeline on this room: build a root from its box, grow
  /// the tree and extract the leaves.
  pub fn partition<R>(&self, config: &GenerationConfig, rng: &mut R) -> Result<Vec<Room>, ConfigError>
  where
    R: Rng + SeedableRng + Send,
  {
    let mut root = BspNode::from_room(*self);
    generate(&mut root, config, rng)?;
    Ok(extract_rooms(&root))
  }
}

/// Second-level driver: partition each input room independently and
/// concatenate the results in input order.
///
/// One RNG stream is forked per input room up front, so the output does not
/// depend on `config.threading`. With threading the rooms are partitioned on
/// rayon's pool.
#[tracing::instrument(skip_all, name = "bsp::partition_all", fields(inputs = rooms.len()))]
pub fn partition_all<R>(
  rooms: &[Room],
  config: &GenerationConfig,
  rng: &mut R,
) -> Result<(Vec<Room>, GenerationStats), ConfigError>
where
  R: Rng + SeedableRng + Send,
{
  config.validate()?;

  let start = Instant::now();
  let streams: Vec<R> = rooms.iter().map(|_| R::from_rng(rng)).collect();

  let grow_one = |(room, mut stream): (&Room, R)| -> Result<(Vec<Room>, GenerationStats), ConfigError> {
    let mut root = BspNode::from_room(*room);
    let stats = generate(&mut root, config, &mut stream)?;
    Ok((extract_rooms(&root), stats))
  };

  let parts: Vec<(Vec<Room>, GenerationStats)> = if config.threading {
    rooms
      .par_iter()
      .zip(streams.into_par_iter())
      .map(grow_one)
      .collect::<Result<_, ConfigError>>()?
  } else {
    rooms
      .iter()
      .zip(streams)
      .map(grow_one)
      .collect::<Result<_, ConfigError>>()?
  };

  let mut out = Vec::with_capacity(parts.iter().map(|(part, _)| part.len()).sum());
  let mut stats = GenerationStats::default();
  for (part, part_stats) in parts {
    out.extend(part);
    stats = stats.merge(part_stats);
  }
  // Summed per-room times overcount under threading; report wall time.
  stats.elapsed_us = start.elapsed().as_micros() as u64;

  tracing::debug!(
    inputs = rooms.len(),
    outputs = out.len(),
    splits = stats.splits,
    "partitioned room set"
  );
  Ok((out, stats))
}

#[cfg(test)]
#[path = "room_set_test.rs"]
mod room_set_test;
