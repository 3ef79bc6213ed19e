//! L-shaped corridors.
//!
//! A corridor is a leg along x at the start point's row, then a leg along z
//! at the end point's column. Both legs are one unit wide and one unit high
//! and share the corner cell.

use std::collections::HashSet;

use glam::IVec3;
use smallvec::SmallVec;

use crate::bsp::BspNode;
use crate::types::Room;

/// Legs of an L-shaped path from `from` to `to`.
///
/// A leg that would only repeat the other leg's cells is dropped, so the
/// result holds one leg for aligned points and two otherwise.
fn l_path(from: IVec3, to: IVec3) -> SmallVec<[Room; 2]> {
  let delta = to - from;
  let mut legs = SmallVec::new();

  if delta.x != 0 || delta.z == 0 {
    legs.push(Room::new(
      from.x.min(to.x),
      from.y,
      from.z,
      delta.x.abs() + 1,
      1,
      1,
    ));
  }
  if delta.z != 0 {
    legs.push(Room::new(
      to.x,
      to.y,
      from.z.min(to.z),
      1,
      1,
      delta.z.abs() + 1,
    ));
  }
  legs
}

/// Hallway between the centers of two rooms.
///
/// The endpoints are swapped when `a` is wider than long, or else when `b`
/// is longer than wide, which decides which room the corner lands next to.
pub fn connect_rooms(a: &Room, b: &Room) -> SmallVec<[Room; 2]> {
  let (from, to) = if a.width > a.length || b.length > b.width {
    (b, a)
  } else {
    (a, b)
  };
  l_path(from.center(), to.center())
}

/// Corridors joining the two children of every internal node, as unit rooms.
///
/// Paths run between the floor centers of sibling boxes. Cells shared by
/// several paths are emitted once, in first-seen order.
pub fn sibling_corridors(root: &BspNode) -> Vec<Room> {
  let mut seen = HashSet::new();
  let mut cells = Vec::new();
  let mut stack = vec![root];

  while let Some(node) = stack.pop() {
    let Some([left, right]) = node.children() else {
      continue;
    };
    let from = left.bounds().floor_center();
    let to = right.bounds().floor_center();
    for leg in l_path(from, to) {
      for cell in leg_cells(&leg) {
        if seen.insert(cell) {
          cells.push(Room::from_min_size(cell, IVec3::ONE));
        }
      }
    }
    stack.push(right);
    stack.push(left);
  }

  tracing::trace!(cells = cells.len(), "sibling corridors");
  cells
}

fn leg_cells(leg: &Room) -> impl Iterator<Item = IVec3> + '_ {
  (leg.x..leg.x + leg.width)
    .flat_map(move |x| (leg.z..leg.z + leg.length).map(move |z| IVec3::new(x, leg.y, z)))
}

#[cfg(test)]
#[path = "corridors_test.rs"]
mod corridors_test;
