//! Core value types: integer room boxes and float rectangles.

use glam::{IVec3, Vec2};

/// Axis-aligned integer box used both as a BSP node volume and as an
/// extracted room.
///
/// `x`/`z` are the horizontal plane, `y` is up. `width` spans x, `height`
/// spans y and `length` spans z. Dimensions are not validated; negative
/// values produce undefined downstream geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
  pub x: i32,
  pub y: i32,
  pub z: i32,
  pub width: i32,
  pub height: i32,
  pub length: i32,
}

impl Room {
  /// Create a room at the given origin with the given extents.
  pub const fn new(x: i32, y: i32, z: i32, width: i32, height: i32, length: i32) -> Self {
    Self {
      x,
      y,
      z,
      width,
      height,
      length,
    }
  }

  /// Single-storey room at the origin (height 1).
  pub const fn flat(width: i32, length: i32) -> Self {
    Self::new(0, 0, 0, width, 1, length)
  }

  /// Room at the origin with explicit extents.
  pub const fn sized(width: i32, height: i32, length: i32) -> Self {
    Self::new(0, 0, 0, width, height, length)
  }

  /// Create a room from its minimum corner and size.
  pub fn from_min_size(min: IVec3, size: IVec3) -> Self {
    Self::new(min.x, min.y, min.z, size.x, size.y, size.z)
  }

  /// Minimum corner (origin).
  #[inline]
  pub fn min(&self) -> IVec3 {
    IVec3::new(self.x, self.y, self.z)
  }

  /// Extents as a vector.
  #[inline]
  pub fn size(&self) -> IVec3 {
    IVec3::new(self.width, self.height, self.length)
  }

  /// Exclusive maximum corner (origin + extents).
  #[inline]
  pub fn max(&self) -> IVec3 {
    self.min() + self.size()
  }

  /// Center with integer division (truncates toward zero).
  #[inline]
  pub fn center(&self) -> IVec3 {
    IVec3::new(
      self.x + self.width / 2,
      self.y + self.height / 2,
      self.z + self.length / 2,
    )
  }

  /// Center of the floor plane (`y` stays at the origin).
  #[inline]
  pub fn floor_center(&self) -> IVec3 {
    IVec3::new(self.x + self.width / 2, self.y, self.z + self.length / 2)
  }

  /// Box volume, widened to avoid overflow on large volumes.
  #[inline]
  pub fn volume(&self) -> i64 {
    self.width as i64 * self.height as i64 * self.length as i64
  }

  /// Check if a cell lies inside the box (min inclusive, max exclusive).
  #[inline]
  pub fn contains_cell(&self, cell: IVec3) -> bool {
    let min = self.min();
    let max = self.max();
    cell.cmpge(min).all() && cell.cmplt(max).all()
  }

  /// Check if another box lies fully inside this one.
  #[inline]
  pub fn contains_room(&self, other: &Room) -> bool {
    other.min().cmpge(self.min()).all() && other.max().cmple(self.max()).all()
  }

  /// Grow (or shrink) each dimension by the given delta, keeping the room
  /// centered by moving the origin back by half the delta.
  ///
  /// Dimensions are clamped at zero.
  pub fn resize(&mut self, add_width: i32, add_height: i32, add_length: i32) {
    self.width = (self.width + add_width).max(0);
    self.height = (self.height + add_height).max(0);
    self.length = (self.length + add_length).max(0);
    self.x -= add_width / 2;
    self.y -= add_height / 2;
    self.z -= add_length / 2;
  }

  /// Shrink each dimension by `|shift|` and move the origin forward on axes
  /// where the shift is positive.
  ///
  /// A positive shift trims the low side, a negative shift trims the high
  /// side. Dimensions are clamped at zero.
  pub fn shift_size(&mut self, shift_width: i32, shift_height: i32, shift_length: i32) {
    self.width = (self.width - shift_width.abs()).max(0);
    self.height = (self.height - shift_height.abs()).max(0);
    self.length = (self.length - shift_length.abs()).max(0);
    if shift_width > 0 {
      self.x += shift_width;
    }
    if shift_height > 0 {
      self.y += shift_height;
    }
    if shift_length > 0 {
      self.z += shift_length;
    }
  }
}

/// Float axis-aligned rectangle on the horizontal (x/z) plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect2 {
  /// Minimum corner.
  pub min: Vec2,
  /// Maximum corner.
  pub max: Vec2,
}

impl Rect2 {
  /// Create a rectangle from min and max corners.
  ///
  /// # Panics
  /// Debug-asserts that min <= max on both axes.
  pub fn new(min: Vec2, max: Vec2) -> Self {
    debug_assert!(
      min.x <= max.x && min.y <= max.y,
      "Rect min must be <= max on both axes"
    );
    Self { min, max }
  }

  /// Create a rectangle from its center and full size.
  pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
    let half = size * 0.5;
    Self {
      min: center - half,
      max: center + half,
    }
  }

  /// Get the size of the rectangle (max - min).
  #[inline]
  pub fn size(&self) -> Vec2 {
    self.max - self.min
  }

  /// Get the center of the rectangle.
  #[inline]
  pub fn center(&self) -> Vec2 {
    (self.min + self.max) * 0.5
  }

  /// Move the rectangle so its center lands on `center`, keeping its size.
  pub fn set_center(&mut self, center: Vec2) {
    let half = self.size() * 0.5;
    self.min = center - half;
    self.max = center + half;
  }

  /// Check if the interiors of two rectangles overlap.
  ///
  /// Rectangles that only touch along an edge do not overlap.
  #[inline]
  pub fn overlaps(&self, other: &Rect2) -> bool {
    other.max.x > self.min.x
      && other.min.x < self.max.x
      && other.max.y > self.min.y
      && other.min.y < self.max.y
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
