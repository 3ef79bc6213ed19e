use super::*;

// =========================================================================
// Room value type
// =========================================================================

/// Center uses integer division on every axis.
#[test]
fn test_room_center_integer_division() {
  let room = Room::new(2, 0, 10, 5, 3, 8);
  assert_eq!(room.center(), IVec3::new(4, 1, 14));
}

/// Floor center keeps the origin height.
#[test]
fn test_room_floor_center() {
  let room = Room::new(2, 6, 10, 5, 3, 8);
  assert_eq!(room.floor_center(), IVec3::new(4, 6, 14));
}

/// `flat` defaults height to 1 at the origin.
#[test]
fn test_room_flat_defaults() {
  let room = Room::flat(12, 7);
  assert_eq!(room, Room::new(0, 0, 0, 12, 1, 7));
}

/// min/size/max agree with the field layout.
#[test]
fn test_room_min_size_max() {
  let room = Room::from_min_size(IVec3::new(-3, 1, 4), IVec3::new(6, 2, 5));
  assert_eq!(room.min(), IVec3::new(-3, 1, 4));
  assert_eq!(room.size(), IVec3::new(6, 2, 5));
  assert_eq!(room.max(), IVec3::new(3, 3, 9));
  assert_eq!(room.volume(), 60);
}

#[test]
fn test_room_contains_cell_is_half_open() {
  let room = Room::new(0, 0, 0, 4, 1, 4);
  assert!(room.contains_cell(IVec3::new(0, 0, 0)));
  assert!(room.contains_cell(IVec3::new(3, 0, 3)));
  assert!(!room.contains_cell(IVec3::new(4, 0, 0)));
  assert!(!room.contains_cell(IVec3::new(0, 1, 0)));
}

#[test]
fn test_room_contains_room() {
  let outer = Room::new(0, 0, 0, 10, 1, 10);
  assert!(outer.contains_room(&Room::new(2, 0, 2, 8, 1, 8)));
  assert!(!outer.contains_room(&Room::new(2, 0, 2, 9, 1, 8)));
}

/// Resize grows dimensions and recenters by half the delta.
#[test]
fn test_room_resize_recenters() {
  let mut room = Room::new(10, 0, 10, 6, 1, 6);
  room.resize(4, 0, 2);
  assert_eq!(room, Room::new(8, 0, 9, 10, 1, 8));
}

/// Resize never produces negative dimensions.
#[test]
fn test_room_resize_clamps_at_zero() {
  let mut room = Room::new(0, 0, 0, 3, 1, 3);
  room.resize(-10, -10, -2);
  assert_eq!(room.width, 0);
  assert_eq!(room.height, 0);
  assert_eq!(room.length, 1);
}

/// Positive shifts trim the low side, negative shifts the high side.
#[test]
fn test_room_shift_size_directional() {
  let mut room = Room::new(0, 0, 0, 10, 4, 10);
  room.shift_size(2, 0, -3);
  assert_eq!(room, Room::new(2, 0, 0, 8, 4, 7));
}

#[test]
fn test_room_shift_size_clamps_at_zero() {
  let mut room = Room::new(0, 0, 0, 2, 1, 2);
  room.shift_size(-5, 0, 5);
  assert_eq!(room.width, 0);
  assert_eq!(room.length, 0);
  assert_eq!(room.z, 5);
}

// =========================================================================
// Rect2
// =========================================================================

#[test]
fn test_rect_from_center_size() {
  let rect = Rect2::from_center_size(Vec2::new(5.0, 5.0), Vec2::new(4.0, 2.0));
  assert_eq!(rect.min, Vec2::new(3.0, 4.0));
  assert_eq!(rect.max, Vec2::new(7.0, 6.0));
  assert_eq!(rect.center(), Vec2::new(5.0, 5.0));
  assert_eq!(rect.size(), Vec2::new(4.0, 2.0));
}

#[test]
fn test_rect_set_center_keeps_size() {
  let mut rect = Rect2::new(Vec2::ZERO, Vec2::new(4.0, 2.0));
  rect.set_center(Vec2::new(10.0, -1.0));
  assert_eq!(rect.center(), Vec2::new(10.0, -1.0));
  assert_eq!(rect.size(), Vec2::new(4.0, 2.0));
}

#[test]
fn test_rect_overlaps_true() {
  let a = Rect2::new(Vec2::ZERO, Vec2::splat(10.0));
  let b = Rect2::new(Vec2::splat(5.0), Vec2::splat(15.0));
  assert!(a.overlaps(&b));
  assert!(b.overlaps(&a));
}

/// Touching at an edge is not an overlap.
#[test]
fn test_rect_overlaps_touching() {
  let a = Rect2::new(Vec2::ZERO, Vec2::splat(10.0));
  let b = Rect2::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
  assert!(!a.overlaps(&b));
  assert!(!b.overlaps(&a));
}

#[test]
fn test_rect_overlaps_false() {
  let a = Rect2::new(Vec2::ZERO, Vec2::splat(10.0));
  let b = Rect2::new(Vec2::splat(11.0), Vec2::splat(20.0));
  assert!(!a.overlaps(&b));
}
