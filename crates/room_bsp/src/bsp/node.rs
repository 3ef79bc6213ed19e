//! BspNode - one volume of the partition tree.
//!
//! A node is either a leaf (no children) or internal (exactly two children).
//! The one-child state is unrepresentable: children live in a single boxed
//! pair.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::Room;

/// Atomic counter for generating NodeIds.
static NODE_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Diagnostic node identifier.
///
/// Monotonically increasing within the process lifetime. Not used for any
/// generation decision.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(u64);

impl NodeId {
  fn next() -> Self {
    Self(NODE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
  }

  /// Get the raw ID value.
  pub fn raw(&self) -> u64 {
    self.0
  }
}

/// Node of the BSP tree.
///
/// The node's box is final while it is a leaf. Once split, the box only
/// records the volume the children were cut from.
#[derive(Debug)]
pub struct BspNode {
  bounds: Room,
  children: Option<Box<[BspNode; 2]>>,
  debug_id: NodeId,
}

impl BspNode {
  /// Create a leaf from explicit box coordinates.
  pub fn new(x: i32, y: i32, z: i32, width: i32, height: i32, length: i32) -> Self {
    Self::from_room(Room::new(x, y, z, width, height, length))
  }

  /// Create a leaf covering an existing room's box (height included).
  pub fn from_room(room: Room) -> Self {
    Self {
      bounds: room,
      children: None,
      debug_id: NodeId::next(),
    }
  }

  /// The node's box.
  #[inline]
  pub fn bounds(&self) -> &Room {
    &self.bounds
  }

  #[inline]
  pub fn width(&self) -> i32 {
    self.bounds.width
  }

  #[inline]
  pub fn height(&self) -> i32 {
    self.bounds.height
  }

  #[inline]
  pub fn length(&self) -> i32 {
    self.bounds.length
  }

  /// Diagnostic identifier assigned at construction.
  #[inline]
  pub fn debug_id(&self) -> NodeId {
    self.debug_id
  }

  /// True iff the node has no children.
  #[inline]
  pub fn is_leaf(&self) -> bool {
    self.children.is_none()
  }

  /// Both children, if the node has been split.
  #[inline]
  pub fn children(&self) -> Option<&[BspNode; 2]> {
    self.children.as_deref()
  }

  /// First child (low side of the cut).
  pub fn left(&self) -> Option<&BspNode> {
    self.children().map(|[left, _]| left)
  }

  /// Second child (high side of the cut).
  pub fn right(&self) -> Option<&BspNode> {
    self.children().map(|[_, right]| right)
  }

  /// Turn a leaf into an internal node. Called only by the splitters.
  pub(crate) fn attach(&mut self, children: [BspNode; 2]) {
    debug_assert!(self.is_leaf(), "Node {:?} is already split", self.debug_id);
    self.children = Some(Box::new(children));
  }

  /// Number of leaves in this subtree.
  pub fn leaf_count(&self) -> usize {
    match self.children() {
      None => 1,
      Some([left, right]) => left.leaf_count() + right.leaf_count(),
    }
  }

  /// Number of nodes (internal and leaf) in this subtree.
  pub fn node_count(&self) -> usize {
    match self.children() {
      None => 1,
      Some([left, right]) => 1 + left.node_count() + right.node_count(),
    }
  }

  /// Depth of the deepest leaf below this node (a lone leaf has depth 0).
  pub fn depth(&self) -> usize {
    match self.children() {
      None => 0,
      Some([left, right]) => 1 + left.depth().max(right.depth()),
    }
  }
}

impl From<Room> for BspNode {
  fn from(room: Room) -> Self {
    Self::from_room(room)
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
