//! Leaf iteration and room extraction.

use super::BspNode;
use crate::types::Room;

/// Pre-order, left-before-right iterator over the leaves of a tree.
///
/// Uses an explicit stack, so deep trees do not grow the call stack.
pub struct Leaves<'a> {
  stack: Vec<&'a BspNode>,
}

impl<'a> Leaves<'a> {
  fn new(root: &'a BspNode) -> Self {
    Self { stack: vec![root] }
  }
}

impl<'a> Iterator for Leaves<'a> {
  type Item = &'a BspNode;

  fn next(&mut self) -> Option<Self::Item> {
    while let Some(node) = self.stack.pop() {
      match node.children() {
        None => return Some(node),
        Some([left, right]) => {
          // Right first so left is visited first.
          self.stack.push(right);
          self.stack.push(left);
        }
      }
    }
    None
  }
}

impl BspNode {
  /// Iterate the leaves of this subtree.
  pub fn leaves(&self) -> Leaves<'_> {
    Leaves::new(self)
  }
}

/// One room per leaf, at the leaf's box (height included).
///
/// Order is pre-order, left before right. Callers should not rely on it.
pub fn extract_rooms(root: &BspNode) -> Vec<Room> {
  let rooms: Vec<Room> = root.leaves().map(|leaf| *leaf.bounds()).collect();
  tracing::trace!(count = rooms.len(), "extracted rooms");
  rooms
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;
