//! Counters collected while growing a tree.

/// Statistics from one generation pass.
///
/// Subtree stats are combined bottom-up, so the same totals come out of the
/// sequential and the fork-join driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
  /// Accepted splits (internal nodes created).
  pub splits: usize,
  /// Cuts discarded by the size-balanced splitter's volume gate.
  pub rejected_splits: usize,
  /// Leaves in the finished tree.
  pub leaves: usize,
  /// Depth of the deepest leaf (root = 0).
  pub max_depth: usize,
  /// Wall-clock time of the pass in microseconds.
  pub elapsed_us: u64,
}

impl GenerationStats {
  /// Stats of a single leaf at the given depth.
  #[inline]
  pub fn leaf(depth: usize) -> Self {
    Self {
      leaves: 1,
      max_depth: depth,
      ..Default::default()
    }
  }

  /// Stats of a node that was split, given its two subtrees.
  #[inline]
  pub fn split(left: Self, right: Self, rejected: usize) -> Self {
    let mut stats = left.merge(right);
    stats.splits += 1;
    stats.rejected_splits += rejected;
    stats
  }

  /// Sum counters of two independent passes or subtrees.
  #[inline]
  pub fn merge(self, other: Self) -> Self {
    Self {
      splits: self.splits + other.splits,
      rejected_splits: self.rejected_splits + other.rejected_splits,
      leaves: self.leaves + other.leaves,
      max_depth: self.max_depth.max(other.max_depth),
      elapsed_us: self.elapsed_us + other.elapsed_us,
    }
  }

  /// Total nodes in the tree.
  #[inline]
  pub fn node_count(&self) -> usize {
    self.splits + self.leaves
  }
}
