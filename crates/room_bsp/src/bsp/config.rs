//! GenerationConfig - explicit parameters for splitting and generation.
//!
//! Every splitter and driver call takes the config by reference, so parallel
//! generations with different parameters never interfere.

use thiserror::Error;

use crate::constants::{
  DEFAULT_CONTINUE_CHANCE, DEFAULT_MAX_DELTA_VOLUME, DEFAULT_MAX_ITER, DEFAULT_MAX_SIZE,
  DEFAULT_MIN_SIZE,
};

/// How the size-balanced splitter bounds its retries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RetryBound {
  /// At most `max_iter` attempts; the last attempt is kept even when it is
  /// unbalanced.
  #[default]
  Capped,
  /// Retry until the balance gate passes. Nodes where no legal cut can pass
  /// the gate fall back to the `max_iter` budget.
  UntilBalanced,
}

/// Rejected configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
  #[error("min_size must be at least 1, got {0}")]
  MinSizeTooSmall(i32),
  #[error("max_iter must be at least 1")]
  ZeroMaxIter,
  #[error("continue_chance must be within [0, 1], got {0}")]
  ContinueChanceOutOfRange(f64),
  #[error("retry_bound = until_balanced can never accept a split with max_delta_volume = {0}")]
  UnreachableBalance(f32),
  #[error("relax padding must not be negative, got {0}")]
  NegativePadding(i32),
  #[error("relax step must be a positive finite distance, got {0}")]
  InvalidRelaxStep(f32),
}

/// Parameters read by every split attempt.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct GenerationConfig {
  /// Smallest span along the split axis a cut may leave.
  pub min_size: i32,

  /// Nodes wider or longer than this are always split (when possible).
  pub max_size: i32,

  /// Use the size-balanced splitter instead of the unconstrained one.
  pub size_dependent: bool,

  /// Attempt budget for the size-balanced splitter.
  pub max_iter: u32,

  /// Minimum smaller/larger child volume ratio, kept within [0, 1].
  #[cfg_attr(feature = "serde", serde(deserialize_with = "de_unit_interval"))]
  max_delta_volume: f32,

  /// Grow sibling subtrees concurrently on rayon's pool.
  pub threading: bool,

  /// Retry policy for the size-balanced splitter.
  pub retry_bound: RetryBound,

  /// Chance of splitting a node already within `max_size`. 0 disables the
  /// stochastic continuation.
  pub continue_chance: f64,
}

impl GenerationConfig {
  /// Default parameters (size-balanced, sequential).
  pub const DEFAULT: Self = Self {
    min_size: DEFAULT_MIN_SIZE,
    max_size: DEFAULT_MAX_SIZE,
    size_dependent: true,
    max_iter: DEFAULT_MAX_ITER,
    max_delta_volume: DEFAULT_MAX_DELTA_VOLUME,
    threading: false,
    retry_bound: RetryBound::Capped,
    continue_chance: DEFAULT_CONTINUE_CHANCE,
  };

  /// Unconstrained random splits.
  pub const UNBALANCED: Self = Self {
    size_dependent: false,
    ..Self::DEFAULT
  };

  /// Size check only: nodes within `max_size` are never split further.
  pub const SIZE_ONLY: Self = Self {
    continue_chance: 0.0,
    ..Self::DEFAULT
  };

  /// Minimum accepted child volume ratio.
  #[inline]
  pub fn max_delta_volume(&self) -> f32 {
    self.max_delta_volume
  }

  /// Set the minimum accepted child volume ratio, clamped to [0, 1].
  /// NaN is treated as 0.
  pub fn set_max_delta_volume(&mut self, value: f32) {
    self.max_delta_volume = clamp_unit(value);
  }

  /// Builder form of [`Self::set_max_delta_volume`].
  pub fn with_max_delta_volume(mut self, value: f32) -> Self {
    self.set_max_delta_volume(value);
    self
  }

  pub fn with_min_size(mut self, min_size: i32) -> Self {
    self.min_size = min_size;
    self
  }

  pub fn with_max_size(mut self, max_size: i32) -> Self {
    self.max_size = max_size;
    self
  }

  pub fn with_size_dependent(mut self, size_dependent: bool) -> Self {
    self.size_dependent = size_dependent;
    self
  }

  pub fn with_max_iter(mut self, max_iter: u32) -> Self {
    self.max_iter = max_iter;
    self
  }

  pub fn with_threading(mut self, threading: bool) -> Self {
    self.threading = threading;
    self
  }

  pub fn with_retry_bound(mut self, retry_bound: RetryBound) -> Self {
    self.retry_bound = retry_bound;
    self
  }

  pub fn with_continue_chance(mut self, continue_chance: f64) -> Self {
    self.continue_chance = continue_chance;
    self
  }

  /// Reject parameters that would make generation degenerate or unbounded.
  ///
  /// A `min_size` below 1 lets a cut produce an empty child next to one
  /// larger than its parent, which recurses forever. A ratio is at most 1, so
  /// a gate of 1 can never be passed.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.min_size < 1 {
      return Err(ConfigError::MinSizeTooSmall(self.min_size));
    }
    if self.max_iter == 0 {
      return Err(ConfigError::ZeroMaxIter);
    }
    if !(0.0..=1.0).contains(&self.continue_chance) {
      return Err(ConfigError::ContinueChanceOutOfRange(self.continue_chance));
    }
    if self.retry_bound == RetryBound::UntilBalanced && self.max_delta_volume >= 1.0 {
      return Err(ConfigError::UnreachableBalance(self.max_delta_volume));
    }
    Ok(())
  }
}

impl Default for GenerationConfig {
  fn default() -> Self {
    Self::DEFAULT
  }
}

fn clamp_unit(value: f32) -> f32 {
  if value.is_nan() {
    0.0
  } else {
    value.clamp(0.0, 1.0)
  }
}

#[cfg(feature = "serde")]
fn de_unit_interval<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
  D: serde::Deserializer<'de>,
{
  let value = <f32 as serde::Deserialize>::deserialize(deserializer)?;
  Ok(clamp_unit(value))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
