//! Recursive generation driver.
//!
//! # Stopping Rule
//!
//! A node is split when it is wider or longer than `max_size`, or otherwise
//! with probability `continue_chance`. Recursion ends where a split attempt
//! fails (node too small) or the rule says stop.
//!
//! # RNG Streams
//!
//! Before recursing, the driver forks one generator per child from the
//! parent's generator. Each subtree then consumes only its own stream, so
//! the tree shape for a fixed seed does not depend on execution order and
//! `threading` only changes wall-clock time.

use rand::{Rng, SeedableRng};
use web_time::Instant;

use super::{BspNode, ConfigError, GenerationConfig, GenerationStats};

/// Grow the tree under `root` in place.
///
/// Returns statistics for the pass, or the reason the config was rejected
/// (in which case the tree is untouched).
#[tracing::instrument(skip_all, name = "bsp::generate", fields(root = root.debug_id().raw()))]
pub fn generate<R>(
  root: &mut BspNode,
  config: &GenerationConfig,
  rng: &mut R,
) -> Result<GenerationStats, ConfigError>
where
  R: Rng + SeedableRng + Send,
{
  config.validate()?;

  let start = Instant::now();
  let mut stats = grow(root, config, rng, 0);
  stats.elapsed_us = start.elapsed().as_micros() as u64;

  tracing::debug!(
    splits = stats.splits,
    rejected = stats.rejected_splits,
    leaves = stats.leaves,
    max_depth = stats.max_depth,
    elapsed_us = stats.elapsed_us,
    threading = config.threading,
    "bsp generation finished"
  );
  Ok(stats)
}

/// Size test first; the random draw only happens for nodes already within
/// `max_size`.
fn wants_split<R: Rng + ?Sized>(node: &BspNode, config: &GenerationConfig, rng: &mut R) -> bool {
  node.width() > config.max_size
    || node.length() > config.max_size
    || rng.random::<f64>() < config.continue_chance
}

fn grow<R>(node: &mut BspNode, config: &GenerationConfig, rng: &mut R, depth: usize) -> GenerationStats
where
  R: Rng + SeedableRng + Send,
{
  if !wants_split(node, config, rng) {
    return GenerationStats::leaf(depth);
  }
  let Some((mut children, rejected)) = node.cut_with(config, rng) else {
    return GenerationStats::leaf(depth);
  };

  tracing::trace!(
    node = node.debug_id().raw(),
    depth,
    rejected,
    "split"
  );

  let mut left_rng = R::from_rng(rng);
  let mut right_rng = R::from_rng(rng);
  let [left, right] = &mut children;

  let (left_stats, right_stats) = if config.threading {
    rayon::join(
      || grow(left, config, &mut left_rng, depth + 1),
      || grow(right, config, &mut right_rng, depth + 1),
    )
  } else {
    (
      grow(left, config, &mut left_rng, depth + 1),
      grow(right, config, &mut right_rng, depth + 1),
    )
  };

  node.attach(children);
  GenerationStats::split(left_stats, right_stats, rejected)
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;
