//! Top-level decomposition driver: sample, build, simplify, emit.
//!
//! The whole run is single-threaded and synchronous: it happens once during
//! a load phase and blocks until the complete box set exists. The tree is
//! dropped before returning; only the descriptors survive.

use tracing::debug;

use crate::config::MapConfig;
use crate::error::DecomposeError;
use crate::grid::{Classifier, PixelSource};
use crate::quadtree::{build, emit_boxes, simplify, BoxDescriptor, CellRect, QuadTree};

/// Statistics from one decomposition run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecomposeStats {
  /// Quadtree nodes allocated during the build, including invalidated ones.
  pub nodes_allocated: usize,
  /// Reduction passes until the merge fixed point.
  pub merge_passes: usize,
  /// Leaf pairs coalesced by the merger.
  pub merges_performed: usize,
  /// Valid leaves left after simplification.
  pub leaves_remaining: usize,
  /// Box descriptors emitted (occupied leaves only).
  pub boxes_emitted: usize,
}

/// Result of one decomposition run.
#[derive(Debug)]
pub struct DecomposeOutput {
  /// Ordered box descriptors for the geometry factory.
  pub boxes: Vec<BoxDescriptor>,
  /// Run statistics.
  pub stats: DecomposeStats,
}

/// Decompose an occupancy source into static obstacle boxes.
///
/// Out-of-range options are clamped (with a warning) rather than rejected;
/// an empty source is fatal and emits no geometry. Geometry names restart
/// at `map_box_0` for every run - callers interleaving several runs into
/// one scene should instead drive [`emit_boxes`] with a shared counter.
#[tracing::instrument(skip_all, name = "map::decompose")]
pub fn decompose<S: PixelSource>(
  source: &S,
  config: &MapConfig,
) -> Result<DecomposeOutput, DecomposeError> {
  let (width, height) = (source.width(), source.height());
  if width == 0 || height == 0 {
    return Err(DecomposeError::EmptySource { width, height });
  }

  let config = config.sanitized();
  let classifier = Classifier {
    threshold: config.threshold,
    negative: config.negative,
  };

  let mut tree = QuadTree::new(CellRect::new(0, 0, width, height));
  let root = tree.root();
  build(&mut tree, source, &classifier, config.granularity, root);
  debug!(nodes = tree.len(), "quadtree built");

  let simplify_stats = simplify(&mut tree);

  let mut seq = 0;
  let boxes: Vec<BoxDescriptor> = emit_boxes(&tree, &config, &mut seq).collect();

  let stats = DecomposeStats {
    nodes_allocated: tree.len(),
    merge_passes: simplify_stats.passes,
    merges_performed: simplify_stats.merges,
    leaves_remaining: tree.valid_leaves().count(),
    boxes_emitted: boxes.len(),
  };
  debug!(?stats, "decomposition complete");

  Ok(DecomposeOutput { boxes, stats })
}

#[cfg(test)]
#[path = "decompose_test.rs"]
mod decompose_test;
