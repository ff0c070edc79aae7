//! Quadtree construction from an occupancy source.
//!
//! Regions larger than the configured granularity are split into four
//! quadrants (floor/ceil halving, so odd extents are conserved); regions at
//! or below it become leaves classified by their sampled cell counts.

use tracing::trace;

use crate::grid::{sample_region, Classifier, PixelSource};
use crate::quadtree::{NodeId, QuadTree};

/// Build the subtree under `start` down to `granularity`.
///
/// Uses an explicit work stack, so depth is bounded by memory rather than
/// the native call stack. `granularity` is the minimum region area (cells)
/// below which no further split occurs; callers must pass a value >= 1.
///
/// Quadrants that come out with zero width or height (odd extents at the
/// grid edge with small granularity) are allocated and immediately
/// invalidated: they cover no cells and must not join any merge.
pub fn build<S: PixelSource>(
  tree: &mut QuadTree,
  source: &S,
  classifier: &Classifier,
  granularity: u32,
  start: NodeId,
) {
  debug_assert!(granularity >= 1, "granularity must be positive");

  let mut stack = vec![start];
  while let Some(id) = stack.pop() {
    let bounds = tree.node(id).bounds;

    if bounds.area() > u64::from(granularity) {
      let node = tree.node_mut(id);
      node.leaf = false;
      node.occupied = false;

      for quadrant in bounds.split_quad() {
        let child = tree.alloc_child(id, quadrant);
        if quadrant.is_degenerate() {
          trace!(?quadrant, "degenerate quadrant invalidated");
          tree.node_mut(child).valid = false;
        } else {
          stack.push(child);
        }
      }
    } else {
      let counts = sample_region(source, classifier, bounds);
      let node = tree.node_mut(id);
      node.leaf = true;
      node.occupied = counts.occupied > 0;
    }
  }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
