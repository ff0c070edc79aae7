//! Fixed-point simplification of a built quadtree.
//!
//! One reduction pass walks the tree depth-first. Interior nodes whose
//! children have all bottomed out into leaves are flattened away, splicing
//! the leaves one level up so merges can cross what was originally a split
//! boundary. Leaves try to absorb same-state leaves anywhere in the parent's
//! subtree that continue them rightward or downward with a matching
//! perpendicular extent.
//!
//! Passes repeat until one completes without a merge. A single pass walks
//! the parent subtree while it is being modified, so two mergeable leaves
//! are not guaranteed to merge within that pass - only eventually, across
//! repeated passes. Each merge strictly decreases the valid leaf count, so
//! the loop terminates.

use smallvec::SmallVec;
use tracing::debug;

use super::{NodeId, QuadTree};

/// Statistics from a simplification run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimplifyStats {
  /// Reduction passes executed, including the final no-change pass.
  pub passes: usize,
  /// Leaf pairs coalesced across all passes.
  pub merges: usize,
}

/// Reduce the tree to a fixed point.
pub fn simplify(tree: &mut QuadTree) -> SimplifyStats {
  let mut stats = SimplifyStats::default();
  loop {
    stats.passes += 1;
    let merges = reduce(tree, tree.root());
    stats.merges += merges;
    if merges == 0 {
      break;
    }
  }
  debug!(
    passes = stats.passes,
    merges = stats.merges,
    "simplification reached fixed point"
  );
  stats
}

/// One depth-first reduction of the subtree under `id`.
///
/// Returns the number of merges performed; only merges drive the outer
/// fixed-point loop.
fn reduce(tree: &mut QuadTree, id: NodeId) -> usize {
  if !tree.node(id).valid {
    return 0;
  }

  let mut merges = 0;

  if tree.node(id).leaf {
    if let Some(parent) = tree.node(id).parent {
      merges += merge_into_subtree(tree, id, parent);
    }
    return merges;
  }

  // Snapshot: flattening grandchildren splices new entries into this list
  // mid-loop; those are visited next pass.
  let snapshot: SmallVec<[NodeId; 4]> = tree.node(id).children.clone();
  for child in snapshot {
    if tree.node(child).valid {
      merges += reduce(tree, child);
    }
  }

  tree.compact_children(id);

  // Once a whole quadrant has bottomed out into leaves, remove this level
  // so the leaves can merge across the next split boundary up. The root
  // stays put. A node whose children were all absorbed elsewhere in the
  // subtree flattens vacuously.
  let all_leaves = tree
    .node(id)
    .children
    .iter()
    .all(|&c| tree.node(c).leaf);
  if tree.node(id).parent.is_some() && all_leaves {
    flatten(tree, id);
  }

  merges
}

/// Re-parent every child of `id` directly under `id`'s parent and mark `id`
/// invalid. The stale entry for `id` in the parent's child list is dropped
/// by the parent's own compaction.
fn flatten(tree: &mut QuadTree, id: NodeId) {
  let parent = match tree.node(id).parent {
    Some(p) => p,
    None => return,
  };
  let children = std::mem::take(&mut tree.node_mut(id).children);
  for &child in &children {
    tree.node_mut(child).parent = Some(parent);
  }
  tree.node_mut(parent).children.extend(children);
  tree.node_mut(id).valid = false;
}

/// Try to grow leaf `a` by absorbing leaves from the subtree under `b`.
///
/// A candidate must be a valid leaf with the same occupancy as `a` and
/// continue `a` exactly rightward or downward. Absorbing invalidates the
/// candidate and keeps scanning, so `a` can take several candidates in one
/// call. The downward test runs after the rightward one and sees `a`'s
/// already-widened bounds.
fn merge_into_subtree(tree: &mut QuadTree, a: NodeId, b: NodeId) -> usize {
  let mut merges = 0;

  if tree.node(b).leaf {
    if tree.node(b).occupied != tree.node(a).occupied {
      return 0;
    }

    let candidate = tree.node(b).bounds;
    if tree.node(a).bounds.extends_right(&candidate) {
      tree.node_mut(a).bounds.width += candidate.width;
      tree.node_mut(b).valid = false;
      merges += 1;
    }
    if tree.node(a).bounds.extends_down(&candidate) {
      tree.node_mut(a).bounds.height += candidate.height;
      tree.node_mut(b).valid = false;
      merges += 1;
    }
    return merges;
  }

  let snapshot: SmallVec<[NodeId; 4]> = tree.node(b).children.clone();
  for child in snapshot {
    if child != a && tree.node(child).valid {
      merges += merge_into_subtree(tree, a, child);
    }
  }
  merges
}

#[cfg(test)]
#[path = "merge_test.rs"]
mod merge_test;
