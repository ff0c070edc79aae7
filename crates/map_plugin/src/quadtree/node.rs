//! QuadNode and the flat arena holding the tree.
//!
//! Nodes live in a single `Vec`; parent/child links are arena indices, never
//! pointers. Removal is a soft delete: a node is marked invalid and later
//! dropped from its parent's child list by compaction, so no child sequence
//! is ever erased while a pass is iterating over it.

use smallvec::SmallVec;

use super::CellRect;

/// Index of a node in its [`QuadTree`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
  #[inline]
  fn index(self) -> usize {
    self.0 as usize
  }
}

/// One rectangular region of the occupancy grid.
#[derive(Clone, Debug)]
pub struct QuadNode {
  /// Region covered by this node, in grid cells.
  pub bounds: CellRect,
  /// Occupancy state; meaningful only when `leaf` is true. Decided once at
  /// build time - merges only grow `bounds`.
  pub occupied: bool,
  /// True iff the node has no children.
  pub leaf: bool,
  /// Soft-delete flag. Once false the node is logically out of the tree;
  /// it is never revalidated.
  pub valid: bool,
  /// Containing node; `None` for the root.
  pub parent: Option<NodeId>,
  /// Child nodes. Four at build time; flattening can splice in more.
  pub children: SmallVec<[NodeId; 4]>,
}

impl QuadNode {
  fn new(bounds: CellRect, parent: Option<NodeId>) -> Self {
    Self {
      bounds,
      occupied: false,
      leaf: true,
      valid: true,
      parent,
      children: SmallVec::new(),
    }
  }
}

/// Arena-backed quadtree.
///
/// The root always exists and spans the full grid extent. The arena only
/// grows; invalidated nodes stay allocated until the tree is dropped, which
/// keeps `NodeId`s stable for the whole decomposition run.
pub struct QuadTree {
  nodes: Vec<QuadNode>,
}

impl QuadTree {
  /// Create a tree whose root spans `bounds`.
  pub fn new(bounds: CellRect) -> Self {
    Self {
      nodes: vec![QuadNode::new(bounds, None)],
    }
  }

  /// Root node id.
  #[inline]
  pub fn root(&self) -> NodeId {
    NodeId(0)
  }

  /// Number of allocated nodes, including invalidated ones.
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  /// Always false: the root is allocated up front.
  pub fn is_empty(&self) -> bool {
    false
  }

  /// Shared access to a node.
  #[inline]
  pub fn node(&self, id: NodeId) -> &QuadNode {
    &self.nodes[id.index()]
  }

  /// Mutable access to a node.
  #[inline]
  pub fn node_mut(&mut self, id: NodeId) -> &mut QuadNode {
    &mut self.nodes[id.index()]
  }

  /// Allocate a child of `parent` covering `bounds` and append it to the
  /// parent's child list.
  pub fn alloc_child(&mut self, parent: NodeId, bounds: CellRect) -> NodeId {
    let id = NodeId(self.nodes.len() as u32);
    self.nodes.push(QuadNode::new(bounds, Some(parent)));
    self.nodes[parent.index()].children.push(id);
    id
  }

  /// Drop invalidated entries from a node's child list, preserving the
  /// relative order of the rest.
  pub fn compact_children(&mut self, id: NodeId) {
    let children = std::mem::take(&mut self.nodes[id.index()].children);
    let kept: SmallVec<[NodeId; 4]> = children
      .into_iter()
      .filter(|&c| self.nodes[c.index()].valid)
      .collect();
    self.nodes[id.index()].children = kept;
  }

  /// Ids of all valid leaves, in arena order.
  ///
  /// Every valid leaf is reachable from the root (flattening invalidates
  /// the detached interior node), so an arena scan is equivalent to a tree
  /// walk for leaf-set queries.
  pub fn valid_leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
    self
      .nodes
      .iter()
      .enumerate()
      .filter(|(_, n)| n.valid && n.leaf)
      .map(|(i, _)| NodeId(i as u32))
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
