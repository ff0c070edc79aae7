//! Box descriptor emission for occupied leaves.
//!
//! Walks the simplified tree in pre-order and yields one world-space box per
//! occupied valid leaf. The iterator is lazy and finite; the caller's
//! geometry factory consumes it exactly once.

use glam::DVec3;

use crate::config::MapConfig;

use super::{NodeId, QuadTree};

/// World-space description of one static obstacle box.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxDescriptor {
  /// Geometry name, unique within one decomposition run.
  pub name: String,
  /// Box center in world units; z is half the wall height.
  pub center: DVec3,
  /// Box extents in world units; z is the wall height.
  pub size: DVec3,
  /// Visual material name, passed through untouched.
  pub material: String,
  /// Obstacles generated this way are immovable.
  pub is_static: bool,
}

/// Lazy iterator over the occupied leaves of a simplified tree.
///
/// Created by [`emit_boxes`]. Free leaves and invalidated nodes yield
/// nothing.
pub struct BoxEmitter<'a> {
  tree: &'a QuadTree,
  stack: Vec<NodeId>,
  /// Name sequence, threaded in by the caller so numbering is scoped to one
  /// decomposition run rather than process-wide.
  seq: &'a mut u32,
  scale: f64,
  wall_height: f64,
  material: &'a str,
}

/// Emit box descriptors for every occupied valid leaf of `tree`.
///
/// `seq` supplies the geometry name counter; it is advanced once per
/// emitted box, so chaining runs through the same counter keeps names
/// distinct.
pub fn emit_boxes<'a>(
  tree: &'a QuadTree,
  config: &'a MapConfig,
  seq: &'a mut u32,
) -> BoxEmitter<'a> {
  BoxEmitter {
    tree,
    stack: vec![tree.root()],
    seq,
    scale: config.scale,
    wall_height: config.height,
    material: &config.material,
  }
}

impl Iterator for BoxEmitter<'_> {
  type Item = BoxDescriptor;

  fn next(&mut self) -> Option<BoxDescriptor> {
    while let Some(id) = self.stack.pop() {
      let node = self.tree.node(id);
      if !node.valid {
        continue;
      }

      if !node.leaf {
        // Reversed push keeps pre-order traversal.
        for &child in node.children.iter().rev() {
          self.stack.push(child);
        }
        continue;
      }

      if !node.occupied {
        continue;
      }

      let b = node.bounds;
      let center = DVec3::new(
        (f64::from(b.x) + f64::from(b.width) / 2.0) * self.scale,
        (f64::from(b.y) + f64::from(b.height) / 2.0) * self.scale,
        self.wall_height / 2.0,
      );
      let size = DVec3::new(
        f64::from(b.width) * self.scale,
        f64::from(b.height) * self.scale,
        self.wall_height,
      );

      let name = format!("map_box_{}", *self.seq);
      *self.seq += 1;

      return Some(BoxDescriptor {
        name,
        center,
        size,
        material: self.material.to_owned(),
        is_static: true,
      });
    }
    None
  }
}

#[cfg(test)]
#[path = "emit_test.rs"]
mod emit_test;
