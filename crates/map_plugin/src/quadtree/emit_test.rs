use glam::DVec3;

use super::*;
use crate::config::MapConfig;
use crate::quadtree::CellRect;

fn config(scale: f64, height: f64, material: &str) -> MapConfig {
  MapConfig {
    scale,
    height,
    material: material.to_string(),
    ..MapConfig::default()
  }
}

fn occupied_leaf(tree: &mut QuadTree, parent: NodeId, bounds: CellRect) -> NodeId {
  let id = tree.alloc_child(parent, bounds);
  tree.node_mut(id).occupied = true;
  id
}

/// Center and size follow the grid-to-world mapping: center xy at the region
/// midpoint scaled, z at half the wall height; size xy scaled, z the full
/// wall height.
#[test]
fn test_descriptor_geometry() {
  let mut tree = QuadTree::new(CellRect::new(0, 0, 4, 2));
  let root = tree.root();
  tree.node_mut(root).occupied = true;

  let config = config(2.0, 3.0, "walls/brick");
  let mut seq = 0;
  let boxes: Vec<BoxDescriptor> = emit_boxes(&tree, &config, &mut seq).collect();

  assert_eq!(boxes.len(), 1);
  let b = &boxes[0];
  assert_eq!(b.center, DVec3::new(4.0, 2.0, 1.5));
  assert_eq!(b.size, DVec3::new(8.0, 4.0, 3.0));
  assert_eq!(b.material, "walls/brick");
  assert!(b.is_static);
}

/// Free leaves and invalidated nodes yield no descriptor at all.
#[test]
fn test_emission_filter() {
  let mut tree = QuadTree::new(CellRect::new(0, 0, 4, 4));
  let root = tree.root();
  tree.node_mut(root).leaf = false;

  occupied_leaf(&mut tree, root, CellRect::new(0, 0, 2, 2));
  tree.alloc_child(root, CellRect::new(2, 0, 2, 2)); // free leaf
  let dead = occupied_leaf(&mut tree, root, CellRect::new(0, 2, 2, 2));
  tree.node_mut(dead).valid = false;
  occupied_leaf(&mut tree, root, CellRect::new(2, 2, 2, 2));

  let config = config(1.0, 1.0, "");
  let mut seq = 0;
  let boxes: Vec<BoxDescriptor> = emit_boxes(&tree, &config, &mut seq).collect();

  assert_eq!(boxes.len(), 2);
  assert!(boxes.len() <= tree.valid_leaves().count());
}

/// Names number boxes in emission order, and a shared counter keeps names
/// distinct across consecutive runs.
#[test]
fn test_name_sequence_threads_through_runs() {
  let mut tree = QuadTree::new(CellRect::new(0, 0, 4, 2));
  let root = tree.root();
  tree.node_mut(root).leaf = false;
  occupied_leaf(&mut tree, root, CellRect::new(0, 0, 2, 2));
  occupied_leaf(&mut tree, root, CellRect::new(2, 0, 2, 2));

  let config = config(1.0, 1.0, "");
  let mut seq = 0;

  let first: Vec<String> = emit_boxes(&tree, &config, &mut seq)
    .map(|b| b.name)
    .collect();
  assert_eq!(first, vec!["map_box_0", "map_box_1"]);

  let second: Vec<String> = emit_boxes(&tree, &config, &mut seq)
    .map(|b| b.name)
    .collect();
  assert_eq!(second, vec!["map_box_2", "map_box_3"]);
}

/// Emission is a pre-order walk: descriptors come out in child order.
#[test]
fn test_emission_order_is_pre_order() {
  let mut tree = QuadTree::new(CellRect::new(0, 0, 6, 2));
  let root = tree.root();
  tree.node_mut(root).leaf = false;

  occupied_leaf(&mut tree, root, CellRect::new(0, 0, 2, 2));
  occupied_leaf(&mut tree, root, CellRect::new(2, 0, 2, 2));
  occupied_leaf(&mut tree, root, CellRect::new(4, 0, 2, 2));

  let config = config(1.0, 1.0, "");
  let mut seq = 0;
  let xs: Vec<f64> = emit_boxes(&tree, &config, &mut seq)
    .map(|b| b.center.x)
    .collect();
  assert_eq!(xs, vec![1.0, 3.0, 5.0]);
}
