//! End-to-end decomposition scenarios over small synthetic grids.

use glam::DVec3;

use crate::decompose::decompose;
use crate::grid::LumaGrid;
use crate::MapConfig;

fn world_area(boxes: &[crate::BoxDescriptor]) -> f64 {
  boxes.iter().map(|b| b.size.x * b.size.y).sum()
}

/// Uniformly occupied 4x4 grid at granularity 4: the builder makes four 2x2
/// leaves and the merger coalesces them, so at most 4 boxes come out and
/// their areas sum to the full grid.
#[test]
fn test_scenario_all_occupied() {
  let grid = LumaGrid::new(4, 4, 0.0);
  let config = MapConfig {
    granularity: 4,
    ..MapConfig::default()
  };

  let output = decompose(&grid, &config).unwrap();

  assert!(!output.boxes.is_empty());
  assert!(output.boxes.len() <= 4);
  assert_eq!(world_area(&output.boxes), 16.0);
  assert!(output.stats.merges_performed > 0);
}

/// Left half occupied, right half free: exactly one box covering the
/// occupied half, nothing for the free half.
#[test]
fn test_scenario_half_occupied() {
  let mut grid = LumaGrid::new(4, 4, 1.0);
  for y in 0..4 {
    grid.set(0, y, 0.0);
    grid.set(1, y, 0.0);
  }
  let config = MapConfig {
    granularity: 4,
    ..MapConfig::default()
  };

  let output = decompose(&grid, &config).unwrap();

  assert_eq!(output.boxes.len(), 1);
  let b = &output.boxes[0];
  assert_eq!(b.size, DVec3::new(2.0, 4.0, 1.0));
  assert_eq!(b.center, DVec3::new(1.0, 2.0, 0.5));
}

/// 2x2 checkerboard at granularity 1: no two occupied cells share a full
/// edge, so nothing merges and each occupied cell becomes a unit box.
#[test]
fn test_scenario_checkerboard() {
  let mut grid = LumaGrid::new(2, 2, 1.0);
  grid.set(0, 0, 0.0);
  grid.set(1, 1, 0.0);
  let config = MapConfig {
    granularity: 1,
    ..MapConfig::default()
  };

  let output = decompose(&grid, &config).unwrap();

  assert_eq!(output.boxes.len(), 2);
  assert_eq!(output.stats.merges_performed, 0);
  for b in &output.boxes {
    assert_eq!(b.size, DVec3::new(1.0, 1.0, 1.0));
  }
}

/// Negative mode on an all-white image inverts every sample to 0, so the
/// whole grid is occupied and collapses into one full-extent box.
#[test]
fn test_scenario_negative_all_white() {
  let grid = LumaGrid::new(4, 4, 1.0);
  let config = MapConfig {
    negative: true,
    granularity: 16,
    ..MapConfig::default()
  };

  let output = decompose(&grid, &config).unwrap();

  assert_eq!(output.boxes.len(), 1);
  assert_eq!(output.boxes[0].size, DVec3::new(4.0, 4.0, 1.0));
}

/// Emission filter: the box count equals the occupied leaf count and never
/// exceeds the total leaf count after simplification.
#[test]
fn test_emission_filter_property() {
  let mut grid = LumaGrid::new(8, 8, 1.0);
  for y in 0..8 {
    for x in 0..8 {
      if (x / 2 + y / 3) % 2 == 0 {
        grid.set(x, y, 0.0);
      }
    }
  }
  let config = MapConfig {
    granularity: 2,
    ..MapConfig::default()
  };

  let output = decompose(&grid, &config).unwrap();

  assert_eq!(output.stats.boxes_emitted, output.boxes.len());
  assert!(output.stats.boxes_emitted <= output.stats.leaves_remaining);
}
