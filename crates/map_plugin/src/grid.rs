//! Pixel source boundary and free/occupied classification.
//!
//! Decoding an image file into pixel samples is the caller's job; the core
//! only sees a [`PixelSource`]. Classification follows the original map
//! shape rule: luminance = mean of the RGB channels scaled to [0, 255],
//! optionally inverted, free iff strictly above the threshold.

use crate::quadtree::CellRect;

/// Read-only source of normalized pixel samples.
///
/// Implementations must return channel values in [0.0, 1.0] for every
/// coordinate inside `width() x height()`.
pub trait PixelSource {
  /// Grid width in cells.
  fn width(&self) -> u32;
  /// Grid height in cells.
  fn height(&self) -> u32;
  /// Normalized RGB channel samples at (x, y).
  fn rgb(&self, x: u32, y: u32) -> [f32; 3];
}

/// In-memory grayscale pixel source.
///
/// Useful for procedurally generated maps and tests; stores one normalized
/// luminance value per cell.
pub struct LumaGrid {
  width: u32,
  height: u32,
  data: Vec<f32>,
}

impl LumaGrid {
  /// Create a grid filled with a uniform luminance value.
  pub fn new(width: u32, height: u32, fill: f32) -> Self {
    Self {
      width,
      height,
      data: vec![fill; (width as usize) * (height as usize)],
    }
  }

  /// Set the luminance at (x, y).
  ///
  /// # Panics
  /// Panics if (x, y) is outside the grid.
  pub fn set(&mut self, x: u32, y: u32, luma: f32) {
    let idx = (y as usize) * (self.width as usize) + x as usize;
    self.data[idx] = luma;
  }
}

impl PixelSource for LumaGrid {
  fn width(&self) -> u32 {
    self.width
  }

  fn height(&self) -> u32 {
    self.height
  }

  fn rgb(&self, x: u32, y: u32) -> [f32; 3] {
    let idx = (y as usize) * (self.width as usize) + x as usize;
    let l = self.data[idx];
    [l, l, l]
  }
}

/// Free/occupied cell classifier.
///
/// `threshold` is on the 0-255 luminance scale; `negative` complements the
/// luminance before comparing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classifier {
  /// Luminance cut between free and occupied.
  pub threshold: f64,
  /// Invert luminance before classification.
  pub negative: bool,
}

impl Classifier {
  /// Classify one cell: `true` = occupied.
  ///
  /// Luminance is truncated to u8 before the comparison, matching the
  /// integer pixel math of the source imagery.
  pub fn is_occupied(&self, rgb: [f32; 3]) -> bool {
    let mean = f64::from(rgb[0] + rgb[1] + rgb[2]) / 3.0;
    let mut v = (255.0 * mean) as u8;
    if self.negative {
      v = 255 - v;
    }
    f64::from(v) <= self.threshold
  }
}

/// Free/occupied cell counts for a sampled region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegionCounts {
  /// Cells strictly above the threshold.
  pub free: u32,
  /// Cells at or below the threshold.
  pub occupied: u32,
}

/// Count free and occupied cells in the half-open rectangle `rect`.
///
/// The rectangle must lie within the source bounds. A zero-area rectangle
/// yields `(0, 0)`. Read-only; safe to call repeatedly.
pub fn sample_region<S: PixelSource>(
  source: &S,
  classifier: &Classifier,
  rect: CellRect,
) -> RegionCounts {
  debug_assert!(
    rect.x + rect.width <= source.width() && rect.y + rect.height <= source.height(),
    "sample region must lie within the source"
  );

  let mut counts = RegionCounts::default();
  for y in rect.y..rect.y + rect.height {
    for x in rect.x..rect.x + rect.width {
      if classifier.is_occupied(source.rgb(x, y)) {
        counts.occupied += 1;
      } else {
        counts.free += 1;
      }
    }
  }
  counts
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
