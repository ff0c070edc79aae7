//! Integer cell rectangle for quadtree regions.

/// Axis-aligned rectangle in grid-cell units.
///
/// Coordinates and extents are cell indices/counts; the rectangle covers the
/// half-open ranges `[x, x + width)` and `[y, y + height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
  /// Left edge in cells.
  pub x: u32,
  /// Top edge in cells.
  pub y: u32,
  /// Width in cells.
  pub width: u32,
  /// Height in cells.
  pub height: u32,
}

impl CellRect {
  /// Create a new rectangle.
  pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
    Self {
      x,
      y,
      width,
      height,
    }
  }

  /// Area in cells.
  #[inline]
  pub fn area(&self) -> u64 {
    u64::from(self.width) * u64::from(self.height)
  }

  /// A rectangle with zero width or height covers no cells.
  #[inline]
  pub fn is_degenerate(&self) -> bool {
    self.width == 0 || self.height == 0
  }

  /// Split into four quadrants: two columns x two rows.
  ///
  /// The first column/row takes `floor(extent / 2)` cells and the second
  /// takes `ceil(extent / 2)`, so the halves always sum to the original
  /// extent. Order: top-left, top-right, bottom-left, bottom-right.
  /// Quadrants at the edge of an odd 1-cell extent come out degenerate.
  pub fn split_quad(&self) -> [CellRect; 4] {
    let w0 = self.width / 2;
    let w1 = self.width - w0;
    let h0 = self.height / 2;
    let h1 = self.height - h0;
    [
      CellRect::new(self.x, self.y, w0, h0),
      CellRect::new(self.x + w0, self.y, w1, h0),
      CellRect::new(self.x, self.y + h0, w0, h1),
      CellRect::new(self.x + w0, self.y + h0, w1, h1),
    ]
  }

  /// Check if `other` continues this rectangle to the right with the same
  /// vertical extent (merging them widens this rectangle).
  #[inline]
  pub fn extends_right(&self, other: &CellRect) -> bool {
    other.x == self.x + self.width && other.y == self.y && other.height == self.height
  }

  /// Check if `other` continues this rectangle downward with the same
  /// horizontal extent (merging them heightens this rectangle).
  #[inline]
  pub fn extends_down(&self, other: &CellRect) -> bool {
    other.x == self.x && other.width == self.width && other.y == self.y + self.height
  }
}
