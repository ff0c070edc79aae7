//! map_plugin - Framework/engine independent occupancy-map decomposition
//!
//! This crate converts a 2D occupancy bitmap (e.g. a black/white floor-plan
//! image) into a minimal set of axis-aligned boxes suitable as static
//! collision/visual geometry. The pipeline is:
//!
//! 1. **Sample**: classify grid cells as free/occupied from luminance
//! 2. **Build**: recursively split the grid into a quadtree down to a
//!    configured granularity
//! 3. **Simplify**: coalesce adjacent same-state leaves to a fixed point
//! 4. **Emit**: produce one world-space box descriptor per occupied leaf
//!
//! The crate never touches image files or a physics engine directly: pixels
//! come in through the [`PixelSource`] trait and boxes go out as an iterator
//! of [`BoxDescriptor`] values for the caller's geometry factory.
//!
//! # Example
//!
//! ```
//! use map_plugin::{decompose, LumaGrid, MapConfig};
//!
//! // 4x4 grid, left half occupied (dark), right half free (bright)
//! let mut grid = LumaGrid::new(4, 4, 1.0);
//! for y in 0..4 {
//!   grid.set(0, y, 0.0);
//!   grid.set(1, y, 0.0);
//! }
//!
//! let config = MapConfig { granularity: 4, ..MapConfig::default() };
//! let output = decompose(&grid, &config).unwrap();
//! assert_eq!(output.boxes.len(), 1);
//! ```

pub mod config;
pub mod decompose;
pub mod error;
pub mod grid;
pub mod quadtree;

// Re-export commonly used items
pub use config::MapConfig;
pub use decompose::{decompose, DecomposeOutput, DecomposeStats};
pub use error::DecomposeError;
pub use grid::{sample_region, Classifier, LumaGrid, PixelSource, RegionCounts};
pub use quadtree::{BoxDescriptor, CellRect, NodeId, QuadNode, QuadTree};
