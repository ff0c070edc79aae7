//! Quadtree decomposition of an occupancy grid.
//!
//! The tree is built once per occupancy source, mutated in place by the
//! merge pass, and discarded after box emission - it is not a retained
//! spatial index.
//!
//! # Module Structure
//!
//! - [`bounds`]: `CellRect` - integer region rectangle and split math
//! - [`node`]: `QuadNode` / `QuadTree` - arena-backed tree storage
//! - [`builder`]: recursive subdivision down to the granularity threshold
//! - [`merge`]: fixed-point coalescing of adjacent same-state leaves
//! - [`emit`]: world-space box descriptors for occupied leaves

pub mod bounds;
pub mod builder;
pub mod emit;
pub mod merge;
pub mod node;

// Re-exports
pub use bounds::CellRect;
pub use builder::build;
pub use emit::{emit_boxes, BoxDescriptor, BoxEmitter};
pub use merge::{simplify, SimplifyStats};
pub use node::{NodeId, QuadNode, QuadTree};

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
