//! Errors fatal to a decomposition run.
//!
//! Most abnormal inputs recover locally (bad options are clamped, degenerate
//! regions are invalidated); only an unusable source aborts before any
//! geometry is produced.

use thiserror::Error;

/// Fatal decomposition failure.
#[derive(Debug, Error)]
pub enum DecomposeError {
  /// The occupancy source has no cells to decompose.
  #[error("occupancy source is empty ({width}x{height})")]
  EmptySource {
    /// Source width in cells.
    width: u32,
    /// Source height in cells.
    height: u32,
  },
}
