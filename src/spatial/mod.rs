//! Spatial data structures shared by the synthesis passes
//!
//! This module contains:
//! - The exemplar access trait and the write-once output canvas
//! - The flat progress mask recording committed coordinates

/// Exemplar access and output canvas
pub mod canvas;
/// Committed-coordinate tracking
pub mod mask;

pub use canvas::{Canvas, PixelSource};
pub use mask::ProgressMask;
