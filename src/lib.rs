//! Non-parametric texture synthesis by ring-ordered random patch matching
//!
//! A new image is grown outward from a seed pixel copied from the exemplar's
//! center. Each remaining output pixel, visited ring by ring, takes the color of
//! the exemplar pixel whose surrounding patch best matches the pixels already
//! committed around it, found by random sampling with an optional narrower
//! refinement pass.

#![forbid(unsafe_code)]

/// Growth order, patch matching and the synthesis engine
pub mod algorithm;
/// Command line, image boundary, progress display and error handling
pub mod io;
/// Output canvas, exemplar access and the progress mask
pub mod spatial;

pub use algorithm::executor::{SynthesisConfig, Synthesizer, synthesize};
pub use io::error::{Result, SynthesisError};
