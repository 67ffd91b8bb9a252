//! Synthesis constants and runtime configuration defaults

// Patch matching defaults
/// Default patch sample size (patches span `sample_size + 1` pixels per axis)
pub const DEFAULT_SAMPLE_SIZE: u32 = 6;
/// Default number of random candidates drawn by the coarse pass
pub const DEFAULT_SAMPLE_COUNT: usize = 20;

// Zero disables the refinement pass entirely
/// Default refinement window size around the coarse match
pub const DEFAULT_DOUBLE_SAMPLE_SIZE: u32 = 0;
/// Default number of random candidates drawn by the refinement pass
pub const DEFAULT_DOUBLE_SAMPLE_COUNT: usize = 0;

/// Default output canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 90;
/// Default output canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 90;

// Extra ring span past the larger canvas dimension so corners are always reached
/// Margin added to the largest canvas dimension when growing rings
pub const RING_MARGIN: u32 = 5;

/// Per-pixel channel difference ceiling used for the initial best score
pub const CHANNEL_DIFF_CEILING: u64 = 768;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: u32 = 10_000;

// File defaults
/// Exemplar path used when none is given
pub const DEFAULT_INPUT: &str = "input.png";
/// Output path used when none is given
pub const DEFAULT_OUTPUT: &str = "output.png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
