/// Synthesis engine, run parameters and orchestration
pub mod executor;
/// Random-sample patch matching with optional refinement
pub mod matcher;
/// Pixel and patch similarity measures
pub mod metric;
/// Progress notification hooks
pub mod observer;
/// Ring growth order over the output canvas
pub mod scheduler;
