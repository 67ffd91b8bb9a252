/// Command-line parsing and the end-to-end runner
pub mod cli;
/// Defaults and limits
pub mod configuration;
/// Error types
pub mod error;
/// Exemplar decoding and canvas export
pub mod image;
/// Terminal progress display
pub mod progress;
