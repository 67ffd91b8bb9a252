//! Command-line interface for synthesizing a texture from one exemplar image

use crate::algorithm::executor::{SynthesisConfig, Synthesizer};
use crate::io::configuration::{
    DEFAULT_DOUBLE_SAMPLE_COUNT, DEFAULT_DOUBLE_SAMPLE_SIZE, DEFAULT_HEIGHT, DEFAULT_INPUT,
    DEFAULT_OUTPUT, DEFAULT_SAMPLE_COUNT, DEFAULT_SAMPLE_SIZE, DEFAULT_WIDTH,
};
use crate::io::error::Result;
use crate::io::image::{export_canvas, load_source};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "ringsynth")]
#[command(
    author,
    version,
    about = "Grow a texture outward from an exemplar image by random patch matching"
)]
/// Command-line arguments for the synthesis tool
pub struct Cli {
    /// Exemplar image to sample from
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Where to write the synthesized image
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Patch sample size (patches span sample-size + 1 pixels per axis)
    #[arg(short = 's', long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub sample_size: u32,

    /// Random candidates drawn per output pixel
    #[arg(short = 'c', long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    pub sample_count: usize,

    /// Output width in pixels (implies square if height not specified)
    #[arg(short = 'w', long)]
    pub width: Option<u32>,

    /// Output height in pixels (implies square if width not specified)
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Refinement window size around the coarse match (0 disables refinement)
    #[arg(long, default_value_t = DEFAULT_DOUBLE_SAMPLE_SIZE)]
    pub double_sample_size: u32,

    /// Random candidates drawn by the refinement pass
    #[arg(long, default_value_t = DEFAULT_DOUBLE_SAMPLE_COUNT)]
    pub double_sample_count: usize,

    /// Random seed for reproducible output (drawn at random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Output dimensions, squaring a single given dimension
    pub const fn dimensions(&self) -> (u32, u32) {
        match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, w),
            (None, Some(h)) => (h, h),
            (None, None) => (DEFAULT_WIDTH, DEFAULT_HEIGHT),
        }
    }

    /// Build run parameters from the arguments
    pub const fn config(&self) -> SynthesisConfig {
        let (width, height) = self.dimensions();
        SynthesisConfig {
            sample_size: self.sample_size,
            sample_count: self.sample_count,
            double_sample_size: self.double_sample_size,
            double_sample_count: self.double_sample_count,
            width,
            height,
        }
    }

    /// The given seed, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

/// Loads the exemplar, runs synthesis and writes the result
pub struct SynthesisRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SynthesisRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Access the parsed arguments
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Run synthesis end to end
    ///
    /// Parameters are validated before the exemplar is read.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parameters are invalid
    /// - The exemplar cannot be loaded or is too small for the sample size
    /// - The result cannot be written
    pub fn process(&mut self) -> Result<()> {
        let start_time = Instant::now();
        let seed = self.cli.resolve_seed();
        let mut synthesizer = Synthesizer::new(self.cli.config(), seed)?;

        let source = load_source(&self.cli.input)?;
        info!(
            input = %self.cli.input.display(),
            width = source.width(),
            height = source.height(),
            seed,
            "loaded exemplar"
        );

        let output = match self.progress_manager.as_mut() {
            Some(pm) => {
                pm.set_source(&self.cli.input);
                synthesizer.synthesize_with(&source, pm)?
            }
            None => synthesizer.synthesize(&source)?,
        };

        export_canvas(&output, &self.cli.output)?;
        info!(
            output = %self.cli.output.display(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "wrote synthesized image"
        );

        Ok(())
    }
}
