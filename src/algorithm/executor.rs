use crate::{
    algorithm::matcher::PatchMatcher,
    algorithm::observer::{NoopObserver, SynthesisObserver},
    algorithm::scheduler::GrowthScheduler,
    io::configuration::{
        CHANNEL_DIFF_CEILING, DEFAULT_DOUBLE_SAMPLE_COUNT, DEFAULT_DOUBLE_SAMPLE_SIZE,
        DEFAULT_HEIGHT, DEFAULT_SAMPLE_COUNT, DEFAULT_SAMPLE_SIZE, DEFAULT_WIDTH,
        MAX_CANVAS_DIMENSION,
    },
    io::error::{Result, SynthesisError, computation_error, invalid_parameter},
    spatial::{Canvas, PixelSource},
};
use image::RgbImage;
use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;
use tracing::info;

/// Parameters of a single synthesis run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SynthesisConfig {
    /// Patch sample size; patches span `sample_size + 1` pixels per axis
    pub sample_size: u32,
    /// Candidates drawn by the coarse pass
    pub sample_count: usize,
    /// Refinement window size around the coarse match (0 disables refinement)
    pub double_sample_size: u32,
    /// Candidates drawn by the refinement pass
    pub double_sample_count: usize,
    /// Output canvas width in pixels
    pub width: u32,
    /// Output canvas height in pixels
    pub height: u32,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            sample_count: DEFAULT_SAMPLE_COUNT,
            double_sample_size: DEFAULT_DOUBLE_SAMPLE_SIZE,
            double_sample_count: DEFAULT_DOUBLE_SAMPLE_COUNT,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl SynthesisConfig {
    /// Test whether the refinement pass is enabled
    pub const fn refinement_enabled(&self) -> bool {
        self.double_sample_size > 0
    }

    /// Initial best score for a matching pass
    ///
    /// A per-pixel ceiling of 768 times the squared sample size.
    pub const fn sentinel_cost(&self) -> u64 {
        let size = self.sample_size as u64;
        CHANNEL_DIFF_CEILING * size * size
    }

    /// Validate the parameters on their own
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::InvalidParameter`] if:
    /// - Width or height is zero or exceeds [`MAX_CANVAS_DIMENSION`]
    /// - Sample size or sample count is zero
    /// - Refinement is enabled with a zero refinement sample count
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"canvas dimensions must be positive",
                ));
            }
            if value > MAX_CANVAS_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("canvas dimensions are limited to {MAX_CANVAS_DIMENSION}"),
                ));
            }
        }

        if self.sample_size == 0 {
            return Err(invalid_parameter(
                "sample_size",
                &self.sample_size,
                &"sample size must be positive",
            ));
        }

        if self.sample_count == 0 {
            return Err(invalid_parameter(
                "sample_count",
                &self.sample_count,
                &"at least one candidate must be drawn per match",
            ));
        }

        if self.refinement_enabled() && self.double_sample_count == 0 {
            return Err(invalid_parameter(
                "double_sample_count",
                &self.double_sample_count,
                &"refinement is enabled but draws no candidates",
            ));
        }

        Ok(())
    }

    /// Validate the parameters against a specific exemplar
    ///
    /// # Errors
    ///
    /// Returns an error if [`SynthesisConfig::validate`] fails, or
    /// [`SynthesisError::SourceTooSmall`] if either exemplar dimension does not
    /// exceed the sample size
    pub fn validate_for<S: PixelSource + ?Sized>(&self, source: &S) -> Result<()> {
        self.validate()?;

        if source.width() <= self.sample_size || source.height() <= self.sample_size {
            return Err(SynthesisError::SourceTooSmall {
                width: source.width(),
                height: source.height(),
                sample_size: self.sample_size,
            });
        }

        Ok(())
    }
}

/// Texture synthesis engine
///
/// Owns the configuration and the random generator for a sequence of runs.
/// Runs on the same engine continue the same random stream, so two engines
/// built with the same seed produce identical canvases run for run.
pub struct Synthesizer {
    config: SynthesisConfig,
    seed: u64,
    rng: StdRng,
}

impl Synthesizer {
    /// Create an engine with validated parameters and a fixed seed
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: SynthesisConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            seed,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Access the run parameters
    pub const fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Seed the random generator was created from
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Synthesize a canvas from an exemplar
    ///
    /// # Errors
    ///
    /// Returns an error if the exemplar is too small for the sample size or
    /// matching fails
    pub fn synthesize<S: PixelSource + ?Sized>(&mut self, source: &S) -> Result<RgbImage> {
        self.synthesize_with(source, &mut NoopObserver)
    }

    /// Synthesize a canvas while reporting progress to an observer
    ///
    /// # Errors
    ///
    /// Returns an error if the exemplar is too small for the sample size or
    /// matching fails
    pub fn synthesize_with<S, O>(&mut self, source: &S, observer: &mut O) -> Result<RgbImage>
    where
        S: PixelSource + ?Sized,
        O: SynthesisObserver + ?Sized,
    {
        self.synthesize_canvas(source, observer)
            .map(Canvas::into_image)
    }

    /// Synthesize and return the canvas together with its progress mask
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The exemplar is too small for the sample size
    /// - Matching fails for any coordinate
    /// - The growth walk leaves any coordinate uncommitted
    pub fn synthesize_canvas<S, O>(&mut self, source: &S, observer: &mut O) -> Result<Canvas>
    where
        S: PixelSource + ?Sized,
        O: SynthesisObserver + ?Sized,
    {
        self.config.validate_for(source)?;

        let start_time = Instant::now();
        let matcher = PatchMatcher::new(&self.config, source)?;
        let scheduler = GrowthScheduler::new(self.config.width, self.config.height);
        let mut canvas = Canvas::new(self.config.width, self.config.height);

        info!(
            width = self.config.width,
            height = self.config.height,
            source_width = source.width(),
            source_height = source.height(),
            sample_size = self.config.sample_size,
            sample_count = self.config.sample_count,
            double_sample_size = self.config.double_sample_size,
            double_sample_count = self.config.double_sample_count,
            seed = self.seed,
            "starting synthesis"
        );

        let seed_source = source.center();
        let seed_pixel = source.pixel_at(seed_source).ok_or_else(|| {
            computation_error("seed pixel", &"source center lies outside the source image")
        })?;
        canvas.commit(scheduler.center(), seed_pixel);

        observer.synthesis_started(
            self.config.width,
            self.config.height,
            scheduler.ring_count(),
        );

        let committed =
            1 + scheduler.run(source, &mut canvas, &matcher, &mut self.rng, observer)?;

        if !canvas.is_complete() {
            let remaining = canvas.mask().uncommitted().count();
            return Err(computation_error(
                "growth",
                &format!("{remaining} coordinates were never committed"),
            ));
        }

        observer.synthesis_finished(committed);
        info!(
            committed,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "synthesis complete"
        );

        Ok(canvas)
    }
}

/// Synthesize a canvas in one call with a fresh engine
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the exemplar is too small
/// for the sample size, or matching fails
pub fn synthesize<S: PixelSource + ?Sized>(
    source: &S,
    config: SynthesisConfig,
    seed: u64,
) -> Result<RgbImage> {
    Synthesizer::new(config, seed)?.synthesize(source)
}
