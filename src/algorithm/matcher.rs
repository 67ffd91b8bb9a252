use crate::{
    algorithm::executor::SynthesisConfig,
    algorithm::metric::{PatchScore, area_diff},
    io::error::{Result, SynthesisError},
    spatial::{Canvas, PixelSource},
};
use rand::Rng;
use tracing::trace;

/// Half-open rectangle of source coordinates candidates are drawn from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleRegion {
    /// Minimum x (inclusive)
    pub x0: i32,
    /// Maximum x (exclusive)
    pub x1: i32,
    /// Minimum y (inclusive)
    pub y0: i32,
    /// Maximum y (exclusive)
    pub y1: i32,
}

impl SampleRegion {
    /// Region of exemplar coordinates whose whole patch stays on the exemplar
    ///
    /// Inset by `sample_size / 2` on the low side and by the rounded-up half on
    /// the high side. Returns `None` when the inset leaves nothing to sample.
    pub const fn valid_for(width: u32, height: u32, sample_size: u32) -> Option<Self> {
        let low = (sample_size / 2) as i32;
        let high = sample_size.div_ceil(2) as i32;
        let region = Self {
            x0: low,
            x1: width as i32 - high,
            y0: low,
            y1: height as i32 - high,
        };
        if region.is_empty() {
            None
        } else {
            Some(region)
        }
    }

    /// Horizontal extent
    pub const fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    /// Vertical extent
    pub const fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    /// Test if either extent is non-positive
    pub const fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Test whether a coordinate can be drawn from this region
    pub const fn contains(&self, position: [i32; 2]) -> bool {
        position[0] >= self.x0
            && position[0] < self.x1
            && position[1] >= self.y0
            && position[1] < self.y1
    }

    /// Window of `window_size` around `center`, clamped to this region
    ///
    /// Each axis spans `[c - ceil(d/2), c + floor(d/2))`, exactly `window_size`
    /// wide. An axis with no extent (size 0) uses this region's full span
    /// instead. If clamping empties the window the whole region is returned.
    pub const fn refinement_window(&self, center: [i32; 2], window_size: u32) -> Self {
        let below = window_size.div_ceil(2) as i32;
        let above = (window_size / 2) as i32;
        let (mut x0, mut x1) = (center[0] - below, center[0] + above);
        let (mut y0, mut y1) = (center[1] - below, center[1] + above);

        if x0 >= x1 {
            x0 = self.x0;
            x1 = self.x1;
        }
        if y0 >= y1 {
            y0 = self.y0;
            y1 = self.y1;
        }

        let window = Self {
            x0: if x0 > self.x0 { x0 } else { self.x0 },
            x1: if x1 < self.x1 { x1 } else { self.x1 },
            y0: if y0 > self.y0 { y0 } else { self.y0 },
            y1: if y1 < self.y1 { y1 } else { self.y1 },
        };

        if window.is_empty() { *self } else { window }
    }

    /// Draw one coordinate uniformly, `None` for an empty region
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<[i32; 2]> {
        if self.is_empty() {
            return None;
        }
        Some([
            rng.random_range(self.x0..self.x1),
            rng.random_range(self.y0..self.y1),
        ])
    }
}

/// Winning candidate of a matching pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchResult {
    /// Source coordinate whose pixel will be copied
    pub position: [i32; 2],
    /// Score of the winning patch comparison
    pub score: PatchScore,
}

/// Random-sample patch matcher with an optional refinement pass
///
/// The coarse pass draws `sample_count` candidates from the whole valid
/// region. When `double_sample_size` is non-zero a second pass draws
/// `double_sample_count` candidates from a window around the coarse winner and
/// its result replaces the coarse one.
#[derive(Clone, Debug)]
pub struct PatchMatcher {
    sample_size: u32,
    sample_count: usize,
    double_sample_size: u32,
    double_sample_count: usize,
    region: SampleRegion,
    sentinel: u64,
}

impl PatchMatcher {
    /// Build a matcher for an exemplar
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::SourceTooSmall`] if the exemplar leaves no
    /// valid sampling region for the configured sample size
    pub fn new<S: PixelSource + ?Sized>(config: &SynthesisConfig, source: &S) -> Result<Self> {
        let region = SampleRegion::valid_for(source.width(), source.height(), config.sample_size)
            .ok_or(SynthesisError::SourceTooSmall {
                width: source.width(),
                height: source.height(),
                sample_size: config.sample_size,
            })?;

        Ok(Self {
            sample_size: config.sample_size,
            sample_count: config.sample_count,
            double_sample_size: config.double_sample_size,
            double_sample_count: config.double_sample_count,
            region,
            sentinel: config.sentinel_cost(),
        })
    }

    /// Full valid sampling region
    pub const fn region(&self) -> SampleRegion {
        self.region
    }

    /// Initial best score every pass has to beat
    pub const fn sentinel(&self) -> u64 {
        self.sentinel
    }

    /// Test whether the refinement pass runs
    pub const fn refines(&self) -> bool {
        self.double_sample_size > 0
    }

    /// Find the source coordinate whose patch best fits `target`
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::EmptySamplingRegion`] if a pass has nothing
    /// to draw
    pub fn find_match<S, R>(
        &self,
        source: &S,
        canvas: &Canvas,
        target: [i32; 2],
        rng: &mut R,
    ) -> Result<MatchResult>
    where
        S: PixelSource + ?Sized,
        R: Rng + ?Sized,
    {
        let coarse = self.sample_pass(
            source,
            canvas,
            target,
            self.region,
            self.sample_count,
            "coarse",
            rng,
        )?;

        if !self.refines() {
            return Ok(coarse);
        }

        let window = self
            .region
            .refinement_window(coarse.position, self.double_sample_size);
        let refined = self.sample_pass(
            source,
            canvas,
            target,
            window,
            self.double_sample_count,
            "refinement",
            rng,
        )?;

        trace!(
            target_x = target[0],
            target_y = target[1],
            coarse_cost = coarse.score.cost,
            refined_cost = refined.score.cost,
            "refined match"
        );

        Ok(refined)
    }

    /// Draw `count` candidates from `region` and keep the lowest-cost one
    ///
    /// Ties keep the earlier candidate. If no candidate beats the sentinel the
    /// first candidate drawn is returned.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::EmptySamplingRegion`] if `region` is empty or
    /// `count` is zero
    pub fn sample_pass<S, R>(
        &self,
        source: &S,
        canvas: &Canvas,
        target: [i32; 2],
        region: SampleRegion,
        count: usize,
        pass: &'static str,
        rng: &mut R,
    ) -> Result<MatchResult>
    where
        S: PixelSource + ?Sized,
        R: Rng + ?Sized,
    {
        let mut best: Option<MatchResult> = None;
        let mut best_cost = self.sentinel;

        for _ in 0..count {
            let candidate = region
                .sample(rng)
                .ok_or(SynthesisError::EmptySamplingRegion { pass })?;
            let score = area_diff(source, canvas, self.sample_size, candidate, target);

            if score.cost < best_cost {
                best_cost = score.cost;
                best = Some(MatchResult {
                    position: candidate,
                    score,
                });
            } else if best.is_none() {
                best = Some(MatchResult {
                    position: candidate,
                    score,
                });
            }
        }

        best.ok_or(SynthesisError::EmptySamplingRegion { pass })
    }
}
