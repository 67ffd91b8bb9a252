use crate::{
    algorithm::matcher::PatchMatcher,
    algorithm::observer::SynthesisObserver,
    io::configuration::RING_MARGIN,
    io::error::{Result, computation_error},
    spatial::{Canvas, PixelSource},
};
use rand::Rng;
use tracing::debug;

/// Square ring centered on the canvas center
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ring {
    /// Ring size `s`: side length minus one, always even
    pub size: i32,
    /// Left column
    pub x0: i32,
    /// Top row
    pub y0: i32,
    /// Right column
    pub x1: i32,
    /// Bottom row
    pub y1: i32,
}

impl Ring {
    /// Ring of a given size around `center`
    pub const fn around(center: [i32; 2], size: i32) -> Self {
        let x0 = center[0] - size / 2;
        let y0 = center[1] - size / 2;
        Self {
            size,
            x0,
            y0,
            x1: x0 + size,
            y1: y0 + size,
        }
    }

    /// Coordinates on the ring in visiting order
    ///
    /// Top and bottom rows are walked together left to right, corners
    /// included, then the left and right columns top to bottom without
    /// corners. Coordinates may fall off the canvas.
    pub fn coordinates(&self) -> impl Iterator<Item = [i32; 2]> + use<> {
        let Self { x0, y0, x1, y1, .. } = *self;
        let rows = (x0..=x1).flat_map(move |x| [[x, y0], [x, y1]]);
        let columns = (y0 + 1..y1).flat_map(move |y| [[x0, y], [x1, y]]);
        rows.chain(columns)
    }
}

/// Fill order of the output canvas
///
/// Rings of even size grow outward from the center until their size reaches
/// the larger canvas dimension plus [`RING_MARGIN`], which covers every
/// coordinate including the corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthScheduler {
    center: [i32; 2],
    max_square_size: i32,
}

impl GrowthScheduler {
    /// Scheduler for a `width` x `height` canvas
    pub const fn new(width: u32, height: u32) -> Self {
        let largest = if width > height { width } else { height };
        Self {
            center: [(width / 2) as i32, (height / 2) as i32],
            max_square_size: (largest + RING_MARGIN) as i32,
        }
    }

    /// Canvas center, where the seed pixel goes
    pub const fn center(&self) -> [i32; 2] {
        self.center
    }

    /// Exclusive upper bound on ring sizes
    pub const fn max_square_size(&self) -> i32 {
        self.max_square_size
    }

    /// Number of rings walked
    pub const fn ring_count(&self) -> usize {
        ((self.max_square_size + 1) / 2) as usize
    }

    /// Rings in growth order
    pub fn rings(&self) -> impl Iterator<Item = Ring> + use<> {
        let center = self.center;
        (0..self.max_square_size)
            .step_by(2)
            .map(move |size| Ring::around(center, size))
    }

    /// Every coordinate in visiting order, rings flattened
    pub fn visit_order(&self) -> impl Iterator<Item = [i32; 2]> + use<> {
        self.rings().flat_map(|ring| ring.coordinates())
    }

    /// Walk every ring, committing each uncommitted canvas coordinate once
    ///
    /// Returns the number of pixels committed by the walk.
    ///
    /// # Errors
    ///
    /// Returns an error if matching fails for any coordinate
    pub fn run<S, R, O>(
        &self,
        source: &S,
        canvas: &mut Canvas,
        matcher: &PatchMatcher,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<usize>
    where
        S: PixelSource + ?Sized,
        R: Rng + ?Sized,
        O: SynthesisObserver + ?Sized,
    {
        let mut total = 0;

        for ring in self.rings() {
            observer.ring_started(&ring);

            let mut committed = 0;
            for position in ring.coordinates() {
                if process_pixel(source, canvas, matcher, rng, position)? {
                    committed += 1;
                    observer.pixel_committed(position);
                }
            }

            debug!(ring = ring.size, committed, "ring complete");
            total += committed;
        }

        Ok(total)
    }
}

/// Match and commit one output coordinate
///
/// Returns `false` without drawing any randomness when the coordinate is off
/// the canvas or already committed.
///
/// # Errors
///
/// Returns an error if matching fails or the match lies off the exemplar
pub fn process_pixel<S, R>(
    source: &S,
    canvas: &mut Canvas,
    matcher: &PatchMatcher,
    rng: &mut R,
    position: [i32; 2],
) -> Result<bool>
where
    S: PixelSource + ?Sized,
    R: Rng + ?Sized,
{
    if !canvas.contains(position) || canvas.is_committed(position) {
        return Ok(false);
    }

    let found = matcher.find_match(source, canvas, position, rng)?;
    let pixel = source.pixel_at(found.position).ok_or_else(|| {
        computation_error(
            "process pixel",
            &format!(
                "match ({}, {}) lies outside the source image",
                found.position[0], found.position[1]
            ),
        )
    })?;

    Ok(canvas.commit(position, pixel))
}
