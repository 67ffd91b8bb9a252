//! Exemplar access and the write-once output canvas
//!
//! The exemplar is read through [`PixelSource`] so the core never depends on a
//! particular decoder. The output [`Canvas`] pairs an RGB raster with a
//! [`ProgressMask`]; a pixel is only ever written together with its mask bit.

use crate::spatial::mask::ProgressMask;
use image::{Rgb, RgbImage};

/// Read-only RGB raster addressable by `(x, y)`
pub trait PixelSource {
    /// Raster width in pixels
    fn width(&self) -> u32;

    /// Raster height in pixels
    fn height(&self) -> u32;

    /// Pixel at an unsigned coordinate, `None` when out of bounds
    fn pixel(&self, x: u32, y: u32) -> Option<Rgb<u8>>;

    /// Pixel at a signed coordinate, `None` when out of bounds
    fn pixel_at(&self, position: [i32; 2]) -> Option<Rgb<u8>> {
        let x = u32::try_from(position[0]).ok()?;
        let y = u32::try_from(position[1]).ok()?;
        self.pixel(x, y)
    }

    /// Center coordinate, truncating odd dimensions toward zero
    fn center(&self) -> [i32; 2] {
        [(self.width() / 2) as i32, (self.height() / 2) as i32]
    }
}

impl PixelSource for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        self.get_pixel_checked(x, y).copied()
    }
}

/// Output raster under construction
///
/// Uncommitted pixels hold black and are never exposed through
/// [`Canvas::committed_pixel`].
#[derive(Clone, Debug)]
pub struct Canvas {
    image: RgbImage,
    mask: ProgressMask,
}

impl Canvas {
    /// Allocate an empty canvas and its mask together
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::new(width, height),
            mask: ProgressMask::new(width as usize, height as usize),
        }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Test whether a coordinate lies on the canvas
    pub const fn contains(&self, position: [i32; 2]) -> bool {
        self.mask.contains(position)
    }

    /// Test whether a coordinate has been committed
    pub fn is_committed(&self, position: [i32; 2]) -> bool {
        self.mask.is_committed(position)
    }

    /// Pixel at a coordinate, only if it is on the canvas and committed
    pub fn committed_pixel(&self, position: [i32; 2]) -> Option<Rgb<u8>> {
        if !self.mask.is_committed(position) {
            return None;
        }
        self.image
            .get_pixel_checked(position[0] as u32, position[1] as u32)
            .copied()
    }

    /// Write a pixel and mark it committed in one step
    ///
    /// Returns `false` without touching anything when the coordinate is off
    /// the canvas or was already committed.
    pub fn commit(&mut self, position: [i32; 2], pixel: Rgb<u8>) -> bool {
        if !self.mask.contains(position) || self.mask.is_committed(position) {
            return false;
        }
        let Some(slot) = self
            .image
            .get_pixel_mut_checked(position[0] as u32, position[1] as u32)
        else {
            return false;
        };
        *slot = pixel;
        self.mask.mark(position)
    }

    /// Access the progress mask
    pub const fn mask(&self) -> &ProgressMask {
        &self.mask
    }

    /// Test if every pixel has been committed
    pub fn is_complete(&self) -> bool {
        self.mask.is_complete()
    }

    /// Access the raster, including uncommitted (black) pixels
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Consume the canvas, dropping the mask and returning the raster
    pub fn into_image(self) -> RgbImage {
        self.image
    }
}
