use crate::algorithm::scheduler::Ring;

/// Receives progress notifications while a canvas grows
///
/// Notifications carry no algorithmic meaning; every method defaults to a
/// no-op so observers implement only what they display.
pub trait SynthesisObserver {
    /// Called once after the center seed is committed
    fn synthesis_started(&mut self, _width: u32, _height: u32, _ring_count: usize) {}

    /// Called before each ring is walked
    fn ring_started(&mut self, _ring: &Ring) {}

    /// Called after each newly committed output pixel
    fn pixel_committed(&mut self, _position: [i32; 2]) {}

    /// Called once every ring has been walked
    fn synthesis_finished(&mut self, _committed: usize) {}
}

/// Observer that ignores every notification
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SynthesisObserver for NoopObserver {}
