use bitvec::prelude::*;
use std::fmt;

/// Write-once record of which output coordinates have been committed
///
/// Stored as a single flat bit buffer indexed by `y * width + x`. Bits only
/// ever go from unset to set; there is no way to clear a committed coordinate.
#[derive(Clone, Debug)]
pub struct ProgressMask {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl ProgressMask {
    /// Create a mask with every coordinate uncommitted
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    /// Mask width in coordinates
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Mask height in coordinates
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Flat buffer index for a signed coordinate, `None` when out of bounds
    pub const fn index(&self, position: [i32; 2]) -> Option<usize> {
        let [x, y] = position;
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Test whether a coordinate lies inside the mask
    pub const fn contains(&self, position: [i32; 2]) -> bool {
        self.index(position).is_some()
    }

    /// Test whether a coordinate has been committed
    ///
    /// Out-of-bounds coordinates are never committed.
    pub fn is_committed(&self, position: [i32; 2]) -> bool {
        self.index(position)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Mark a coordinate as committed
    ///
    /// Returns `true` only when the bit was newly set.
    pub fn mark(&mut self, position: [i32; 2]) -> bool {
        let Some(index) = self.index(position) else {
            return false;
        };
        if self.bits.get(index).as_deref() == Some(&true) {
            return false;
        }
        self.bits.set(index, true);
        true
    }

    /// Number of committed coordinates
    pub fn committed_count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if every coordinate has been committed
    pub fn is_complete(&self) -> bool {
        self.bits.all()
    }

    /// Iterate the coordinates that are still uncommitted, in row-major order
    pub fn uncommitted(&self) -> impl Iterator<Item = [i32; 2]> + '_ {
        let width = self.width.max(1);
        self.bits
            .iter_zeros()
            .map(move |index| [(index % width) as i32, (index / width) as i32])
    }
}

impl fmt::Display for ProgressMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProgressMask({}x{}, {}/{} committed)",
            self.width,
            self.height,
            self.committed_count(),
            self.bits.len()
        )
    }
}
