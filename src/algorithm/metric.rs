use crate::spatial::{Canvas, PixelSource};
use image::Rgb;

/// Inclusive patch offset bounds for a sample size
///
/// The low bound is `-(sample_size / 2)` with integer division toward zero and
/// the high bound sits `sample_size` above it, so every patch spans
/// `sample_size + 1` offsets per axis regardless of parity.
pub const fn patch_offsets(sample_size: u32) -> (i32, i32) {
    let low = -((sample_size / 2) as i32);
    (low, low + sample_size as i32)
}

/// Sum of absolute red, green and blue differences
pub fn pixel_diff(a: Rgb<u8>, b: Rgb<u8>) -> u32 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(&p, &q)| u32::from(p.abs_diff(q)))
        .sum()
}

/// Cost of one patch comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PatchScore {
    /// Summed channel differences over every contributing offset
    pub cost: u64,
    /// Number of offsets that contributed
    pub scored: usize,
}

/// Difference between one source offset and one output offset
///
/// `None` when the offset is skipped: output off the canvas, output not yet
/// committed, or source off the exemplar.
pub fn offset_diff<S: PixelSource + ?Sized>(
    source: &S,
    canvas: &Canvas,
    source_position: [i32; 2],
    output_position: [i32; 2],
) -> Option<u32> {
    let output = canvas.committed_pixel(output_position)?;
    let input = source.pixel_at(source_position)?;
    Some(pixel_diff(input, output))
}

/// Compare the patch around a source candidate with the patch around an output target
///
/// Only committed output pixels count. Skipped offsets add nothing to the cost
/// and are not counted in [`PatchScore::scored`], so sparse neighbourhoods
/// early in a run score low.
pub fn area_diff<S: PixelSource + ?Sized>(
    source: &S,
    canvas: &Canvas,
    sample_size: u32,
    candidate: [i32; 2],
    target: [i32; 2],
) -> PatchScore {
    let (low, high) = patch_offsets(sample_size);
    let mut score = PatchScore::default();

    for i in low..=high {
        for j in low..=high {
            if let Some(diff) = offset_diff(
                source,
                canvas,
                [candidate[0] + i, candidate[1] + j],
                [target[0] + i, target[1] + j],
            ) {
                score.cost += u64::from(diff);
                score.scored += 1;
            }
        }
    }

    score
}
