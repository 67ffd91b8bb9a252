//! Tests for pixel and patch similarity, including the committed-only skip rules

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use ringsynth::algorithm::metric::{
        PatchScore, area_diff, offset_diff, patch_offsets, pixel_diff,
    };
    use ringsynth::spatial::Canvas;

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 20) as u8, (y * 20) as u8, 100])
        })
    }

    fn fully_committed(width: u32, height: u32, color: Rgb<u8>) -> Canvas {
        let mut canvas = Canvas::new(width, height);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                canvas.commit([x, y], color);
            }
        }
        canvas
    }

    // Tests channel differences are summed as absolute values
    // Verified by dropping the blue channel from the sum
    #[test]
    fn test_pixel_diff_sums_absolute_channels() {
        assert_eq!(pixel_diff(Rgb([10, 200, 30]), Rgb([20, 100, 30])), 110);
        assert_eq!(pixel_diff(Rgb([0, 0, 0]), Rgb([255, 255, 255])), 765);
        assert_eq!(pixel_diff(Rgb([7, 7, 7]), Rgb([7, 7, 7])), 0);
    }

    // Tests patch bounds span sample_size + 1 offsets for both parities
    // Verified by rounding the low bound away from zero
    #[test]
    fn test_patch_offsets_truncate_toward_zero() {
        assert_eq!(patch_offsets(6), (-3, 3));
        assert_eq!(patch_offsets(5), (-2, 3));
        assert_eq!(patch_offsets(1), (0, 1));
        for size in 1..10 {
            let (low, high) = patch_offsets(size);
            assert_eq!((high - low + 1) as u32, size + 1);
        }
    }

    // Tests uncommitted output offsets are skipped
    // Verified by reading raw canvas pixels instead of committed ones
    #[test]
    fn test_area_diff_zero_against_uncommitted_region() {
        let source = gradient(10, 10);
        let canvas = Canvas::new(8, 8);

        let score = area_diff(&source, &canvas, 4, [5, 5], [4, 4]);

        assert_eq!(score, PatchScore::default());
    }

    // Tests targets entirely off the canvas score nothing
    // Verified by removing the output bounds check
    #[test]
    fn test_area_diff_zero_out_of_bounds() {
        let source = gradient(10, 10);
        let canvas = fully_committed(4, 4, Rgb([0, 0, 0]));

        let score = area_diff(&source, &canvas, 2, [5, 5], [50, 50]);
        assert_eq!(score.cost, 0);
        assert_eq!(score.scored, 0);

        let score = area_diff(&source, &canvas, 2, [-20, -20], [1, 1]);
        assert_eq!(score.cost, 0);
        assert_eq!(score.scored, 0);
    }

    // Tests a single committed neighbour contributes its exact difference
    // Verified by counting skipped offsets in the score
    #[test]
    fn test_area_diff_single_committed_pixel() {
        let source = RgbImage::from_pixel(10, 10, Rgb([10, 20, 30]));
        let mut canvas = Canvas::new(8, 8);
        canvas.commit([3, 3], Rgb([0, 0, 0]));

        let score = area_diff(&source, &canvas, 4, [5, 5], [4, 4]);

        assert_eq!(score.cost, 60);
        assert_eq!(score.scored, 1);
    }

    // Tests a fully committed interior patch scores every offset
    // Verified by iterating with an exclusive high bound
    #[test]
    fn test_area_diff_scores_whole_patch() {
        let source = RgbImage::from_pixel(12, 12, Rgb([255, 255, 255]));
        let canvas = fully_committed(12, 12, Rgb([255, 255, 255]));

        let score = area_diff(&source, &canvas, 4, [6, 6], [6, 6]);

        assert_eq!(score.cost, 0);
        assert_eq!(score.scored, 25);
    }

    // Tests offsets falling off the exemplar are skipped even when committed
    // Verified by treating out-of-bounds source pixels as black
    #[test]
    fn test_area_diff_skips_source_out_of_bounds() {
        let source = RgbImage::from_pixel(4, 4, Rgb([100, 100, 100]));
        let canvas = fully_committed(12, 12, Rgb([100, 100, 100]));

        let score = area_diff(&source, &canvas, 4, [0, 0], [6, 6]);

        assert_eq!(score.cost, 0);
        assert_eq!(score.scored, 9);
    }

    // Tests fewer committed neighbours never increase the scored count
    // Verified by scoring uncommitted offsets
    #[test]
    fn test_area_diff_scored_count_monotonic_in_coverage() {
        let source = gradient(12, 12);
        let mut sparse = Canvas::new(10, 10);
        let mut dense = Canvas::new(10, 10);

        let mut previous = 0;
        for y in 0..10 {
            for x in 0..10 {
                let color = Rgb([(x * 7) as u8, (y * 11) as u8, 50]);
                dense.commit([x, y], color);
                if (x + y) % 3 == 0 {
                    sparse.commit([x, y], color);
                }

                let scored = area_diff(&source, &dense, 6, [6, 6], [5, 5]).scored;
                assert!(scored >= previous);
                previous = scored;
            }
        }

        let sparse_score = area_diff(&source, &sparse, 6, [6, 6], [5, 5]);
        let dense_score = area_diff(&source, &dense, 6, [6, 6], [5, 5]);
        assert!(sparse_score.scored <= dense_score.scored);
        assert!(sparse_score.cost <= dense_score.cost);
    }

    // Tests every skip rule of a single offset comparison
    // Verified by ignoring the mask when reading output pixels
    #[test]
    fn test_offset_diff_skip_rules() {
        let source = RgbImage::from_pixel(4, 4, Rgb([9, 9, 9]));
        let mut canvas = Canvas::new(4, 4);
        canvas.commit([1, 1], Rgb([0, 0, 0]));

        assert_eq!(offset_diff(&source, &canvas, [1, 1], [1, 1]), Some(27));
        assert_eq!(offset_diff(&source, &canvas, [1, 1], [2, 2]), None);
        assert_eq!(offset_diff(&source, &canvas, [1, 1], [-1, 1]), None);
        assert_eq!(offset_diff(&source, &canvas, [4, 1], [1, 1]), None);
    }
}
