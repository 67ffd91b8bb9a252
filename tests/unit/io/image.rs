//! Tests for exemplar loading and canvas export including error handling

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use ringsynth::SynthesisError;
    use ringsynth::io::image::{export_canvas, load_source};

    // Tests an exported canvas loads back with identical pixels
    // Verified by disabling the file save operation
    #[test]
    fn test_export_then_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("canvas.png");
        let canvas = RgbImage::from_fn(5, 3, |x, y| Rgb([(x * 40) as u8, (y * 80) as u8, 17]));

        export_canvas(&canvas, &path).expect("export succeeds");
        let loaded = load_source(&path).expect("load succeeds");

        assert_eq!(loaded, canvas);
    }

    // Tests export creates missing parent directories
    // Verified by removing the directory creation step
    #[test]
    fn test_export_creates_parent_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("a").join("b").join("out.png");

        export_canvas(&RgbImage::new(2, 2), &path).expect("export succeeds");

        assert!(path.exists());
    }

    // Tests alpha is dropped when loading an RGBA exemplar
    // Verified by loading without converting to RGB
    #[test]
    fn test_load_discards_alpha() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("rgba.png");
        RgbaImage::from_pixel(3, 3, Rgba([10, 20, 30, 40]))
            .save(&path)
            .expect("write rgba");

        let loaded = load_source(&path).expect("load succeeds");

        assert_eq!(*loaded.get_pixel(1, 1), Rgb([10, 20, 30]));
    }

    // Tests missing files report the path they were loaded from
    // Verified by discarding the path in the error
    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.png");

        match load_source(&path) {
            Err(SynthesisError::ImageLoad { path: reported, .. }) => assert_eq!(reported, path),
            other => unreachable!("expected ImageLoad, got {other:?}"),
        }
    }

    // Tests unknown output formats surface as export errors
    // Verified by ignoring the encoder result
    #[test]
    fn test_export_unknown_format() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("canvas.notaformat");

        assert!(matches!(
            export_canvas(&RgbImage::new(2, 2), &path),
            Err(SynthesisError::ImageExport { .. })
        ));
    }
}
