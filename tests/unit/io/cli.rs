//! Tests for command-line parsing and the end-to-end runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use ringsynth::SynthesisError;
    use ringsynth::io::cli::{Cli, SynthesisRunner};
    use ringsynth::io::configuration::{
        DEFAULT_HEIGHT, DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_SAMPLE_COUNT, DEFAULT_SAMPLE_SIZE,
        DEFAULT_WIDTH,
    };
    use std::path::PathBuf;

    // Tests parsing with no arguments falls back to the fixed file names
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(cli.sample_size, DEFAULT_SAMPLE_SIZE);
        assert_eq!(cli.sample_count, DEFAULT_SAMPLE_COUNT);
        assert_eq!(cli.dimensions(), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
        assert_eq!(cli.seed, None);
        assert!(!cli.quiet);
        assert!(!cli.verbose);
    }

    // Tests parsing with all available arguments
    // Verified by renaming long flags
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "in.png",
            "out.png",
            "--sample-size",
            "4",
            "--sample-count",
            "35",
            "--width",
            "64",
            "--height",
            "48",
            "--double-sample-size",
            "6",
            "--double-sample-count",
            "10",
            "--seed",
            "123",
            "--quiet",
            "--verbose",
        ]);

        assert_eq!(cli.input, PathBuf::from("in.png"));
        assert_eq!(cli.output, PathBuf::from("out.png"));
        assert_eq!(cli.seed, Some(123));
        assert!(cli.quiet);
        assert!(cli.verbose);

        let config = cli.config();
        assert_eq!(config.sample_size, 4);
        assert_eq!(config.sample_count, 35);
        assert_eq!((config.width, config.height), (64, 48));
        assert_eq!(config.double_sample_size, 6);
        assert_eq!(config.double_sample_count, 10);
    }

    // Tests short flag parsing (-s, -c, -w, -H, -q)
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "program", "a.png", "-s", "3", "-c", "7", "-w", "20", "-H", "30", "-q",
        ]);

        assert_eq!(cli.sample_size, 3);
        assert_eq!(cli.sample_count, 7);
        assert_eq!(cli.dimensions(), (20, 30));
        assert!(!cli.should_show_progress());
    }

    // Tests a single dimension implies a square canvas
    // Verified by defaulting the missing dimension
    #[test]
    fn test_single_dimension_is_square() {
        assert_eq!(Cli::parse_from(["program", "-w", "40"]).dimensions(), (40, 40));
        assert_eq!(Cli::parse_from(["program", "-H", "25"]).dimensions(), (25, 25));
    }

    // Tests an explicit seed is used unchanged
    // Verified by always drawing a random seed
    #[test]
    fn test_resolve_seed() {
        assert_eq!(Cli::parse_from(["program", "--seed", "9"]).resolve_seed(), 9);
    }

    // Tests the runner writes a canvas of the requested size
    // Verified by skipping the export step
    #[test]
    fn test_runner_writes_output() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("exemplar.png");
        let output = dir.path().join("nested").join("result.png");
        RgbImage::from_fn(12, 12, |x, y| Rgb([(x * 20) as u8, (y * 20) as u8, 60]))
            .save(&input)
            .expect("write exemplar");

        let input_arg = input.to_string_lossy().to_string();
        let output_arg = output.to_string_lossy().to_string();

        let cli = Cli::parse_from([
            "program",
            input_arg.as_str(),
            output_arg.as_str(),
            "-s",
            "2",
            "-c",
            "5",
            "-w",
            "9",
            "-H",
            "7",
            "--seed",
            "1",
            "--quiet",
        ]);
        let mut runner = SynthesisRunner::new(cli);
        runner.process().expect("run succeeds");

        let written = image::open(&output).expect("output readable").to_rgb8();
        assert_eq!(written.dimensions(), (9, 7));
        assert_eq!(*written.get_pixel(4, 3), Rgb([120, 120, 60]));
    }

    // Tests invalid parameters fail before the exemplar is read
    // Verified by loading the exemplar first
    #[test]
    fn test_runner_validates_before_loading() {
        let cli = Cli::parse_from(["program", "does-not-exist.png", "-s", "0", "--quiet"]);
        let mut runner = SynthesisRunner::new(cli);

        assert!(matches!(
            runner.process(),
            Err(SynthesisError::InvalidParameter {
                parameter: "sample_size",
                ..
            })
        ));
    }

    // Tests a missing exemplar surfaces as a load error
    // Verified by substituting a blank exemplar
    #[test]
    fn test_runner_missing_input() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing.png");
        let missing_arg = missing.to_string_lossy().to_string();
        let cli = Cli::parse_from(["program", missing_arg.as_str(), "--quiet"]);
        let mut runner = SynthesisRunner::new(cli);

        assert!(matches!(
            runner.process(),
            Err(SynthesisError::ImageLoad { .. })
        ));
        assert_eq!(runner.cli().input, missing);
    }
}
