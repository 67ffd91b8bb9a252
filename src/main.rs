//! CLI entry point for ring-ordered texture synthesis

use clap::Parser;
use ringsynth::io::cli::{Cli, SynthesisRunner};
use tracing::Level;

fn main() -> ringsynth::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut runner = SynthesisRunner::new(cli);
    runner.process()
}
