//! CLI entry point for the Vastu floor-plan layout tool

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vastuplan::io::cli::{Cli, FileProcessor};
use vastuplan::io::configuration::DEFAULT_LOG_FILTER;

fn main() -> vastuplan::Result<()> {
    let cli = Cli::parse();

    // --verbose wins over RUST_LOG, RUST_LOG over the default
    let filter = if cli.verbose {
        EnvFilter::new("vastuplan=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut processor = FileProcessor::new(cli);
    let processed = processor.process()?;
    tracing::info!(processed, "done");
    Ok(())
}
