//! Input/output: plan files, reports, rasters, errors and the CLI

/// Command-line interface and batch processing
pub mod cli;
/// Algorithm constants and defaults
pub mod configuration;
/// Error type and context helpers
pub mod error;
/// JSON report export
pub mod export;
/// PNG raster export
pub mod image;
/// TOML plan loading
pub mod plan;
/// Progress bars for batch runs
pub mod progress;
