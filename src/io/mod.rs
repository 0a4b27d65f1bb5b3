/// Command-line parsing and subcommand dispatch
pub mod cli;
/// Constants for ranges, defaults and output naming
pub mod configuration;
/// Error types with file context
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Batch progress display
pub mod progress;
/// Text and JSON report rendering
pub mod report;
