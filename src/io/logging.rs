//! Diagnostic logging setup for the command-line front end

use tracing_subscriber::EnvFilter;

/// Filter directive for a verbosity level
///
/// `RUST_LOG` takes precedence when set.
pub const fn default_directive(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "weavelab=info",
        2 => "weavelab=debug",
        _ => "weavelab=trace",
    }
}

/// Install a formatted subscriber writing to stderr
///
/// Returns false when a global subscriber was already installed.
pub fn init_logging(verbosity: u8, quiet: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
