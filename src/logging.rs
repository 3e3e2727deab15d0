//! Logging setup for the CLI
//!
//! Library code only emits `tracing` events; the binary decides where they go.
//! Events are written to stderr so stdout stays clean for reports.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence. Otherwise only warnings are shown, or debug
/// output (per-pass counts) with `verbose`.
pub fn init(verbose: bool) {
    let fallback = if verbose { "hublin=debug" } else { "hublin=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be installed (tests, embedding programs)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
