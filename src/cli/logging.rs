//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "plyer_notify=warn",
        1 => "plyer_notify=info",
        2 => "plyer_notify=debug",
        _ => "plyer_notify=trace,debug",
    }
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // A subscriber may already be installed when embedded; keep that one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
