//! Logging setup for javaimport.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for the javaimport crates.
fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("javaimport={level}")
}

/// Initialize logging for javaimport. Output goes to stderr so stdout stays
/// clean for results.
///
/// `RUST_LOG` takes precedence when set; otherwise `verbose` selects debug
/// output (compiled patterns, dropped entries, timings) over info.
/// Calling this twice is harmless.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
