//! Diagnostic output on stderr via tracing-subscriber

use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_directive(config_level: &str, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        config_level.to_string()
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(config_level: &str, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config_level, verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
