//! Logging setup.
//!
//! Diagnostics go to stderr so they never mix with command output on stdout.
//! `RUST_LOG` wins over the configured level.

use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

/// Build the filter from `RUST_LOG`, falling back to `default_level`.
///
/// A bare level such as `info` is scoped to this crate so dependency noise
/// stays out; full directives are used as given.
#[must_use]
pub fn build_filter(env_value: Option<&str>, default_level: &str) -> EnvFilter {
    let directive = env_value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default_level);

    let directive = if directive.contains('=') || directive.contains(',') {
        directive.to_string()
    } else {
        format!("{}={directive}", env!("CARGO_PKG_NAME").replace('-', "_"))
    };

    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(default_level: &str) {
    let env_value = std::env::var("RUST_LOG").ok();
    let filter = build_filter(env_value.as_deref(), default_level);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Subscriber for unit tests; force with `Lazy::force(&TEST_LOGGING)`.
pub static TEST_LOGGING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("paperclips=trace"))
        .with_test_writer()
        .try_init();
});
