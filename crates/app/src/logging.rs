//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when nothing else is configured.
pub const DEFAULT_FILTER: &str = "info";

/// Picks the filter: an explicit directive first, then `RUST_LOG`, then
/// [`DEFAULT_FILTER`].
///
/// An explicit directive that fails to parse falls back the same way.
#[must_use]
pub fn build_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber, writing to stderr so stdout stays free
/// for `--stdout` output.
///
/// Keeps an already installed subscriber and logs that at debug level.
pub fn init(directive: Option<&str>) {
    let installed = tracing_subscriber::registry()
        .with(build_filter(directive))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
    if let Err(e) = installed {
        tracing::debug!(error = %e, "keeping existing tracing subscriber");
    }
}
