//! Tracing subscriber setup for hosts and tests.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// The filter defaults to `info` and can be overridden through `RUST_LOG`.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
