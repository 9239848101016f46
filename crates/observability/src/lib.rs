//! Tracing/logging setup shared by the showroom crates.
//!
//! Two sinks: JSON lines on stdout for native processes and the JS console
//! for the browser build. Both read the same filter.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Initialize process-wide tracing for native processes.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    native::init(filter_from(std::env::var("RUST_LOG").ok().as_deref()));
}

/// Initialize tracing for the browser: every event goes to the JS console.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
#[cfg(target_arch = "wasm32")]
pub fn init_browser() {
    browser::init(filter_from(None));
}

/// Build a filter from a `RUST_LOG`-style directive, falling back to
/// [`DEFAULT_FILTER`].
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

mod native;

#[cfg(target_arch = "wasm32")]
mod browser;
