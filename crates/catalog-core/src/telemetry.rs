//! # Telemetry
//!
//! Subscriber setup for shells and tests. The library itself only emits
//! `tracing` events; nothing is printed until a subscriber is installed.
//!
//! ## Log Levels
//! - `RUST_LOG=catalog_core=trace` - everything from this crate
//! - `RUST_LOG=warn` - stale references and bad config only
//! - Default: `info,catalog_core=debug`

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info,catalog_core=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs a global fmt subscriber. Returns false if one was already set.
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .try_init()
        .is_ok()
}

/// Like [`init_tracing`], but writes through the test harness so output is
/// captured per test. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_test_writer()
        .try_init();
}
