//! Structured logging bootstrap.
//!
//! The library logs through `tracing` macros with structured fields
//! (`event_type = "capture_change"`, ...); this module wires a subscriber
//! for embedders and tests that do not bring their own.
//!
//! # Usage
//!
//! ```rust,ignore
//! hotkey_capture::logging::init();
//! // ... tracing output now reaches stderr, filtered by RUST_LOG
//! ```

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a compact stderr subscriber honoring `RUST_LOG`.
///
/// Defaults to `info` when `RUST_LOG` is unset. Safe to call more than once,
/// and a no-op when the host already installed a global subscriber.
pub fn init() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact()
            .try_init();
    });
}
