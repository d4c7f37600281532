//! Tracing initialization and subscriber setup.
//!
//! Wires the `tracing` macros used throughout the crate to a
//! `tracing-subscriber` pipeline filtered by the configured level.
//! Observability is optional: embedding applications that install their own
//! subscriber can skip this entirely and still capture the crate's spans.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber for the configured level.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set (an `EnvFilter` directive, e.g. `"debug"`
///    or `"forecourt=trace"`)
/// 2. Default: `"info"`
///
/// # Initialization Behavior
///
/// Idempotent: uses `try_init`, so a second call (or a subscriber already
/// installed by the host application) is silently ignored rather than
/// panicking.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer());

    let _ = subscriber.try_init();
}
