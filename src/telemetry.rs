//! Tracing subscriber setup.
//!
//! The engine itself only emits `tracing` events. Whoever owns the process
//! decides where they go: the binary and both C ABI entry points install
//! the stdout subscriber below, while Rust callers may install their own
//! or none.
//!
//! Output is plain text. Hosts capturing stdout never see ANSI escapes.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "info";

/// `RUST_LOG` filter, falling back to [`DEFAULT_FILTER`]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Build the engine's `fmt` subscriber over any writer.
pub fn subscriber<W>(writer: W, filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .finish()
}

/// Install the stdout subscriber filtered by `RUST_LOG`.
///
/// Returns `true` if this call installed the subscriber, `false` if a
/// global subscriber was already set. Safe to call any number of times.
pub fn init() -> bool {
    tracing::subscriber::set_global_default(subscriber(std::io::stdout, env_filter())).is_ok()
}
