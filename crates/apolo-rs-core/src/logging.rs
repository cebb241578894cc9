//! Logging integration for the apolo-rs router.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-request spans.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The log level is read from `settings.log_level` (e.g. "debug", "info",
/// "warn", "error"). In debug mode a pretty, human-readable format is used;
/// in production a structured JSON format is used.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for resolving a request path.
///
/// Attach this span around route discovery so that all log entries emitted
/// while resolving include the request path.
///
/// # Examples
///
/// ```
/// use apolo_rs_core::logging::discovery_span;
///
/// let span = discovery_span("/post/my-post");
/// let _guard = span.enter();
/// tracing::info!("resolving route");
/// ```
pub fn discovery_span(path: &str) -> tracing::Span {
    tracing::info_span!("discover", path = path)
}
