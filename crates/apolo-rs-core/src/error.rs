//! Core error types for the apolo-rs router.
//!
//! This module provides the [`ApoloError`] enum covering argument validation,
//! configuration, and handler-registry errors, together with the
//! [`ApoloResult`] alias used throughout the workspace.

use thiserror::Error;

/// The primary error type for the apolo-rs router.
///
/// All errors are raised synchronously to the immediate caller; the router
/// performs no internal recovery or retries. Note that an unresolved path is
/// *not* an error — discovery signals it with `None`.
#[derive(Error, Debug)]
pub enum ApoloError {
    /// An argument passed to a router API was malformed (e.g. an
    /// unrecognized route mutation mode). Raised before any state change.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The route configuration itself is broken, e.g. a route pattern that
    /// does not compile to a valid regular expression.
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    /// A settings value is missing or could not be loaded.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A matched route names a handler that was never registered.
    #[error("No handler registered under '{0}'")]
    NotRegistered(String),

    /// An I/O error occurred (e.g. while reading a settings file).
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A convenience type alias for `Result<T, ApoloError>`.
pub type ApoloResult<T> = Result<T, ApoloError>;
