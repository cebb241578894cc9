//! # apolo-rs-core
//!
//! Foundation types for the apolo-rs router. This crate has no routing logic
//! of its own; it provides the shared pieces the other crates build on.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result alias
//! - [`settings`] - Process-wide configuration with a TOML loader
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;

// Re-export the most commonly used types at the crate root.
pub use error::{ApoloError, ApoloResult};
pub use settings::{Settings, SETTINGS};
