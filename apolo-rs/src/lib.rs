//! # apolo-rs
//!
//! A minimal, convention-driven URL router for Rust, in the spirit of the
//! Apolo micro-framework: register readable route patterns against handler
//! identifiers, then resolve incoming request paths to the first matching
//! handler.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. You can depend on `apolo-rs` to get everything, or depend on the
//! individual crates for finer-grained control.
//!
//! # Examples
//!
//! ```
//! use apolo_rs::routing::{discover, RouteTable};
//!
//! let mut table = RouteTable::new();
//! table.append([("/show/post/(:digit:)", "PostEditController")]);
//!
//! assert_eq!(discover(&table, "/show/post/25"), Some("PostEditController"));
//! ```

/// Foundation types: errors, settings, and logging.
pub use apolo_rs_core as core;

/// Route table, pattern compilation, discovery, and handler registry.
#[cfg(feature = "routing")]
pub use apolo_rs_routing as routing;
