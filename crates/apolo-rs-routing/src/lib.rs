//! # apolo-rs-routing
//!
//! URL routing for apolo-rs: an ordered route table, a token-based pattern
//! compiler, first-match discovery, and a handler registry.
//!
//! - [`table`]: the [`RouteTable`] and its three mutation [`Mode`]s
//! - [`pattern`]: token-to-regex compilation of route patterns
//! - [`resolver`]: [`discover`] and the compile-once [`Resolver`]
//! - [`registry`]: identifier-to-capability [`HandlerRegistry`]
//!
//! # Examples
//!
//! ```
//! use apolo_rs_routing::{discover, Mode, RouteTable};
//!
//! let mut table = RouteTable::new();
//! table.append([
//!     ("/post/?", "PostList"),
//!     ("/post/:slug:/?", "PostView"),
//!     ("/post/:slug:/comment/?", "PostCommentList"),
//! ]);
//!
//! assert_eq!(discover(&table, "/post/my-post/comment"), Some("PostCommentList"));
//! assert_eq!(discover(&table, "/article"), None);
//! ```

pub mod pattern;
pub mod registry;
pub mod resolver;
pub mod table;

pub use registry::{Handler, HandlerRegistry};
pub use resolver::{discover, Resolver};
pub use table::{set_routes, Mode, RouteEntry, RouteTable};
