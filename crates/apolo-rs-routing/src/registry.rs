//! Handler registration and dispatch.
//!
//! The route table stores handler *identifiers* — opaque strings the router
//! never interprets beyond identity. Apolo resolved those identifiers by
//! ambient class-name lookup at call time; here the lookup is an explicit
//! [`HandlerRegistry`] populated once at startup, mapping each identifier to
//! a shared handler capability.
//!
//! The registry is generic over the capability type, so a host can register
//! `Arc<dyn Handler<Response = …>>` trait objects, bare closures, or any
//! concrete type of its own. What "invoking" a handler means (rendering,
//! parameter binding, verb dispatch) stays outside this crate.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use apolo_rs_core::{ApoloError, ApoloResult};

use crate::resolver;
use crate::table::RouteTable;

/// A capability that can act on a matched request path.
///
/// This is the minimal shape a handler needs: it is handed the path that
/// matched its route and produces whatever response type the host works
/// with. Any `Fn(&str) -> R` closure implements it.
pub trait Handler: Send + Sync {
    /// The value produced by invoking this handler.
    type Response;

    /// Invokes the handler for the path that matched its route.
    fn invoke(&self, path: &str) -> Self::Response;
}

impl<F, R> Handler for F
where
    F: Fn(&str) -> R + Send + Sync,
{
    type Response = R;

    fn invoke(&self, path: &str) -> R {
        self(path)
    }
}

/// Maps handler identifiers to handler capabilities.
///
/// Populate the registry during bootstrap, then share it read-only. Lookups
/// clone the stored `Arc`, so resolved handlers outlive the registry borrow.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use apolo_rs_routing::registry::{Handler, HandlerRegistry};
/// use apolo_rs_routing::table::RouteTable;
///
/// let mut table = RouteTable::new();
/// table.append([("/post/(:slug:)/?", "PostView")]);
///
/// let mut registry: HandlerRegistry<dyn Handler<Response = String>> =
///     HandlerRegistry::new();
/// registry.register("PostView", Arc::new(|path: &str| format!("post at {path}")));
///
/// let handler = registry.dispatch(&table, "/post/my-post").unwrap().unwrap();
/// assert_eq!(handler.invoke("/post/my-post"), "post at /post/my-post");
/// ```
pub struct HandlerRegistry<H: ?Sized> {
    handlers: HashMap<String, Arc<H>>,
}

impl<H: ?Sized> Default for HandlerRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ?Sized> fmt::Debug for HandlerRegistry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("HandlerRegistry")
            .field("handlers", &names)
            .finish()
    }
}

impl<H: ?Sized> HandlerRegistry<H> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers a handler under the given identifier.
    ///
    /// Returns the previously registered handler if the identifier was
    /// already taken.
    pub fn register(&mut self, name: impl Into<String>, handler: Arc<H>) -> Option<Arc<H>> {
        self.handlers.insert(name.into(), handler)
    }

    /// Looks up a handler by identifier.
    pub fn get(&self, name: &str) -> Option<Arc<H>> {
        self.handlers.get(name).cloned()
    }

    /// Looks up a handler by identifier, failing if it is missing.
    ///
    /// # Errors
    ///
    /// Returns [`ApoloError::NotRegistered`] if no handler was registered
    /// under `name`.
    pub fn require(&self, name: &str) -> ApoloResult<Arc<H>> {
        self.get(name)
            .ok_or_else(|| ApoloError::NotRegistered(name.to_string()))
    }

    /// Returns `true` if a handler is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Returns the number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Resolves `path` through the route table and looks up the matched
    /// handler.
    ///
    /// Returns `Ok(None)` when no route matches (not an error). A route that
    /// matches but names an unregistered handler is a configuration fault
    /// and is surfaced as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ApoloError::NotRegistered`] if the matched route's handler
    /// identifier is absent from the registry.
    pub fn dispatch(&self, table: &RouteTable, path: &str) -> ApoloResult<Option<Arc<H>>> {
        match resolver::discover(table, path) {
            None => Ok(None),
            Some(name) => self.require(name).map(Some),
        }
    }
}
