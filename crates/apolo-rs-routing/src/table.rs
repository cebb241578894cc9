//! The route table: an ordered mapping from route patterns to handler ids.
//!
//! This module provides [`RouteTable`] and the three [`Mode`]s that govern
//! how a batch of routes combines with the existing table. It is the Rust
//! equivalent of Apolo's `Route::map()`, reworked so the table is an explicit
//! object constructed at a defined point instead of hidden static state; a
//! host that shares the table across threads wraps it itself (e.g. in an
//! `RwLock`, or by building it once at startup and treating it as immutable).
//!
//! Insertion order is semantically load-bearing: discovery resolves a path
//! to the *first* entry whose compiled pattern matches, so the mutation mode
//! used to register a batch decides which routes shadow which.

use std::fmt;
use std::str::FromStr;

use apolo_rs_core::{ApoloError, ApoloResult};

/// How a batch of routes combines with the existing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Overwrite existing keys in place; add new keys at the end.
    #[default]
    Append,
    /// Overwrite existing keys in place; add new keys at the front.
    Prepend,
    /// Discard the table and take the batch verbatim.
    Replace,
}

impl Mode {
    /// Returns the lowercase name of this mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Append => "append",
            Self::Prepend => "prepend",
            Self::Replace => "replace",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ApoloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "append" => Ok(Self::Append),
            "prepend" => Ok(Self::Prepend),
            "replace" => Ok(Self::Replace),
            other => Err(ApoloError::InvalidArgument(format!(
                "Unrecognized route mode '{other}' (expected append, prepend, or replace)"
            ))),
        }
    }
}

/// A single pattern-to-handler entry in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pattern: String,
    handler: String,
}

impl RouteEntry {
    /// Creates a new entry.
    pub fn new(pattern: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            handler: handler.into(),
        }
    }

    /// Returns the raw route pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the handler identifier.
    pub fn handler(&self) -> &str {
        &self.handler
    }
}

/// An ordered mapping from route patterns to handler identifiers.
///
/// Keys are unique: registering a pattern that is already present overwrites
/// its handler in place without moving it. Patterns are stored raw; they are
/// compiled by [`discover`](crate::resolver::discover) or
/// [`Resolver`](crate::resolver::Resolver) when a path is resolved.
///
/// # Examples
///
/// ```
/// use apolo_rs_routing::table::RouteTable;
///
/// let mut table = RouteTable::new();
/// table.append([
///     ("/post/?", "PostList"),
///     ("/post/(:slug:)/?", "PostView"),
/// ]);
/// assert_eq!(table.handler_for("/post/?"), Some("PostList"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entries in table order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Returns the number of registered routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the handler registered for the exact pattern, if any.
    pub fn handler_for(&self, pattern: &str) -> Option<&str> {
        self.position(pattern).map(|i| self.entries[i].handler())
    }

    fn position(&self, pattern: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.pattern == pattern)
    }

    /// Appends a batch of routes.
    ///
    /// Patterns already in the table have their handler overwritten in place;
    /// patterns new to the table are added at the end, in batch order.
    pub fn append<P, H>(&mut self, routes: impl IntoIterator<Item = (P, H)>)
    where
        P: Into<String>,
        H: Into<String>,
    {
        for (pattern, handler) in routes {
            let pattern = pattern.into();
            let handler = handler.into();
            if let Some(idx) = self.position(&pattern) {
                self.entries[idx].handler = handler;
            } else {
                self.entries.push(RouteEntry { pattern, handler });
            }
        }
    }

    /// Prepends a batch of routes.
    ///
    /// Patterns already in the table have their handler overwritten in place
    /// (their position does not change). Patterns new to the table are
    /// inserted as a block at the front, in batch order, so across repeated
    /// calls the most recently prepended batch sits first.
    pub fn prepend<P, H>(&mut self, routes: impl IntoIterator<Item = (P, H)>)
    where
        P: Into<String>,
        H: Into<String>,
    {
        let mut fresh: Vec<RouteEntry> = Vec::new();
        for (pattern, handler) in routes {
            let pattern = pattern.into();
            let handler = handler.into();
            if let Some(idx) = self.position(&pattern) {
                self.entries[idx].handler = handler;
            } else if let Some(idx) = fresh.iter().position(|e| e.pattern == pattern) {
                fresh[idx].handler = handler;
            } else {
                fresh.push(RouteEntry { pattern, handler });
            }
        }
        fresh.append(&mut self.entries);
        self.entries = fresh;
    }

    /// Replaces the table with the given batch.
    ///
    /// Duplicate patterns within the batch collapse to a single entry at the
    /// first-seen position with the last-seen handler, so the table never
    /// holds duplicate keys.
    pub fn replace<P, H>(&mut self, routes: impl IntoIterator<Item = (P, H)>)
    where
        P: Into<String>,
        H: Into<String>,
    {
        self.entries.clear();
        self.append(routes);
    }

    /// Combines a batch of routes with the table according to `mode`.
    pub fn merge<P, H>(&mut self, routes: impl IntoIterator<Item = (P, H)>, mode: Mode)
    where
        P: Into<String>,
        H: Into<String>,
    {
        match mode {
            Mode::Append => self.append(routes),
            Mode::Prepend => self.prepend(routes),
            Mode::Replace => self.replace(routes),
        }
    }

    /// Low-level combined read/write access, the Rust equivalent of Apolo's
    /// `Route::map($routes, $mode)`.
    ///
    /// Passing `None` for `routes` is a read: the current entries are
    /// returned and the table is left untouched. Passing `Some` is a write:
    /// the batch is merged according to `mode` and `None` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ApoloError::InvalidArgument`] if `mode` is not one of
    /// `"append"`, `"prepend"`, or `"replace"`. The mode is validated before
    /// any mutation, so a failed call leaves the table unchanged.
    pub fn map(
        &mut self,
        routes: Option<&[(&str, &str)]>,
        mode: &str,
    ) -> ApoloResult<Option<&[RouteEntry]>> {
        let mode = Mode::from_str(mode)?;
        match routes {
            None => Ok(Some(self.entries())),
            Some(batch) => {
                self.merge(batch.iter().copied(), mode);
                Ok(None)
            }
        }
    }
}

/// Bulk-registers routes into `table`, combining them according to `mode`.
///
/// Thin convenience over [`RouteTable::merge`], mirroring Apolo's
/// `Apolo::setRoutes()` entry point.
pub fn set_routes<P, H>(
    table: &mut RouteTable,
    routes: impl IntoIterator<Item = (P, H)>,
    mode: Mode,
) where
    P: Into<String>,
    H: Into<String>,
{
    table.merge(routes, mode);
}
