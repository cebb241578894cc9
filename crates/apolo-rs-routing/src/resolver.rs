//! Route discovery: resolving a request path to a handler identifier.
//!
//! Two flavors are provided. [`discover`] walks the table and compiles each
//! pattern on the fly, exactly like Apolo's `Apolo::discover()` over
//! `Route::processedRoutes()`. [`Resolver`] compiles the whole table once up
//! front and answers repeated lookups without recompiling; its observable
//! behavior is identical.

use regex::Regex;

use apolo_rs_core::{ApoloError, ApoloResult};

use crate::pattern;
use crate::table::RouteTable;

/// Resolves `path` to the handler id of the first matching route.
///
/// Entries are tried strictly in table order; each raw pattern is compiled
/// via [`pattern::compile`] and tested against the whole path (the compiled
/// source carries its own `^`…`$` anchors). Returns `None` when nothing
/// matches — an unresolved path is not an error.
///
/// A pattern whose compiled source is not a valid regex is skipped with a
/// warning; discovery carries on with the remaining entries.
///
/// # Examples
///
/// ```
/// use apolo_rs_routing::resolver::discover;
/// use apolo_rs_routing::table::RouteTable;
///
/// let mut table = RouteTable::new();
/// table.append([("/show/post/(:digit:)", "PostEditController")]);
///
/// assert_eq!(discover(&table, "/show/post/25"), Some("PostEditController"));
/// assert_eq!(discover(&table, "/show/post/abc"), None);
/// ```
pub fn discover<'t>(table: &'t RouteTable, path: &str) -> Option<&'t str> {
    for entry in table.entries() {
        let source = pattern::compile(entry.pattern());
        match Regex::new(&source) {
            Ok(regex) => {
                if regex.is_match(path) {
                    tracing::debug!(
                        pattern = entry.pattern(),
                        handler = entry.handler(),
                        path,
                        "route matched"
                    );
                    return Some(entry.handler());
                }
            }
            Err(error) => {
                tracing::warn!(
                    pattern = entry.pattern(),
                    %error,
                    "skipping route whose pattern does not compile to a valid regex"
                );
            }
        }
    }
    None
}

/// A route table compiled down to ready-to-match regexes.
///
/// Patterns are compiled once at construction, in table order, so repeated
/// lookups avoid per-call regex compilation. Build it after the table has
/// settled (typically at the end of bootstrap) and share it read-only.
#[derive(Debug, Clone)]
pub struct Resolver {
    routes: Vec<(Regex, String)>,
}

impl Resolver {
    /// Compiles every route in `table`.
    ///
    /// # Errors
    ///
    /// Returns [`ApoloError::ImproperlyConfigured`] if any pattern compiles
    /// to an invalid regex. Unlike [`discover`], which skips such routes at
    /// lookup time, construction surfaces the broken route eagerly.
    pub fn from_table(table: &RouteTable) -> ApoloResult<Self> {
        let mut routes = Vec::with_capacity(table.len());
        for entry in table.entries() {
            let source = pattern::compile(entry.pattern());
            let regex = Regex::new(&source).map_err(|e| {
                ApoloError::ImproperlyConfigured(format!(
                    "Route '{}' compiles to an invalid regex: {e}",
                    entry.pattern()
                ))
            })?;
            routes.push((regex, entry.handler().to_string()));
        }
        Ok(Self { routes })
    }

    /// Resolves `path` to the handler id of the first matching route.
    pub fn resolve(&self, path: &str) -> Option<&str> {
        self.routes
            .iter()
            .find(|(regex, _)| regex.is_match(path))
            .map(|(_, handler)| handler.as_str())
    }

    /// Returns the number of compiled routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if the resolver holds no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
