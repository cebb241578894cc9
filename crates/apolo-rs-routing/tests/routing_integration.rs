//! Integration tests for the routing stack.
//!
//! Tests cover: table mutation under all three modes, pattern compilation,
//! first-match discovery over a realistic blog-style table, the low-level
//! `map` surface, and handler registry dispatch.

use std::str::FromStr;
use std::sync::Arc;

use apolo_rs_routing::pattern::compile;
use apolo_rs_routing::registry::{Handler, HandlerRegistry};
use apolo_rs_routing::{discover, set_routes, Mode, Resolver, RouteEntry, RouteTable};

fn blog_table() -> RouteTable {
    let mut table = RouteTable::new();
    set_routes(
        &mut table,
        [
            ("/post/?", "PostList"),
            ("/post/:slug:/?", "PostView"),
            ("/post/:slug:/comment/?", "PostCommentList"),
        ],
        Mode::Append,
    );
    table
}

#[test]
fn test_compiler_fixed_points() {
    assert_eq!(compile(""), "^$");
    assert_eq!(compile("/method/action"), r"^\/method\/action$");
    assert_eq!(compile("action-:digit:"), "^action-[0-9]+$");
    assert_eq!(
        compile("/article/(:slug:)/?"),
        r"^\/article\/([a-zA-Z0-9_-]+)\/?$"
    );
}

#[test]
fn test_discovery_over_blog_table() {
    let table = blog_table();
    assert_eq!(discover(&table, "/post/my-post/comment"), Some("PostCommentList"));
    assert_eq!(discover(&table, "/post/my-post"), Some("PostView"));
    assert_eq!(discover(&table, "/post"), Some("PostList"));
    assert_eq!(discover(&table, "/article"), None);
}

#[test]
fn test_mutation_modes_shape_discovery() {
    let mut table = RouteTable::new();
    table.append([("/:slug:", "CatchAll")]);

    // A more specific route appended later loses to the catch-all.
    table.append([("/about", "About")]);
    assert_eq!(discover(&table, "/about"), Some("CatchAll"));

    // Prepending puts it in front of the catch-all.
    let mut table = RouteTable::new();
    table.append([("/:slug:", "CatchAll")]);
    table.prepend([("/about", "About")]);
    assert_eq!(discover(&table, "/about"), Some("About"));
    assert_eq!(discover(&table, "/anything-else"), Some("CatchAll"));
}

#[test]
fn test_replace_resets_the_table() {
    let mut table = blog_table();
    table.replace([("/", "Home")]);
    assert_eq!(table.len(), 1);
    assert_eq!(discover(&table, "/post"), None);
    assert_eq!(discover(&table, "/"), Some("Home"));
}

#[test]
fn test_map_surface_read_write_and_validation() {
    let mut table = RouteTable::new();

    // Write: returns nothing.
    assert!(table.map(Some(&[("/", "Home")]), "append").unwrap().is_none());

    // Read: returns the current entries.
    let entries: Vec<RouteEntry> = table.map(None, "append").unwrap().unwrap().to_vec();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].handler(), "Home");

    // An unrecognized mode fails before mutating anything.
    assert!(table.map(Some(&[("/x", "X")]), "bla").is_err());
    assert_eq!(table.len(), 1);
    assert!(Mode::from_str("bla").is_err());
}

#[test]
fn test_resolver_agrees_with_discover_after_mutations() {
    let mut table = blog_table();
    table.prepend([("/post/latest/?", "PostLatest")]);
    let resolver = Resolver::from_table(&table).unwrap();

    for path in [
        "/post",
        "/post/latest",
        "/post/my-post",
        "/post/my-post/comment",
        "/article",
    ] {
        assert_eq!(resolver.resolve(path), discover(&table, path), "path {path}");
    }
    // "/post/latest" is also a valid slug; the prepended route must win.
    assert_eq!(resolver.resolve("/post/latest"), Some("PostLatest"));
}

#[test]
fn test_registry_dispatch_end_to_end() {
    let table = blog_table();

    let mut registry: HandlerRegistry<dyn Handler<Response = String>> = HandlerRegistry::new();
    registry.register("PostList", Arc::new(|_: &str| "list".to_string()));
    registry.register("PostView", Arc::new(|path: &str| format!("view {path}")));
    registry.register("PostCommentList", Arc::new(|_: &str| "comments".to_string()));

    let handler = registry.dispatch(&table, "/post/my-post").unwrap().unwrap();
    assert_eq!(handler.invoke("/post/my-post"), "view /post/my-post");

    assert!(registry.dispatch(&table, "/article").unwrap().is_none());
}

#[test]
fn test_extension_routes() {
    let mut table = RouteTable::new();
    table.append([("/download/:slug::ext:", "Download")]);
    assert_eq!(discover(&table, "/download/report.pdf"), Some("Download"));
    assert_eq!(discover(&table, "/download/report"), None);
    assert_eq!(discover(&table, "/download/report.x"), None);
}
