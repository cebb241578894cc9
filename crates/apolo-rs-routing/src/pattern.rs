//! Route pattern compilation.
//!
//! Route patterns are plain strings sprinkled with named tokens that expand
//! to regex fragments. [`compile`] turns such a pattern into the source of an
//! anchored regular expression. This is the Rust equivalent of Apolo's
//! `Route::convert2regex()` and its `$conversors` table.
//!
//! # Tokens
//!
//! | Token            | Expansion                  |
//! |------------------|----------------------------|
//! | `/`              | `\/`                       |
//! | `:alpha:`        | `[a-zA-Z]+`                |
//! | `:alphanumeric:` | `[a-zA-Z0-9]+`             |
//! | `:digit:`        | `[0-9]+`                   |
//! | `:slug:`         | `[a-zA-Z0-9_-]+`           |
//! | `:ext:`          | `\.([a-zA-Z0-9~_-]{2,5})`  |
//!
//! Expansion is literal find-and-replace applied in the table order above,
//! not tokenization. The order matters: the slash rule runs first so it
//! cannot mangle the `\/` sequences a later rule might otherwise contain.
//! A known limitation of this scheme is that token text occurring inside
//! unrelated literal text is still replaced; patterns that need a literal
//! `:digit:` in a path segment cannot express it. Existing applications
//! depend on the exact substitution order, so it is preserved as-is.

/// The ordered token substitution table.
///
/// Each entry is `(token, regex_fragment)`. Applied first-to-last.
const CONVERSORS: &[(&str, &str)] = &[
    ("/", r"\/"),
    (":alpha:", "[a-zA-Z]+"),
    (":alphanumeric:", "[a-zA-Z0-9]+"),
    (":digit:", "[0-9]+"),
    (":slug:", "[a-zA-Z0-9_-]+"),
    (":ext:", r"\.([a-zA-Z0-9~_-]{2,5})"),
];

/// Compiles a route pattern into anchored regex source.
///
/// Pure function; any input string is accepted. The result is wrapped in
/// `^`…`$`, so the empty pattern compiles to `"^$"` and matches only the
/// empty path. Capturing parentheses written by the caller around a token
/// survive expansion unchanged.
///
/// # Examples
///
/// ```
/// use apolo_rs_routing::pattern::compile;
///
/// assert_eq!(compile("/post/:digit:"), r"^\/post\/[0-9]+$");
/// assert_eq!(compile("/article/(:slug:)/?"), r"^\/article\/([a-zA-Z0-9_-]+)\/?$");
/// ```
pub fn compile(pattern: &str) -> String {
    let mut source = pattern.to_string();
    for (token, expansion) in CONVERSORS {
        source = source.replace(token, expansion);
    }
    format!("^{source}$")
}
