/// Path utilities for pattern registration and caller-side cleanup
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Collapses every run of consecutive `/` into a single `/`
///
/// **Pure function** with zero-copy optimization using `Cow<'_, str>`.
///
/// Unlike a full normalization this keeps a single trailing slash and does
/// not add a leading one. The store never calls it: lookups see the path
/// exactly as given, so callers clean request paths before `find()` when
/// they want `//` tolerated.
///
/// # Examples
///
/// ```
/// use rhtmx_route_store::path::clean_path;
/// use std::borrow::Cow;
///
/// assert_eq!(clean_path("a///b//c/"), "a/b/c/");
/// assert_eq!(clean_path("//users//42"), "/users/42");
///
/// // Already clean: borrowed, no allocation
/// assert!(matches!(clean_path("/about"), Cow::Borrowed("/about")));
/// ```
///
/// # Performance
///
/// - O(n) where n is path length
/// - Single allocation only when a run of slashes is found
pub fn clean_path(path: &str) -> Cow<'_, str> {
    if !path.contains("//") {
        return Cow::Borrowed(path);
    }

    let mut cleaned = String::with_capacity(path.len());
    let mut previous_slash = false;
    for c in path.chars() {
        let is_slash = c == '/';
        if !(is_slash && previous_slash) {
            cleaned.push(c);
        }
        previous_slash = is_slash;
    }

    Cow::Owned(cleaned)
}

/// Removes one trailing `/` from a pattern
///
/// A pattern that is exactly `/` is left alone, and only the last slash is
/// removed (`foo//` becomes `foo/`).
///
/// # Examples
///
/// ```
/// use rhtmx_route_store::path::trim_ending_slash;
///
/// assert_eq!(trim_ending_slash("/users/"), "/users");
/// assert_eq!(trim_ending_slash("/users//"), "/users/");
/// assert_eq!(trim_ending_slash("/"), "/");
/// assert_eq!(trim_ending_slash(""), "");
/// ```
pub fn trim_ending_slash(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(trimmed) if path.len() > 1 => trimmed,
        _ => path,
    }
}
