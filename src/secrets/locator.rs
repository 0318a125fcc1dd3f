//! Locator to backend path translation (KV v2 layout).

/// Split a locator into `(mount, subpath)` on the first `/`.
///
/// `"a/b/c"` gives `("a", "b/c")`, `"a"` gives `("a", "")`.
pub fn split_locator(locator: &str) -> (&str, &str) {
    locator.split_once('/').unwrap_or((locator, ""))
}

/// KV v2 data path for a locator: `<mount>/data/<subpath>`.
///
/// Segments are joined verbatim; an empty subpath leaves a trailing `/`.
pub fn lookup_path(locator: &str) -> String {
    let (mount, subpath) = split_locator(locator);
    format!("{mount}/data/{subpath}")
}

/// Whether the locator has a usable (non-empty) mount segment.
pub fn has_mount(locator: &str) -> bool {
    !split_locator(locator).0.is_empty()
}
