//! Route helpers for static page generation

/// Join a route prefix and a path segment with exactly one `/`
///
/// # Examples
/// ```ignore
/// url_for("/coisas/", "/solid") // -> "/coisas/solid"
/// ```
pub fn url_for(prefix: &str, path: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", prefix)
    } else {
        format!("{}/{}", prefix, path)
    }
}

/// Static route of a post page
pub fn post_path(route: &str, slug: &str) -> String {
    url_for(&format!("/{}", route.trim_matches('/')), slug)
}

/// Relative directory for a route, used when writing page data to disk
pub fn route_dir(route: &str) -> &str {
    route.trim_matches('/')
}
