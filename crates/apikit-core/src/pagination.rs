//! Pagination link helpers for page-based listings.
//!
//! Pages are zero-indexed. Links keep the path of the request URL and drop
//! any existing query string.
//!
//! # Example
//!
//! ```ignore
//! use apikit_core::pagination::page_links;
//!
//! let (prev, next) = page_links(25, "http://api.test/items?page=1", 1, 10);
//! assert_eq!(prev.as_deref(), Some("http://api.test/items?page=0&page_size=10"));
//! assert_eq!(next.as_deref(), Some("http://api.test/items?page=2&page_size=10"));
//! ```

/// Returns the `(previous, next)` links for `page` of a listing with `count` items.
///
/// There is a previous link whenever `page > 0`, and a next link whenever
/// `page * page_size < count`.
pub fn page_links(
    count: u64,
    url: &str,
    page: u64,
    page_size: u64,
) -> (Option<String>, Option<String>) {
    let base = url.split('?').next().unwrap_or_default();

    let prev = (page > 0).then(|| format!("{base}?page={}&page_size={page_size}", page - 1));
    let next = (page.saturating_mul(page_size) < count)
        .then(|| format!("{base}?page={}&page_size={page_size}", page + 1));

    (prev, next)
}
