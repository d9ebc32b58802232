//! Splitting a `navigate` target into path and query, for adapters that
//! store the two separately (namely [`crate::MemoryAdapter`]).

/// Split `url` into `(pathname, search)`. `search` never carries the
/// leading `?`; a `url` with no `?` yields an empty `search`.
pub fn split_url(url: &str) -> (String, String) {
    match url.split_once('?') {
        Some((path, query)) => (path.to_string(), query.to_string()),
        None => (url.to_string(), String::new()),
    }
}
