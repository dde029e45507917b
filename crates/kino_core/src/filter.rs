/// Lowercases a row's search text once, when the row is registered.
pub fn normalize_search_key(raw: &str) -> String {
    raw.to_lowercase()
}

/// Case-insensitive, unanchored substring test. The empty query matches everything.
///
/// `search_key` is expected to be normalized already; the query is normalized here.
pub fn matches_query(search_key: &str, query: &str) -> bool {
    search_key.contains(query.to_lowercase().as_str())
}
