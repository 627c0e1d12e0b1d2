//! Case-insensitive free-text matching shared by the picker and the board search.

/// Types that can be matched against a free-text query
pub trait Searchable {
    /// Fields the query is matched against
    fn search_fields(&self) -> Vec<&str>;

    /// `needle` must already be lowercased (see [`normalize_query`]).
    fn matches_normalized(&self, needle: &str) -> bool {
        self.search_fields()
            .into_iter()
            .any(|field| contains_ignore_case(field, needle))
    }

    /// Checks whether any search field contains `query`, ignoring case
    fn matches_filter(&self, query: &str) -> bool {
        self.matches_normalized(&normalize_query(query))
    }
}

/// Lowercases a query once so it can be reused across many items
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase()
}

/// `needle` is expected to be lowercased already
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
