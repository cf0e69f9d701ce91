/// Inline completion offered for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    /// Char range of the filled-in suffix, selected so further typing replaces it.
    pub selection: (usize, usize),
}

/// Completes `query` to `first` when `first` starts with the query (ignoring
/// case) and is strictly longer than it.
#[must_use]
pub fn complete(query: &str, first: &str) -> Option<Completion> {
    let query_len = query.chars().count();
    let first_len = first.chars().count();

    if first_len <= query_len {
        return None;
    }
    if !first.to_lowercase().starts_with(&query.to_lowercase()) {
        return None;
    }

    Some(Completion {
        text: first.to_string(),
        selection: (query_len, first_len),
    })
}
