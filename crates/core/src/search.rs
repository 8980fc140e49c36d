//! Search and pagination helpers for portfolio listings.

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default page size for listings.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Maximum page size for listings.
pub const MAX_LIST_LIMIT: i64 = 500;

/// Default number of search results per page.
pub const DEFAULT_SEARCH_LIMIT: i64 = 20;

/// Maximum number of search results per page.
pub const MAX_SEARCH_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Query builder helpers
// ---------------------------------------------------------------------------

/// Split user input into terms usable in a `tsquery`.
///
/// Strips characters other than alphanumerics and `_` from the ends of each
/// term and drops empty terms.
fn sanitize_terms(query: &str) -> Option<Vec<&str>> {
    let terms: Vec<&str> = query
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric() && c != '_'))
        .filter(|t| !t.is_empty())
        .filter(|t| t.chars().all(|c| c.is_alphanumeric() || c == '_'))
        .collect();

    if terms.is_empty() {
        None
    } else {
        Some(terms)
    }
}

/// Build a prefix `tsquery` so partially typed words still match.
///
/// All terms are ANDed; the last one gets `:*`.
///
/// # Examples
///
/// ```
/// use gallery_core::search::build_prefix_tsquery;
/// assert_eq!(build_prefix_tsquery("koi"), Some("koi:*".to_string()));
/// assert_eq!(build_prefix_tsquery("blue dra"), Some("blue & dra:*".to_string()));
/// assert_eq!(build_prefix_tsquery("  "), None);
/// ```
pub fn build_prefix_tsquery(query: &str) -> Option<String> {
    let terms = sanitize_terms(query)?;
    let (last, exact) = terms.split_last()?;
    if exact.is_empty() {
        Some(format!("{last}:*"))
    } else {
        Some(format!("{} & {last}:*", exact.join(" & ")))
    }
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
