//! Record predicates: source membership and case-insensitive text match.

use rustc_hash::FxHashSet;
use workpulse_core::types::NewsItem;

/// Empty selection means "all sources". Otherwise exact, case-sensitive membership.
pub fn matches_sources(item: &NewsItem, selected: &FxHashSet<String>) -> bool {
    selected.is_empty() || selected.contains(&item.source)
}

/// Normalize a user query into the needle used by [`matches_text`].
/// Returns `None` when the trimmed query is empty (no text filter).
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Substring match of an already-lowercased `needle` against the title,
/// keywords, and every organization/person/event label.
pub fn matches_text(item: &NewsItem, needle: &str) -> bool {
    contains_ci(&item.title, needle)
        || item.keywords.iter().any(|k| contains_ci(k, needle))
        || item.entities.labels().any(|label| contains_ci(label, needle))
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
