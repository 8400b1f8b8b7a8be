//! Filter, order and paginate news items.

use rustc_hash::FxHashSet;
use workpulse_core::types::{NewsItem, SortOrder};

use crate::filter::{matches_sources, matches_text, normalize_query};

/// Filter by source and text, then order by publication time.
///
/// Returns borrowed items only, so the output is always a subsequence of
/// `items` (no record is synthesized or duplicated). Sorting is stable:
/// items with equal timestamps keep their input order. Unparseable
/// timestamps sort as the Unix epoch.
pub fn filter_and_sort<'a>(
    items: &'a [NewsItem],
    selected_sources: &FxHashSet<String>,
    query: &str,
    sort: SortOrder,
) -> Vec<&'a NewsItem> {
    let needle = normalize_query(query);

    let mut keyed: Vec<(i64, &'a NewsItem)> = items
        .iter()
        .filter(|item| matches_sources(item, selected_sources))
        .filter(|item| needle.as_deref().map_or(true, |n| matches_text(item, n)))
        .map(|item| (item.sort_key(), item))
        .collect();

    match sort {
        SortOrder::Newest => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
        SortOrder::Oldest => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
    }

    keyed.into_iter().map(|(_, item)| item).collect()
}

/// "Load more" truncation: keep the first `page * page_size` matches.
/// `page` and `page_size` below 1 are treated as 1.
pub fn paginate<T>(mut matches: Vec<T>, page: usize, page_size: usize) -> Vec<T> {
    let limit = page.max(1).saturating_mul(page_size.max(1));
    matches.truncate(limit);
    matches
}

/// Number of pages needed to reveal `total` matches; at least 1.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_truncates_cumulatively() {
        let v: Vec<usize> = (0..10).collect();
        assert_eq!(paginate(v.clone(), 1, 6).len(), 6);
        assert_eq!(paginate(v.clone(), 2, 6).len(), 10);
        assert_eq!(paginate(v.clone(), 0, 6).len(), 6);
        assert_eq!(paginate(v, 1, 0).len(), 1);
    }

    #[test]
    fn page_count_is_at_least_one() {
        assert_eq!(page_count(0, 6), 1);
        assert_eq!(page_count(6, 6), 1);
        assert_eq!(page_count(7, 6), 2);
        assert_eq!(page_count(10, 6), 2);
        assert_eq!(page_count(13, 6), 3);
    }
}
