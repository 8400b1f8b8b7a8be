//! Immutable filter, sort and page state behind the news feed.

use rustc_hash::FxHashSet;
use workpulse_core::config::FeedConfig;
use workpulse_core::constants::DEFAULT_PAGE_SIZE;
use workpulse_core::events::types::FeedQueriedEvent;
use workpulse_core::events::EventDispatcher;
use workpulse_core::feed_span;
use workpulse_core::types::{NewsItem, SortOrder};

use crate::engine::{filter_and_sort, page_count, paginate};

/// User-driven feed state.
///
/// Every transition returns a new value. Changing the source selection, the
/// query text or the sort order resets `page` to 1; paging transitions leave
/// the filters untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    sources: FxHashSet<String>,
    query: String,
    sort: SortOrder,
    page: usize,
    page_size: usize,
}

/// One evaluation of a [`FeedQuery`] against a set of items.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedPage<'a> {
    /// Revealed items, at most `page * page_size`.
    pub items: Vec<&'a NewsItem>,
    /// Matches before truncation.
    pub total_matches: usize,
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
}

impl FeedPage<'_> {
    /// Whether another "load more" step would reveal additional items.
    pub fn has_more(&self) -> bool {
        self.items.len() < self.total_matches
    }
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl FeedQuery {
    /// All sources, empty query, newest first, page 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            sources: FxHashSet::default(),
            query: String::new(),
            sort: SortOrder::Newest,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(config.effective_page_size()).with_sort(config.effective_default_sort())
    }

    pub fn sources(&self) -> &FxHashSet<String> {
        &self.sources
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Select `source` if unselected, deselect it otherwise. Resets the page.
    pub fn toggle_source(&self, source: &str) -> Self {
        let mut sources = self.sources.clone();
        if !sources.remove(source) {
            sources.insert(source.to_string());
        }
        Self {
            sources,
            page: 1,
            ..self.clone()
        }
    }

    /// Replace the whole source selection. Resets the page if it changed.
    pub fn with_sources<I, S>(&self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sources: FxHashSet<String> = sources.into_iter().map(Into::into).collect();
        if sources == self.sources {
            return self.clone();
        }
        Self {
            sources,
            page: 1,
            ..self.clone()
        }
    }

    /// Clear the source selection (all sources). Resets the page if it changed.
    pub fn clear_sources(&self) -> Self {
        self.with_sources(std::iter::empty::<String>())
    }

    /// Replace the query text. Resets the page if it changed.
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        let query = query.into();
        if query == self.query {
            return self.clone();
        }
        Self {
            query,
            page: 1,
            ..self.clone()
        }
    }

    /// Replace the sort order. Resets the page if it changed.
    pub fn with_sort(&self, sort: SortOrder) -> Self {
        if sort == self.sort {
            return self.clone();
        }
        Self {
            sort,
            page: 1,
            ..self.clone()
        }
    }

    /// Jump to `page`, clamped to at least 1.
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Reveal one more page, never past the last page for `total_matches`.
    pub fn load_more(&self, total_matches: usize) -> Self {
        let last = page_count(total_matches, self.page_size);
        self.with_page(self.page.saturating_add(1).min(last))
    }

    /// Step back one page, never below 1.
    pub fn previous_page(&self) -> Self {
        self.with_page(self.page.saturating_sub(1))
    }

    /// Evaluate the query against `items`.
    pub fn run<'a>(&self, items: &'a [NewsItem]) -> FeedPage<'a> {
        let _span = feed_span!(self.query, self.sort).entered();

        let matches = filter_and_sort(items, &self.sources, &self.query, self.sort);
        let total_matches = matches.len();
        let revealed = paginate(matches, self.page, self.page_size);

        tracing::debug!(
            sources = self.sources.len(),
            total = items.len(),
            matches = total_matches,
            shown = revealed.len(),
            page = self.page,
            "feed evaluated"
        );

        FeedPage {
            items: revealed,
            total_matches,
            page: self.page,
            page_count: page_count(total_matches, self.page_size),
            page_size: self.page_size,
        }
    }

    /// Evaluate and notify `dispatcher`.
    pub fn run_observed<'a>(
        &self,
        items: &'a [NewsItem],
        dispatcher: &EventDispatcher,
    ) -> FeedPage<'a> {
        let page = self.run(items);
        dispatcher.emit_feed_queried(&FeedQueriedEvent {
            query: self.query.clone(),
            source_count: self.sources.len(),
            sort: self.sort,
            page: page.page,
            total_matches: page.total_matches,
            shown: page.items.len(),
        });
        page
    }
}
