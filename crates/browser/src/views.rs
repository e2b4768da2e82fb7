//! The two list screens: featured (home) and the full catalog.
//!
//! Views hold input state and a memo. They borrow the catalog on each
//! render, so results point straight into it.

use crate::memo::{MemoizedQuery, Stage};
use crate::state::BrowseState;
use catalog::{Catalog, MovieRecord};
use query::{FeaturedPage, SortDirection, SortKey};

/// Number of movies on the home screen
pub const FEATURED_LIMIT: usize = 6;

const NO_MATCHES: &str = "No movies match your search criteria.";
const NO_MATCHES_FOR_FILTERS: &str = "No movies match your current filters.";
const EMPTY_CATALOG: &str = "Check back later for new releases!";

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

// =============================================================================
// Featured (home screen)
// =============================================================================

/// Home screen: the first few matches in catalog order.
#[derive(Debug)]
pub struct FeaturedView {
    state: BrowseState,
    limit: usize,
    memo: MemoizedQuery,
}

impl FeaturedView {
    pub fn new() -> Self {
        Self::with_limit(FEATURED_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            state: BrowseState::new(),
            limit,
            memo: MemoizedQuery::new(Stage::Filter),
        }
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut BrowseState {
        &mut self.state
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Pass the same catalog on every call.
    pub fn render<'a>(&mut self, catalog: &'a Catalog) -> FeaturedPage<'a> {
        let matches = self.memo.run(catalog, self.state.params());
        FeaturedPage::from_matches(matches, self.limit)
    }

    /// Line shown above the results
    pub fn summary(&self, page: &FeaturedPage<'_>, catalog_len: usize) -> String {
        if !self.state.has_active_filters() {
            return format!("Featured Movies ({} of {})", page.movies.len(), catalog_len);
        }

        let mut line = format!(
            "Found {} movie{}",
            page.total_matches,
            plural(page.total_matches)
        );
        if !self.state.search_text().is_empty() {
            line.push_str(&format!(" matching \"{}\"", self.state.search_text()));
        }
        if let Some(genre) = self.state.genre().label() {
            line.push_str(&format!(" in {genre}"));
        }
        line
    }

    /// Message for an empty result
    pub fn empty_message(&self) -> &'static str {
        if self.state.has_active_filters() {
            NO_MATCHES
        } else {
            EMPTY_CATALOG
        }
    }

    pub fn memo(&self) -> &MemoizedQuery {
        &self.memo
    }
}

impl Default for FeaturedView {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Full catalog screen
// =============================================================================

/// Full catalog screen: every match, sorted.
#[derive(Debug)]
pub struct CatalogView {
    state: BrowseState,
    memo: MemoizedQuery,
}

impl CatalogView {
    pub fn new() -> Self {
        Self {
            state: BrowseState::new(),
            memo: MemoizedQuery::new(Stage::FilterAndSort),
        }
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut BrowseState {
        &mut self.state
    }

    /// Pass the same catalog on every call.
    pub fn render<'a>(&mut self, catalog: &'a Catalog) -> Vec<&'a MovieRecord> {
        self.memo.run(catalog, self.state.params())
    }

    /// Line shown above the results
    pub fn summary(&self, count: usize) -> String {
        let mut line = if self.state.has_active_filters() {
            format!("Found {} movie{}", count, plural(count))
        } else {
            format!("Showing all {count} movies")
        };
        if let Some(genre) = self.state.genre().label() {
            line.push_str(&format!(" in {genre}"));
        }
        if !self.state.search_text().is_empty() {
            line.push_str(&format!(" matching \"{}\"", self.state.search_text()));
        }
        line
    }

    pub fn empty_message(&self) -> &'static str {
        if self.state.has_active_filters() {
            NO_MATCHES_FOR_FILTERS
        } else {
            EMPTY_CATALOG
        }
    }

    /// Arrow shown next to the active sort button
    pub fn sort_indicator(&self, key: SortKey) -> Option<char> {
        if self.state.sort_key() != key {
            return None;
        }
        match self.state.sort_direction() {
            SortDirection::Ascending => Some('↑'),
            SortDirection::Descending => Some('↓'),
        }
    }

    pub fn memo(&self) -> &MemoizedQuery {
        &self.memo
    }
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use query::GenreFilter;

    #[test]
    fn test_featured_default_page() {
        let catalog = catalog::builtin().unwrap();
        let mut view = FeaturedView::new();

        let page = view.render(&catalog);
        assert_eq!(page.movies.len(), FEATURED_LIMIT);
        assert!(page.has_more);
        assert_eq!(page.movies[0].id, catalog.records()[0].id);
        assert_eq!(view.summary(&page, catalog.len()), "Featured Movies (6 of 12)");
    }

    #[test]
    fn test_featured_summary_with_filters() {
        let catalog = catalog::builtin().unwrap();
        let mut view = FeaturedView::new();
        view.state_mut().set_search("nolan");
        view.state_mut().set_genre(GenreFilter::Only("Sci-Fi".to_string()));

        let page = view.render(&catalog);
        assert_eq!(page.total_matches, 2);
        assert!(!page.has_more);
        assert_eq!(
            view.summary(&page, catalog.len()),
            "Found 2 movies matching \"nolan\" in Sci-Fi"
        );
    }

    #[test]
    fn test_featured_singular_summary() {
        let catalog = catalog::builtin().unwrap();
        let mut view = FeaturedView::new();
        view.state_mut().set_search("wormhole");

        let page = view.render(&catalog);
        assert_eq!(view.summary(&page, catalog.len()), "Found 1 movie matching \"wormhole\"");
    }

    #[test]
    fn test_featured_empty_message() {
        let catalog = catalog::builtin().unwrap();
        let mut view = FeaturedView::new();
        assert_eq!(view.empty_message(), EMPTY_CATALOG);

        view.state_mut().set_search("zzz-no-match");
        assert!(view.render(&catalog).movies.is_empty());
        assert_eq!(view.empty_message(), NO_MATCHES);
    }

    #[test]
    fn test_featured_rerender_hits_memo() {
        let catalog = catalog::builtin().unwrap();
        let mut view = FeaturedView::with_limit(3);

        assert_eq!(view.render(&catalog).movies.len(), 3);
        assert_eq!(view.render(&catalog).movies.len(), 3);
        assert_eq!(view.memo().misses(), 1);
        assert_eq!(view.memo().hits(), 1);
    }

    #[test]
    fn test_catalog_view_sorted() {
        let catalog = catalog::builtin().unwrap();
        let mut view = CatalogView::new();
        view.state_mut().toggle_sort(SortKey::Year);

        let movies = view.render(&catalog);
        assert_eq!(movies.len(), catalog.len());
        assert_eq!(movies[0].title, "The Godfather");
        assert_eq!(view.summary(movies.len()), "Showing all 12 movies");
    }

    #[test]
    fn test_catalog_view_summary_order() {
        let mut view = CatalogView::new();
        view.state_mut().set_search("night");
        view.state_mut().set_genre(GenreFilter::Only("Action".to_string()));

        assert_eq!(view.summary(1), "Found 1 movie in Action matching \"night\"");
        assert_eq!(view.empty_message(), NO_MATCHES_FOR_FILTERS);
    }

    #[test]
    fn test_sort_indicator() {
        let mut view = CatalogView::new();
        assert_eq!(view.sort_indicator(SortKey::Title), Some('↑'));
        assert_eq!(view.sort_indicator(SortKey::Year), None);

        view.state_mut().toggle_sort(SortKey::Title);
        assert_eq!(view.sort_indicator(SortKey::Title), Some('↓'));
    }
}
