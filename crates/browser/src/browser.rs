//! # Catalog Browser
//!
//! Ties the screens together over one shared catalog:
//! 1. Home: featured movies, search + genre
//! 2. All movies: search + genre + sort
//! 3. Movie details, by route id
//!
//! Each screen keeps its own input state. The catalog is shared read-only,
//! so several browsers can run over the same `Arc<Catalog>` at once.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use catalog::{Catalog, MovieRecord};
use query::{FeaturedPage, GenreFilter, SortKey};

use crate::details::{self, DetailOutcome};
use crate::state::BrowseState;
use crate::views::{CatalogView, FeaturedView};

/// Rendered home screen
#[derive(Debug, Clone)]
pub struct HomeScreen<'a> {
    pub page: FeaturedPage<'a>,
    pub summary: String,
    /// Set when there is nothing to show
    pub empty_message: Option<&'static str>,
}

/// Rendered full catalog screen
#[derive(Debug, Clone)]
pub struct CatalogScreen<'a> {
    pub movies: Vec<&'a MovieRecord>,
    pub summary: String,
    pub empty_message: Option<&'static str>,
    /// Sort buttons in display order, with the arrow on the active one
    pub sort_buttons: Vec<(SortKey, Option<char>)>,
    /// Whether "Reset All" is offered
    pub can_reset: bool,
}

pub struct CatalogBrowser {
    catalog: Arc<Catalog>,
    home: FeaturedView,
    all_movies: CatalogView,
}

impl CatalogBrowser {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_featured_limit(catalog, crate::views::FEATURED_LIMIT)
    }

    pub fn with_featured_limit(catalog: Arc<Catalog>, limit: usize) -> Self {
        Self {
            catalog,
            home: FeaturedView::with_limit(limit),
            all_movies: CatalogView::new(),
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Genre picker options
    pub fn genres(&self) -> Vec<&str> {
        query::list_genres(self.catalog.records())
    }

    /// Turn a picked genre label into a filter; empty means all genres.
    pub fn parse_genre(&self, label: &str) -> query::Result<GenreFilter> {
        GenreFilter::parse(label, &self.genres())
    }

    pub fn home_state(&mut self) -> &mut BrowseState {
        self.home.state_mut()
    }

    pub fn catalog_state(&mut self) -> &mut BrowseState {
        self.all_movies.state_mut()
    }

    pub fn home(&mut self) -> HomeScreen<'_> {
        let start = Instant::now();

        let page = self.home.render(&self.catalog);
        let summary = self.home.summary(&page, self.catalog.len());
        let empty_message = page.movies.is_empty().then(|| self.home.empty_message());

        info!(
            "Rendered home screen: {} of {} matches in {:?}",
            page.movies.len(),
            page.total_matches,
            start.elapsed()
        );
        HomeScreen {
            page,
            summary,
            empty_message,
        }
    }

    pub fn all_movies(&mut self) -> CatalogScreen<'_> {
        let start = Instant::now();

        let movies = self.all_movies.render(&self.catalog);
        let summary = self.all_movies.summary(movies.len());
        let empty_message = movies.is_empty().then(|| self.all_movies.empty_message());
        let sort_buttons = SortKey::ALL
            .iter()
            .map(|&key| (key, self.all_movies.sort_indicator(key)))
            .collect();
        let can_reset = self.all_movies.state().is_customized();

        info!(
            "Rendered catalog screen: {} movies in {:?}",
            movies.len(),
            start.elapsed()
        );
        CatalogScreen {
            movies,
            summary,
            empty_message,
            sort_buttons,
            can_reset,
        }
    }

    pub fn movie_details(&self, raw_id: &str) -> DetailOutcome<'_> {
        let outcome = details::lookup(&self.catalog, raw_id);
        match &outcome {
            DetailOutcome::Found(movie) => info!("Showing details for movie {}", movie.id),
            DetailOutcome::NotFound(_) => info!("Movie {:?} not found", raw_id),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_browser() -> CatalogBrowser {
        CatalogBrowser::new(Arc::new(catalog::builtin().unwrap()))
    }

    #[test]
    fn test_home_screen_defaults() {
        let mut browser = build_browser();
        let screen = browser.home();

        assert_eq!(screen.page.movies.len(), 6);
        assert!(screen.page.has_more);
        assert_eq!(screen.summary, "Featured Movies (6 of 12)");
        assert!(screen.empty_message.is_none());
    }

    #[test]
    fn test_home_screen_no_matches() {
        let mut browser = build_browser();
        browser.home_state().set_search("zzz-no-match");
        let screen = browser.home();

        assert!(screen.page.movies.is_empty());
        assert_eq!(screen.summary, "Found 0 movies matching \"zzz-no-match\"");
        assert_eq!(
            screen.empty_message,
            Some("No movies match your search criteria.")
        );
    }

    #[test]
    fn test_screens_keep_separate_state() {
        let mut browser = build_browser();
        browser.home_state().set_search("nolan");

        assert_eq!(browser.all_movies().movies.len(), 12);
        assert_eq!(browser.home().page.total_matches, 3);
    }

    #[test]
    fn test_catalog_screen_sort_buttons() {
        let mut browser = build_browser();
        browser.catalog_state().toggle_sort(SortKey::Rating);
        browser.catalog_state().toggle_sort(SortKey::Rating);
        let screen = browser.all_movies();

        assert_eq!(screen.movies[0].title, "The Shawshank Redemption");
        assert_eq!(
            screen.sort_buttons,
            vec![
                (SortKey::Title, None),
                (SortKey::Year, None),
                (SortKey::Rating, Some('↓')),
            ]
        );
        assert!(screen.can_reset);
    }

    #[test]
    fn test_parse_genre() {
        let browser = build_browser();
        assert_eq!(browser.parse_genre("").unwrap(), GenreFilter::All);
        assert_eq!(
            browser.parse_genre("Horror").unwrap(),
            GenreFilter::Only("Horror".to_string())
        );
        assert!(browser.parse_genre("Musical").is_err());
    }

    #[test]
    fn test_movie_details() {
        let browser = build_browser();
        assert!(browser.movie_details("3").movie().is_some());
        assert!(browser.movie_details("404").movie().is_none());
    }
}
