//! Browser crate for the MovieScope catalog.
//!
//! This crate holds the presentation state of the three screens (home,
//! all movies, movie details) and renders them through the query engine.

pub mod browser;
pub mod details;
pub mod memo;
pub mod state;
pub mod views;

pub use browser::{CatalogBrowser, CatalogScreen, HomeScreen};
pub use details::{
    lookup, movie_route, parse_movie_id, DetailOutcome, NotFound, HOME_ROUTE, MOVIE_ROUTE_PREFIX,
};
pub use memo::{MemoizedQuery, Stage};
pub use state::BrowseState;
pub use views::{CatalogView, FeaturedView, FEATURED_LIMIT};
