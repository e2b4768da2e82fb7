//! Search, filter and sort over the movie catalog.
//!
//! This crate provides:
//! - The catalog query engine (`list_genres`, `query`, `featured`, `by_id`)
//! - Filter trait and implementations for record filtering
//! - FilterPipeline for composing filters
//! - Typed query parameters with parsing for user input
//!
//! ## Architecture
//! A query runs in two stages:
//! 1. Filters drop records that fail the search or genre condition
//! 2. The survivors are sorted by the requested key and direction
//!
//! Every function takes the records explicitly and keeps no state.
//!
//! ## Example Usage
//! ```ignore
//! use query::{query, list_genres, GenreFilter, QueryParameters, SortDirection, SortKey};
//!
//! let catalog = catalog::builtin()?;
//! let genres = list_genres(catalog.records());
//!
//! let params = QueryParameters::new()
//!     .with_search("nolan")
//!     .with_genre(GenreFilter::parse("Sci-Fi", &genres)?)
//!     .sorted_by(SortKey::Rating, SortDirection::Descending);
//!
//! for movie in query(catalog.records(), &params) {
//!     println!("{} ({})", movie.title, movie.rating);
//! }
//! ```

pub mod engine;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod params;
pub mod sort;
pub mod traits;

// Re-export main types
pub use engine::{by_id, featured, filter, list_genres, query, FeaturedPage};
pub use error::{QueryError, Result};
pub use filter_pipeline::FilterPipeline;
pub use params::{GenreFilter, QueryParameters, SortDirection, SortKey};
pub use traits::Filter;
