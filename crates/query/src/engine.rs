//! # Catalog Query Engine
//!
//! Pure functions over an immutable record slice:
//! - `list_genres`: distinct genres for a genre picker
//! - `filter`: search + genre conditions, catalog order
//! - `query`: `filter` followed by the requested sort
//! - `featured`: the first few filtered records for the home screen
//! - `by_id`: single record lookup for the detail screen
//!
//! Nothing here holds state between calls, so any number of callers can
//! share one catalog without coordination.

use crate::filter_pipeline::FilterPipeline;
use crate::params::QueryParameters;
use crate::sort;
use catalog::{MovieId, MovieRecord};
use std::collections::BTreeSet;

/// Distinct genre labels, sorted ascending
pub fn list_genres(records: &[MovieRecord]) -> Vec<&str> {
    records
        .iter()
        .map(|movie| movie.genre.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Records matching both the search text and the genre filter, in catalog
/// order. Sort parameters are ignored.
pub fn filter<'a>(records: &'a [MovieRecord], params: &QueryParameters) -> Vec<&'a MovieRecord> {
    FilterPipeline::for_params(params).apply(records.iter().collect())
}

/// Filter, then sort by `params.sort_key` / `params.sort_direction`.
pub fn query<'a>(records: &'a [MovieRecord], params: &QueryParameters) -> Vec<&'a MovieRecord> {
    let mut movies = filter(records, params);
    sort::sort_records(&mut movies, params.sort_key, params.sort_direction);
    tracing::debug!(
        "Query matched {} of {} movies (sort: {} {})",
        movies.len(),
        records.len(),
        params.sort_key,
        params.sort_direction
    );
    movies
}

/// A truncated result set for the home screen
#[derive(Debug, Clone)]
pub struct FeaturedPage<'a> {
    /// At most `limit` records, catalog order
    pub movies: Vec<&'a MovieRecord>,
    /// Number of records that matched before truncation
    pub total_matches: usize,
    /// Whether matches were cut off
    pub has_more: bool,
}

impl<'a> FeaturedPage<'a> {
    /// Cut an already-filtered result down to `limit` records
    pub fn from_matches(mut movies: Vec<&'a MovieRecord>, limit: usize) -> Self {
        let total_matches = movies.len();
        movies.truncate(limit);

        Self {
            movies,
            total_matches,
            has_more: total_matches > limit,
        }
    }
}

/// The first `limit` records passing the filters.
pub fn featured<'a>(
    records: &'a [MovieRecord],
    params: &QueryParameters,
    limit: usize,
) -> FeaturedPage<'a> {
    FeaturedPage::from_matches(filter(records, params), limit)
}

/// Look up one record; `None` means the id isn't in the catalog.
pub fn by_id(records: &[MovieRecord], id: MovieId) -> Option<&MovieRecord> {
    records.iter().find(|movie| movie.id == id)
}
