//! The FilterPipeline chains filters together.
//!
//! Filters are applied in insertion order; a record survives only if every
//! filter keeps it.

use crate::filters::{ExactGenreFilter, SearchTextFilter};
use crate::params::QueryParameters;
use crate::traits::Filter;
use catalog::MovieRecord;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SearchTextFilter::new("nolan"))
///     .add_filter(ExactGenreFilter::new(GenreFilter::Only("Sci-Fi".into())));
///
/// let filtered = pipeline.apply(catalog.records().iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline a set of query parameters calls for.
    ///
    /// Filters that would keep everything (empty search, all genres) are
    /// left out.
    pub fn for_params(params: &QueryParameters) -> Self {
        let mut pipeline = Self::new();
        if !params.search_text.is_empty() {
            pipeline = pipeline.add_filter(SearchTextFilter::new(&params.search_text));
        }
        if !params.genre.is_all() {
            pipeline = pipeline.add_filter(ExactGenreFilter::new(params.genre.clone()));
        }
        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the records.
    pub fn apply<'a>(&self, movies: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
