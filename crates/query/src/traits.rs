//! Core traits for the filtering stage.
//!
//! This module defines the Filter trait that lets record predicates be
//! composed into a FilterPipeline.

use catalog::MovieRecord;

/// Core trait for filtering movie records.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` lets one pipeline be shared across threads
/// - Filters work on borrowed records and never touch the catalog itself
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single record passes this filter
    fn matches(&self, movie: &MovieRecord) -> bool;

    /// Apply this filter to a set of records, keeping their order.
    fn apply<'a>(&self, movies: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        movies
            .into_iter()
            .filter(|movie| self.matches(movie))
            .collect()
    }
}
