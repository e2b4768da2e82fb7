//! Ordering of query results.

use crate::params::{SortDirection, SortKey};
use catalog::MovieRecord;
use std::cmp::Ordering;

/// Compare two records by `key` in ascending order.
///
/// Titles compare case-insensitively, year and rating numerically.
pub fn compare(a: &MovieRecord, b: &MovieRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => compare_ignore_case(&a.title, &b.title),
        SortKey::Year => a.year.cmp(&b.year),
        SortKey::Rating => a.rating.total_cmp(&b.rating),
    }
}

/// Sort records in place.
///
/// The sort is stable: records that compare equal keep their relative
/// (catalog) order in both directions.
pub fn sort_records(movies: &mut [&MovieRecord], key: SortKey, direction: SortDirection) {
    if key != SortKey::Title {
        movies.sort_by(|a, b| direction.orient(compare(a, b, key)));
        return;
    }

    // Lower-case each title once instead of on every comparison
    let mut keyed: Vec<(String, &MovieRecord)> = movies
        .iter()
        .map(|movie| (movie.title.to_lowercase(), *movie))
        .collect();
    keyed.sort_by(|a, b| direction.orient(a.0.cmp(&b.0)));
    for (slot, (_, movie)) in movies.iter_mut().zip(keyed) {
        *slot = movie;
    }
}

// Whole-string lowering, so context-sensitive mappings (final sigma) apply
fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
