//! Core domain types for the movie catalog.
//!
//! - `MovieRecord` is one entry of the static record source
//! - `Catalog` is the immutable collection every query runs against

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie, stable for the life of the process
pub type MovieId = u32;

/// Identity of one built catalog, unique within the process
pub type CatalogId = u64;

static NEXT_CATALOG_ID: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_catalog_id() -> CatalogId {
    NEXT_CATALOG_ID.fetch_add(1, Ordering::Relaxed)
}

// =============================================================================
// Movie Record
// =============================================================================

/// A single movie in the catalog.
///
/// Records are read once from the static source and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    pub director: String,
    /// Free text, searched alongside title and director
    pub description: String,
    /// Category label from an open set (e.g. "Drama", "Sci-Fi")
    pub genre: String,
    pub year: i32,
    /// Score on a 0-10 scale
    pub rating: f32,
    /// Artwork URI, passed through untouched
    pub poster: String,

    // Display-only fields for the detail screen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cast: Vec<String>,
}

// =============================================================================
// Catalog
// =============================================================================

/// The full, read-only set of movies available to the application.
///
/// A `Catalog` can only be built through the loader functions, which validate
/// the records first. There are no mutators: share it behind an `Arc` and
/// hand out `&[MovieRecord]` slices.
///
/// Every build gets a fresh `id()`. Clones keep it, since their records are
/// identical.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) id: CatalogId,
    pub(crate) records: Vec<MovieRecord>,
    /// Position of each id in `records`
    pub(crate) positions: HashMap<MovieId, usize>,
}

impl Catalog {
    /// Identity of this catalog, for caches keyed on it
    pub fn id(&self) -> CatalogId {
        self.id
    }

    /// All records in source order
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// O(1) lookup by id
    pub fn get(&self, id: MovieId) -> Option<&MovieRecord> {
        self.positions.get(&id).map(|&pos| &self.records[pos])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl AsRef<[MovieRecord]> for Catalog {
    fn as_ref(&self) -> &[MovieRecord] {
        &self.records
    }
}
