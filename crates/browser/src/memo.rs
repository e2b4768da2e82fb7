//! Recompute-on-change cache for a screen's query.
//!
//! A screen re-renders on every keystroke, but the result only changes when
//! the parameters do. The memo keeps the ids of the last result and resolves
//! them through the catalog's id index on a hit. Results are keyed on the
//! catalog as well as the parameters, so switching catalogs recomputes.

use catalog::{Catalog, CatalogId, MovieId, MovieRecord};
use query::QueryParameters;
use tracing::trace;

/// Which engine stage a memo runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// `query::filter`: catalog order
    Filter,
    /// `query::query`: filtered and sorted
    FilterAndSort,
}

#[derive(Debug)]
struct CachedResult {
    catalog: CatalogId,
    params: QueryParameters,
    ids: Vec<MovieId>,
}

#[derive(Debug)]
pub struct MemoizedQuery {
    stage: Stage,
    last: Option<CachedResult>,
    hits: u64,
    misses: u64,
}

impl MemoizedQuery {
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            last: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Result for `params` over `catalog`, computed only if either changed
    /// since the last call.
    pub fn run<'a>(
        &mut self,
        catalog: &'a Catalog,
        params: &QueryParameters,
    ) -> Vec<&'a MovieRecord> {
        if let Some(cached) = &self.last {
            if cached.catalog == catalog.id() && cached.params == *params {
                self.hits += 1;
                trace!("Memo hit ({} movies)", cached.ids.len());
                return cached.ids.iter().filter_map(|&id| catalog.get(id)).collect();
            }
        }

        self.misses += 1;
        let movies = match self.stage {
            Stage::Filter => query::filter(catalog.records(), params),
            Stage::FilterAndSort => query::query(catalog.records(), params),
        };
        trace!("Memo miss, recomputed {} movies", movies.len());

        self.last = Some(CachedResult {
            catalog: catalog.id(),
            params: params.clone(),
            ids: movies.iter().map(|m| m.id).collect(),
        });
        movies
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
