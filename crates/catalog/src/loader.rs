//! Catalog building and validation.
//!
//! Records come from one of two places:
//! - the dataset embedded in the binary (`builtin`)
//! - a directory of JSON shards (`Catalog::load_from_dir`)
//!
//! Either way the records pass through `Catalog::from_records`, which
//! validates them before the catalog is frozen.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Dataset shipped with the crate
const BUILTIN_MOVIES: &str = include_str!("../data/movies.json");

/// Highest rating a record may carry
pub const MAX_RATING: f32 = 10.0;

/// Load the embedded catalog
pub fn builtin() -> Result<Catalog> {
    let records = parser::parse_movies_str(BUILTIN_MOVIES, "builtin movies.json")?;
    Catalog::from_records(records)
}

impl Catalog {
    /// Build a catalog from already-parsed records.
    ///
    /// Source order is preserved.
    pub fn from_records(records: Vec<MovieRecord>) -> Result<Self> {
        let mut catalog = Self {
            id: next_catalog_id(),
            records,
            positions: HashMap::new(),
        };
        catalog.validate()?;
        catalog.build_positions();
        Ok(catalog)
    }

    /// Index record positions by id. Ids are unique once validated.
    fn build_positions(&mut self) {
        self.positions = self
            .records
            .iter()
            .enumerate()
            .map(|(pos, movie)| (movie.id, pos))
            .collect();
    }

    /// Load every `*.json` shard in a directory.
    ///
    /// Shards are parsed in parallel and concatenated in file-name order, so
    /// the resulting catalog order doesn't depend on scheduling.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading movie catalog from {:?}", data_dir);

        let shards = list_shards(data_dir)?;
        if shards.is_empty() {
            return Err(CatalogError::ValidationError(format!(
                "no catalog files found in {}",
                data_dir.display()
            )));
        }

        let parsed: Vec<Vec<MovieRecord>> = shards
            .par_iter()
            .map(|path| parser::parse_movies_file(path))
            .collect::<Result<_>>()?;

        let records: Vec<MovieRecord> = parsed.into_iter().flatten().collect();
        info!("Loaded {} movies from {} files", records.len(), shards.len());

        let catalog = Self::from_records(records)?;
        info!("Catalog successfully built and validated!");
        Ok(catalog)
    }

    /// Validate catalog integrity
    ///
    /// Checks that:
    /// - ids are non-zero and unique
    /// - title and director are not blank
    /// - rating is a finite number in 0-10
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.records.len());

        for movie in &self.records {
            if movie.id == 0 {
                return Err(CatalogError::InvalidValue {
                    id: movie.id,
                    field: "id".to_string(),
                    value: "0".to_string(),
                });
            }
            if !seen.insert(movie.id) {
                return Err(CatalogError::DuplicateId { id: movie.id });
            }
            if movie.title.trim().is_empty() {
                return Err(CatalogError::InvalidValue {
                    id: movie.id,
                    field: "title".to_string(),
                    value: movie.title.clone(),
                });
            }
            if movie.director.trim().is_empty() {
                return Err(CatalogError::InvalidValue {
                    id: movie.id,
                    field: "director".to_string(),
                    value: movie.director.clone(),
                });
            }
            if !movie.rating.is_finite() || movie.rating < 0.0 || movie.rating > MAX_RATING {
                return Err(CatalogError::InvalidValue {
                    id: movie.id,
                    field: "rating".to_string(),
                    value: movie.rating.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Collect the `*.json` files of a directory, sorted by name
fn list_shards(data_dir: &Path) -> Result<Vec<PathBuf>> {
    if !data_dir.is_dir() {
        return Err(CatalogError::FileNotFound {
            path: data_dir.display().to_string(),
        });
    }

    let mut shards = Vec::new();
    for entry in fs::read_dir(data_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            shards.push(path);
        }
    }
    shards.sort();
    Ok(shards)
}
