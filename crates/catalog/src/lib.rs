//! # Catalog Crate
//!
//! This crate owns the movie records and loads them from the static source.
//!
//! ## Main Components
//!
//! - **types**: `MovieRecord`, `MovieId` and the immutable `Catalog`
//! - **parser**: JSON source files into `MovieRecord`s
//! - **loader**: builtin dataset, shard directories, validation
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! // Embedded dataset
//! let catalog = Arc::new(catalog::builtin()?);
//!
//! // Or a directory of *.json shards
//! let catalog = Arc::new(Catalog::load_from_dir(Path::new("data"))?);
//!
//! println!("{} movies", catalog.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use loader::builtin;
pub use types::{Catalog, CatalogId, MovieId, MovieRecord};
