//! Error types for the catalog crate.
//!
//! Every failure here happens while the static record source is being read
//! or checked. Once a `Catalog` exists, nothing in it can fail.

use crate::types::MovieId;
use thiserror::Error;

/// Errors that can occur while loading and validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File or directory could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a source
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A source couldn't be parsed as a list of movie records
    #[error("Parse error in {source_name}: {reason}")]
    ParseError { source_name: String, reason: String },

    /// Two records share the same id
    #[error("Duplicate movie id {id}")]
    DuplicateId { id: MovieId },

    /// A record field had an invalid value
    #[error("Invalid value for {field} on movie {id}: {value}")]
    InvalidValue {
        id: MovieId,
        field: String,
        value: String,
    },

    /// Catalog-level validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
