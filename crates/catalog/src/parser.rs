//! Parser for catalog source files.
//!
//! A source is a JSON array of movie records:
//!
//! ```json
//! [
//!   { "id": 1, "title": "...", "director": "...", "description": "...",
//!     "genre": "Drama", "year": 1994, "rating": 9.3, "poster": "https://...",
//!     "duration": "2h 22m", "cast": ["..."] }
//! ]
//! ```
//!
//! `duration` and `cast` may be omitted. Parsing does not validate values;
//! that happens once the records are assembled into a `Catalog`.

use crate::error::{CatalogError, Result};
use crate::types::MovieRecord;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parse movie records from JSON text.
///
/// `source_name` only shows up in error messages.
pub fn parse_movies_str(json: &str, source_name: &str) -> Result<Vec<MovieRecord>> {
    serde_json::from_str(json).map_err(|e| CatalogError::ParseError {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}

/// Parse movie records from a JSON file
pub fn parse_movies_file(path: &Path) -> Result<Vec<MovieRecord>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;

    parse_movies_str(&content, &path.display().to_string())
}
