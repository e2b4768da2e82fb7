//! Query parameters supplied by the presentation layer.
//!
//! The typed values here are always valid. Text coming from user input goes
//! through `FromStr` / `GenreFilter::parse`, which reject anything outside
//! the enumerated domain.

use crate::error::{QueryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field the results are ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Case-insensitive title order
    #[default]
    Title,
    Year,
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Title, SortKey::Year, SortKey::Rating];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Year => "year",
            SortKey::Rating => "rating",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(SortKey::Title),
            "year" => Ok(SortKey::Year),
            "rating" => Ok(SortKey::Rating),
            _ => Err(QueryError::invalid("sort key", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient an ascending comparison result
    pub fn orient(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(QueryError::invalid("sort direction", s)),
        }
    }
}

/// Genre restriction for a query
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GenreFilter {
    /// No restriction
    #[default]
    All,
    /// Exact, case-sensitive genre label
    Only(String),
}

impl GenreFilter {
    /// Parse a genre label chosen by the user.
    ///
    /// An empty label means "all genres". Any other label must be one of
    /// `known_genres` (usually the output of `list_genres`).
    pub fn parse(label: &str, known_genres: &[&str]) -> Result<Self> {
        if label.is_empty() {
            return Ok(GenreFilter::All);
        }
        if known_genres.contains(&label) {
            Ok(GenreFilter::Only(label.to_string()))
        } else {
            Err(QueryError::invalid("genre", label))
        }
    }

    pub fn matches(&self, genre: &str) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Only(wanted) => wanted == genre,
        }
    }

    /// The selected label, if any
    pub fn label(&self) -> Option<&str> {
        match self {
            GenreFilter::All => None,
            GenreFilter::Only(genre) => Some(genre.as_str()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, GenreFilter::All)
    }
}

/// A single filter + sort request against the catalog.
///
/// Passed by value (or reference) on every query; the engine keeps nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct QueryParameters {
    /// Case-insensitive substring of title, director or description
    pub search_text: String,
    pub genre: GenreFilter,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_genre(mut self, genre: GenreFilter) -> Self {
        self.genre = genre;
        self
    }

    pub fn sorted_by(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = key;
        self.sort_direction = direction;
        self
    }
}
