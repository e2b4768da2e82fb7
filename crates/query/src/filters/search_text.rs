//! Case-insensitive text search.
//!
//! A record matches when the search text occurs in its title, director or
//! description, ignoring case.

use crate::traits::Filter;
use catalog::MovieRecord;

/// Keeps records whose title, director or description contains the needle.
///
/// ## Algorithm
/// The needle is lower-cased once up front. Each searched field is
/// lower-cased and checked with a substring test; the first hit wins.
/// An empty needle matches every record.
pub struct SearchTextFilter {
    needle: String,
}

impl SearchTextFilter {
    pub fn new(search_text: &str) -> Self {
        Self {
            needle: search_text.to_lowercase(),
        }
    }

    fn field_matches(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.needle)
    }
}

impl Filter for SearchTextFilter {
    fn name(&self) -> &str {
        "SearchTextFilter"
    }

    fn matches(&self, movie: &MovieRecord) -> bool {
        self.needle.is_empty()
            || self.field_matches(&movie.title)
            || self.field_matches(&movie.director)
            || self.field_matches(&movie.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::movie;

    #[test]
    fn test_matches_any_searched_field() {
        let movies = vec![
            movie(1, "Zeta", "Ann Lee", "A quiet drama", "Drama"),
            movie(2, "Alpha", "Bo Zetterberg", "Slapstick", "Comedy"),
            movie(3, "Gamma", "Cy Young", "Set in Zetland", "Drama"),
            movie(4, "Delta", "Di Park", "Nothing here", "Drama"),
        ];

        let filter = SearchTextFilter::new("ZET");
        let filtered = filter.apply(movies.iter().collect());

        let ids: Vec<_> = filtered.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let movies = vec![
            movie(1, "Zeta", "Ann Lee", "", "Drama"),
            movie(2, "Alpha", "Bo", "", "Comedy"),
        ];

        let filter = SearchTextFilter::new("");
        assert_eq!(filter.apply(movies.iter().collect()).len(), 2);
    }

    #[test]
    fn test_genre_is_not_searched() {
        let record = movie(1, "Zeta", "Ann Lee", "A quiet film", "Drama");
        assert!(!SearchTextFilter::new("drama").matches(&record));
    }

    #[test]
    fn test_non_ascii_case_folding() {
        let record = movie(9, "Amélie", "Jean-Pierre Jeunet", "", "Comedy");
        assert!(SearchTextFilter::new("AMÉLIE").matches(&record));
    }
}
