//! Filter to keep only one genre.

use crate::params::GenreFilter;
use crate::traits::Filter;
use catalog::MovieRecord;

/// Keeps records whose genre equals the selected label exactly.
///
/// `GenreFilter::All` lets every record through.
pub struct ExactGenreFilter {
    genre: GenreFilter,
}

impl ExactGenreFilter {
    pub fn new(genre: GenreFilter) -> Self {
        Self { genre }
    }
}

impl Filter for ExactGenreFilter {
    fn name(&self) -> &str {
        "ExactGenreFilter"
    }

    fn matches(&self, movie: &MovieRecord) -> bool {
        self.genre.matches(&movie.genre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::movie;

    #[test]
    fn test_exact_genre_filter() {
        let movies = vec![
            movie(1, "Zeta", "Ann", "", "Drama"),
            movie(2, "Alpha", "Bo", "", "Comedy"),
            movie(3, "Beta", "Cy", "", "comedy"),
        ];

        let filter = ExactGenreFilter::new(GenreFilter::Only("Comedy".to_string()));
        let filtered = filter.apply(movies.iter().collect());

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn test_all_genres() {
        let movies = vec![
            movie(1, "Zeta", "Ann", "", "Drama"),
            movie(2, "Alpha", "Bo", "", "Comedy"),
        ];

        let filter = ExactGenreFilter::new(GenreFilter::All);
        assert_eq!(filter.apply(movies.iter().collect()).len(), 2);
    }
}
