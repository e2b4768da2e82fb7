//! Integration tests for the query engine.
//!
//! These run the engine against both a tiny hand-built catalog and the
//! embedded dataset, checking the engine's contract end to end.

use catalog::{Catalog, MovieRecord};
use query::sort::compare;
use query::*;
use std::cmp::Ordering;

fn record(id: u32, title: &str, genre: &str, year: i32, rating: f32) -> MovieRecord {
    MovieRecord {
        id,
        title: title.to_string(),
        director: "Unknown".to_string(),
        description: String::new(),
        genre: genre.to_string(),
        year,
        rating,
        poster: format!("https://example.com/{id}.jpg"),
        duration: None,
        cast: vec![],
    }
}

fn two_movie_catalog() -> Catalog {
    Catalog::from_records(vec![
        record(1, "Zeta", "Drama", 2001, 7.2),
        record(2, "Alpha", "Comedy", 1999, 8.1),
    ])
    .unwrap()
}

fn titles(movies: &[&MovieRecord]) -> Vec<String> {
    movies.iter().map(|m| m.title.clone()).collect()
}

/// Parameter combinations exercised by the property tests
fn parameter_space(catalog: &Catalog) -> Vec<QueryParameters> {
    let searches = ["", "the", "NOLAN", "dream", "zzz-no-match"];
    let mut genres = vec![GenreFilter::All];
    genres.extend(
        list_genres(catalog.records())
            .into_iter()
            .map(|g| GenreFilter::Only(g.to_string())),
    );

    let mut space = Vec::new();
    for search in searches {
        for genre in &genres {
            for key in SortKey::ALL {
                for direction in [SortDirection::Ascending, SortDirection::Descending] {
                    space.push(
                        QueryParameters::new()
                            .with_search(search)
                            .with_genre(genre.clone())
                            .sorted_by(key, direction),
                    );
                }
            }
        }
    }
    space
}

fn matches_search(movie: &MovieRecord, text: &str) -> bool {
    let needle = text.to_lowercase();
    movie.title.to_lowercase().contains(&needle)
        || movie.director.to_lowercase().contains(&needle)
        || movie.description.to_lowercase().contains(&needle)
}

// ============================================================================
// Example scenarios
// ============================================================================

#[test]
fn test_sort_by_title_ascending() {
    let catalog = two_movie_catalog();
    let params = QueryParameters::new().sorted_by(SortKey::Title, SortDirection::Ascending);
    assert_eq!(titles(&query(catalog.records(), &params)), vec!["Alpha", "Zeta"]);
}

#[test]
fn test_genre_filter_comedy() {
    let catalog = two_movie_catalog();
    let params = QueryParameters::new().with_genre(GenreFilter::Only("Comedy".to_string()));
    assert_eq!(titles(&query(catalog.records(), &params)), vec!["Alpha"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let catalog = two_movie_catalog();
    let params = QueryParameters::new().with_search("ZET");
    assert_eq!(titles(&query(catalog.records(), &params)), vec!["Zeta"]);
}

#[test]
fn test_sort_by_rating_descending() {
    let catalog = two_movie_catalog();
    let params = QueryParameters::new().sorted_by(SortKey::Rating, SortDirection::Descending);
    assert_eq!(titles(&query(catalog.records(), &params)), vec!["Alpha", "Zeta"]);
}

#[test]
fn test_by_id_not_found() {
    let catalog = two_movie_catalog();
    assert!(by_id(catalog.records(), 9999).is_none());
}

#[test]
fn test_list_genres_example() {
    let catalog = two_movie_catalog();
    assert_eq!(list_genres(catalog.records()), vec!["Comedy", "Drama"]);
}

// ============================================================================
// Properties over the embedded dataset
// ============================================================================

#[test]
fn test_query_is_idempotent() {
    let catalog = catalog::builtin().unwrap();
    for params in parameter_space(&catalog) {
        let first = query(catalog.records(), &params);
        let second = query(catalog.records(), &params);
        assert_eq!(first, second, "query not repeatable for {params:?}");
    }
}

#[test]
fn test_results_satisfy_both_conditions() {
    let catalog = catalog::builtin().unwrap();
    for params in parameter_space(&catalog) {
        for movie in query(catalog.records(), &params) {
            assert!(matches_search(movie, &params.search_text));
            assert!(params.genre.matches(&movie.genre));
            assert!(
                catalog.records().iter().any(|m| std::ptr::eq(m, movie)),
                "result must borrow from the catalog"
            );
        }
    }
}

#[test]
fn test_no_matching_record_is_dropped() {
    let catalog = catalog::builtin().unwrap();
    for params in parameter_space(&catalog) {
        let expected = catalog
            .records()
            .iter()
            .filter(|m| matches_search(m, &params.search_text) && params.genre.matches(&m.genre))
            .count();
        assert_eq!(query(catalog.records(), &params).len(), expected);
    }
}

#[test]
fn test_no_op_filters_return_whole_catalog() {
    let catalog = catalog::builtin().unwrap();
    for key in SortKey::ALL {
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let params = QueryParameters::new().sorted_by(key, direction);
            let mut ids: Vec<_> = query(catalog.records(), &params).iter().map(|m| m.id).collect();
            let mut all: Vec<_> = catalog.records().iter().map(|m| m.id).collect();
            ids.sort_unstable();
            all.sort_unstable();
            assert_eq!(ids, all);
        }
    }
}

#[test]
fn test_adjacent_pairs_respect_direction() {
    let catalog = catalog::builtin().unwrap();
    for params in parameter_space(&catalog) {
        let result = query(catalog.records(), &params);
        for pair in result.windows(2) {
            let ordering = compare(pair[0], pair[1], params.sort_key);
            match params.sort_direction {
                SortDirection::Ascending => assert_ne!(ordering, Ordering::Greater),
                SortDirection::Descending => assert_ne!(ordering, Ordering::Less),
            }
        }
    }
}

#[test]
fn test_genre_set_property() {
    let catalog = catalog::builtin().unwrap();
    let genres = list_genres(catalog.records());

    for pair in genres.windows(2) {
        assert!(pair[0] < pair[1], "genres must be strictly ascending");
    }
    for genre in &genres {
        assert!(catalog.records().iter().any(|m| m.genre == *genre));
    }
    for movie in catalog.records() {
        assert!(genres.contains(&movie.genre.as_str()));
    }
}

#[test]
fn test_by_id_finds_every_record() {
    let catalog = catalog::builtin().unwrap();
    for movie in catalog.records() {
        assert_eq!(by_id(catalog.records(), movie.id), Some(movie));
    }
    assert!(by_id(catalog.records(), 0).is_none());
}

#[test]
fn test_search_spans_director_and_description() {
    let catalog = catalog::builtin().unwrap();

    let by_director = query(catalog.records(), &QueryParameters::new().with_search("nolan"));
    assert_eq!(
        titles(&by_director),
        vec!["Inception", "Interstellar", "The Dark Knight"]
    );

    let by_description = query(catalog.records(), &QueryParameters::new().with_search("WORMHOLE"));
    assert_eq!(titles(&by_description), vec!["Interstellar"]);
}

#[test]
fn test_parsed_input_drives_query() {
    let catalog = catalog::builtin().unwrap();
    let genres = list_genres(catalog.records());

    let params = QueryParameters::new()
        .with_genre(GenreFilter::parse("Sci-Fi", &genres).unwrap())
        .sorted_by("year".parse().unwrap(), "desc".parse().unwrap());

    let result = query(catalog.records(), &params);
    assert_eq!(titles(&result), vec!["Interstellar", "Inception", "The Matrix"]);

    assert!(GenreFilter::parse("Musical", &genres).is_err());
}

#[test]
fn test_catalog_is_untouched_by_queries() {
    let catalog = catalog::builtin().unwrap();
    let before: Vec<MovieRecord> = catalog.records().to_vec();

    for params in parameter_space(&catalog) {
        let _ = query(catalog.records(), &params);
    }

    assert_eq!(catalog.records(), before.as_slice());
}
