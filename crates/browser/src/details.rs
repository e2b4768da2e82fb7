//! Detail screen: one movie, addressed by the id in its route.

use catalog::{Catalog, MovieId, MovieRecord};

/// Route of the home screen, offered as the way out of a not-found page
pub const HOME_ROUTE: &str = "/";

const NOT_FOUND_MESSAGE: &str = "Sorry, we couldn't find the movie you're looking for.";

/// Detail routes are this prefix followed by the movie id
pub const MOVIE_ROUTE_PREFIX: &str = "/movie/";

/// Route of a movie's detail screen
pub fn movie_route(id: MovieId) -> String {
    format!("{MOVIE_ROUTE_PREFIX}{id}")
}

/// Parse the id segment of a detail route.
///
/// Leading whitespace and a `+` sign are skipped, then the leading run of
/// digits is the id, so `"12abc"` resolves to 12. No digits, a negative
/// sign, zero, or overflow yield `None`.
pub fn parse_movie_id(raw: &str) -> Option<MovieId> {
    let rest = raw.trim_start();
    let rest = rest.strip_prefix('+').unwrap_or(rest);
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);

    digits.parse::<MovieId>().ok().filter(|&id| id > 0)
}

/// What the detail screen shows when the id doesn't resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    /// The raw id segment that was requested
    pub requested: String,
    pub message: &'static str,
    pub back_route: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome<'a> {
    Found(&'a MovieRecord),
    NotFound(NotFound),
}

impl<'a> DetailOutcome<'a> {
    pub fn movie(&self) -> Option<&'a MovieRecord> {
        match self {
            DetailOutcome::Found(movie) => Some(*movie),
            DetailOutcome::NotFound(_) => None,
        }
    }
}

/// Resolve a raw route segment to a movie.
///
/// Unparseable ids and ids missing from the catalog both end up as
/// `NotFound`; neither is an error.
pub fn lookup<'a>(catalog: &'a Catalog, raw_id: &str) -> DetailOutcome<'a> {
    match parse_movie_id(raw_id).and_then(|id| query::by_id(catalog.records(), id)) {
        Some(movie) => DetailOutcome::Found(movie),
        None => DetailOutcome::NotFound(NotFound {
            requested: raw_id.to_string(),
            message: NOT_FOUND_MESSAGE,
            back_route: HOME_ROUTE,
        }),
    }
}
