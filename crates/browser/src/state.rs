//! User input state for a list screen.

use query::{GenreFilter, QueryParameters, SortDirection, SortKey};

/// What the user has typed and picked on a list screen.
///
/// Each screen owns one of these; nothing is shared between screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseState {
    params: QueryParameters,
}

impl BrowseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.params.search_text
    }

    pub fn genre(&self) -> &GenreFilter {
        &self.params.genre
    }

    pub fn sort_key(&self) -> SortKey {
        self.params.sort_key
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.params.sort_direction
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.params.search_text = text.into();
    }

    pub fn set_genre(&mut self, genre: GenreFilter) {
        self.params.genre = genre;
    }

    /// Click on a sort button.
    ///
    /// Clicking the active key flips the direction; clicking another key
    /// switches to it in ascending order.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.params.sort_key == key {
            self.params.sort_direction = self.params.sort_direction.flipped();
        } else {
            self.params.sort_key = key;
            self.params.sort_direction = SortDirection::Ascending;
        }
    }

    /// Drop search text and genre, keep the sort
    pub fn clear_filters(&mut self) {
        self.params.search_text.clear();
        self.params.genre = GenreFilter::All;
    }

    /// Back to the initial state, sort included
    pub fn reset_all(&mut self) {
        self.params = QueryParameters::default();
    }

    pub fn has_active_filters(&self) -> bool {
        !self.params.search_text.is_empty() || !self.params.genre.is_all()
    }

    /// Anything differs from the initial state
    pub fn is_customized(&self) -> bool {
        self.has_active_filters()
            || self.params.sort_key != SortKey::Title
            || self.params.sort_direction != SortDirection::Ascending
    }

    pub fn params(&self) -> &QueryParameters {
        &self.params
    }
}
