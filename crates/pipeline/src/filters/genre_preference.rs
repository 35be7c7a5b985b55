//! Filter to keep only movies matching the requested genres.

use crate::traits::Filter;
use data_loader::CatalogItem;

/// Keeps candidates with at least one requested genre.
///
/// ## Algorithm
/// A requested genre matches when it is a substring of one of the item's
/// genres, so "Fiction" also keeps "Science Fiction" titles.
pub struct GenrePreferenceFilter {
    genres: Vec<String>,
}

impl GenrePreferenceFilter {
    /// Create a new GenrePreferenceFilter.
    ///
    /// # Arguments
    /// * `genres` - Requested genres; an item needs to match only one
    pub fn new(genres: Vec<String>) -> Self {
        Self { genres }
    }
}

impl Filter for GenrePreferenceFilter {
    fn name(&self) -> &str {
        "GenrePreferenceFilter"
    }

    fn keep(&self, item: &CatalogItem) -> bool {
        item.genre_matches_any(&self.genres)
    }
}
