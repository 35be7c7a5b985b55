//! Core domain types for the movie catalog.
//!
//! A `CatalogItem` keeps every optional column as an `Option`. Defaults such as
//! "year 0" or "rating 0.0" belong to the response formatter, not to the
//! catalog, so predicates and sorts can tell "unknown" apart from a real zero.

use crate::region::Region;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie (the `MovieID` column)
pub type MovieId = u32;

// =============================================================================
// Catalog Item
// =============================================================================

/// One movie from the catalog file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: MovieId,
    pub title: String,
    /// Genres in file order, split from the pipe-delimited column
    pub genres: Vec<String>,
    pub year: Option<u16>,
    /// Audience rating average on a 0-10 scale
    pub rating: Option<f32>,
    /// Unbounded popularity score
    pub popularity: Option<f32>,
    pub overview: Option<String>,
    pub actors: Option<String>,
    pub directors: Option<String>,
    /// Filled in for every item by `ensure_regions` during store load
    pub region: Option<Region>,
    /// Zero-based data-record position in the catalog file.
    ///
    /// Rows of the full text matrix are addressed by this position.
    pub source_row: usize,
}

impl CatalogItem {
    /// Create an item with only the mandatory fields set
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            genres: Vec::new(),
            year: None,
            rating: None,
            popularity: None,
            overview: None,
            actors: None,
            directors: None,
            region: None,
            source_row: 0,
        }
    }

    /// Set genres from the pipe-delimited storage form ("Comedy|Family")
    pub fn with_genres(mut self, genres: &str) -> Self {
        self.genres = split_genres(genres);
        self
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_popularity(mut self, popularity: f32) -> Self {
        self.popularity = Some(popularity);
        self
    }

    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = Some(overview.into());
        self
    }

    pub fn with_actors(mut self, actors: impl Into<String>) -> Self {
        self.actors = Some(actors.into());
        self
    }

    pub fn with_directors(mut self, directors: impl Into<String>) -> Self {
        self.directors = Some(directors.into());
        self
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn with_source_row(mut self, row: usize) -> Self {
        self.source_row = row;
        self
    }

    /// True when any genre contains `needle` as a substring.
    ///
    /// Substring rather than equality: "Fiction" matches "Science Fiction",
    /// the same way the catalog's pipe-delimited column has always been searched.
    pub fn genre_contains(&self, needle: &str) -> bool {
        self.genres.iter().any(|genre| genre.contains(needle))
    }

    /// True when the item matches at least one of `needles`
    pub fn genre_matches_any<S: AsRef<str>>(&self, needles: &[S]) -> bool {
        needles.iter().any(|needle| self.genre_contains(needle.as_ref()))
    }
}

/// Split a pipe-delimited genre column, dropping empty segments
pub fn split_genres(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Catalog - The In-Memory Movie Table
// =============================================================================

/// All catalog items in file order plus an id lookup.
///
/// Item order is significant: strategies that fall back to catalog order
/// for ties rely on it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    by_id: HashMap<MovieId, usize>,
    /// Data records seen in the source file, skipped ones included
    source_rows: usize,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an in-memory catalog, keeping the first item for a repeated id.
    ///
    /// There is no source file here, so `source_row` is reassigned from the
    /// iteration order.
    pub fn from_items(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        let mut catalog = Self::new();
        for (row, item) in items.into_iter().enumerate() {
            catalog.insert(item.with_source_row(row));
        }
        catalog
    }

    /// Insert an item. Returns false (and drops the item) if the id is taken.
    pub fn insert(&mut self, item: CatalogItem) -> bool {
        self.source_rows = self.source_rows.max(item.source_row + 1);
        if self.by_id.contains_key(&item.id) {
            return false;
        }
        self.by_id.insert(item.id, self.items.len());
        self.items.push(item);
        true
    }

    pub(crate) fn set_source_rows(&mut self, rows: usize) {
        self.source_rows = self.source_rows.max(rows);
    }

    /// Get an item by id
    pub fn get(&self, id: MovieId) -> Option<&CatalogItem> {
        self.by_id.get(&id).map(|&idx| &self.items[idx])
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// All items in file order
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut [CatalogItem] {
        &mut self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of data records in the source file, including rows that were
    /// skipped because they failed to parse
    pub fn source_rows(&self) -> usize {
        self.source_rows
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
