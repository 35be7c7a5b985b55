//! # Data Loader Crate
//!
//! This crate loads the movie catalog and the precomputed artifacts the
//! recommendation strategies read.
//!
//! ## Main Components
//!
//! - **types**: `CatalogItem` and the `Catalog` table
//! - **parser**: Parse the catalog CSV into `CatalogItem`s
//! - **region**: Keyword-based regional cinema labels
//! - **artifacts**: Similarity matrices, text features, encoders
//! - **store**: `ArtifactStore`, loaded once and shared read-only
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{ArtifactPaths, ArtifactStore};
//! use std::path::Path;
//!
//! let paths = ArtifactPaths::new(Path::new("data"), Path::new("models"));
//! let store = ArtifactStore::load(&paths);
//!
//! match store.catalog() {
//!     Some(catalog) => println!("{} movies", catalog.len()),
//!     None => println!("catalog unavailable"),
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod region;
pub mod artifacts;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{split_genres, Catalog, CatalogItem, MovieId};
pub use region::{classify, ensure_regions, Region};
pub use artifacts::{GenreEncoder, SampleSimilarity, TextFeatureMatrix, TextVectorizer};
pub use store::{ArtifactPaths, ArtifactStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.source_rows(), 0);
    }

    #[test]
    fn test_insert_keeps_first_duplicate() {
        let mut catalog = Catalog::new();

        assert!(catalog.insert(CatalogItem::new(1, "First")));
        assert!(!catalog.insert(CatalogItem::new(1, "Second").with_source_row(1)));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(1).unwrap().title, "First");
        assert_eq!(catalog.source_rows(), 2);
    }

    #[test]
    fn test_genre_substring_matching() {
        let item = CatalogItem::new(1, "Arrival").with_genres("Drama|Science Fiction");

        assert_eq!(item.genres, vec!["Drama", "Science Fiction"]);
        assert!(item.genre_contains("Fiction"));
        assert!(item.genre_matches_any(&["Horror", "Drama"]));
        assert!(!item.genre_matches_any(&["Horror", "Comedy"]));
    }

    #[test]
    fn test_empty_queries() {
        let catalog = Catalog::new();
        assert!(catalog.get(999).is_none());
        assert!(!catalog.contains(999));
        assert_eq!(catalog.iter().count(), 0);
    }
}
