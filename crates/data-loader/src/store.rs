//! ArtifactStore: everything loaded once at startup.
//!
//! Loading never fails. The catalog is the only mandatory artifact; each
//! optional artifact is loaded independently and dropped (with a warning) if
//! it is missing, unreadable or inconsistent with the catalog.

use crate::artifacts::{load_dense, GenreEncoder, SampleSimilarity, TextFeatureMatrix, TextVectorizer};
use crate::error::Result;
use crate::parser;
use crate::region::ensure_regions;
use crate::types::Catalog;
use ndarray::Array2;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Where each artifact lives on disk
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub catalog: PathBuf,
    pub vectorizer: PathBuf,
    pub user_features: PathBuf,
    pub movie_features: PathBuf,
    pub text_matrix: PathBuf,
    pub sample_similarity: PathBuf,
    pub sample_indices: PathBuf,
    pub genre_encoder: PathBuf,
}

impl ArtifactPaths {
    /// Standard file names under a data directory and a models directory
    pub fn new(data_dir: &Path, models_dir: &Path) -> Self {
        Self {
            catalog: data_dir.join("movies2024.csv"),
            vectorizer: models_dir.join("tfidf_vectorizer.json"),
            user_features: models_dir.join("user_features.json"),
            movie_features: models_dir.join("movie_features.json"),
            text_matrix: models_dir.join("tfidf_matrix.json"),
            sample_similarity: models_dir.join("cosine_sim_sample.json"),
            sample_indices: models_dir.join("sample_indices.json"),
            genre_encoder: models_dir.join("genre_mlb.json"),
        }
    }
}

/// Catalog plus whichever optional artifacts loaded.
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct ArtifactStore {
    catalog: Option<Catalog>,
    vectorizer: Option<TextVectorizer>,
    user_features: Option<Array2<f32>>,
    movie_features: Option<Array2<f32>>,
    text_matrix: Option<TextFeatureMatrix>,
    sample_similarity: Option<SampleSimilarity>,
    genre_encoder: Option<GenreEncoder>,
}

impl ArtifactStore {
    /// A store with nothing loaded (catalog unavailable)
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store over an in-memory catalog. Regions are classified here too.
    pub fn from_catalog(mut catalog: Catalog) -> Self {
        ensure_regions(&mut catalog);
        Self {
            catalog: Some(catalog),
            ..Self::default()
        }
    }

    pub fn with_sample_similarity(mut self, sample: SampleSimilarity) -> Self {
        self.sample_similarity = Some(sample);
        self
    }

    /// Attach a text matrix. Dropped if its rows do not line up with the catalog.
    pub fn with_text_matrix(mut self, matrix: TextFeatureMatrix) -> Self {
        self.text_matrix = self.checked_text_matrix(matrix);
        self
    }

    /// Load every artifact.
    ///
    /// Steps:
    /// 1. Parse the catalog (mandatory; on failure return an empty store)
    /// 2. Classify regions for items that have none
    /// 3. Load the optional artifacts in parallel
    /// 4. Cross-check the text matrix against the catalog
    pub fn load(paths: &ArtifactPaths) -> Self {
        let start = Instant::now();
        info!("Loading catalog from {}", paths.catalog.display());

        let catalog = match parser::parse_catalog(&paths.catalog) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("Catalog unavailable: {}", e);
                return Self::empty();
            }
        };
        let mut store = Self::from_catalog(catalog);

        // Rayon's `join` runs two closures in parallel; nest for more
        let ((vectorizer, (user_features, movie_features)), ((text_matrix, sample), genre_encoder)) =
            rayon::join(
                || {
                    rayon::join(
                        || optional("text vectorizer", &paths.vectorizer, TextVectorizer::load),
                        || {
                            rayon::join(
                                || {
                                    optional("user features", &paths.user_features, |p| {
                                        load_dense(p, "user features")
                                    })
                                },
                                || {
                                    optional("movie features", &paths.movie_features, |p| {
                                        load_dense(p, "movie features")
                                    })
                                },
                            )
                        },
                    )
                },
                || {
                    rayon::join(
                        || {
                            rayon::join(
                                || optional("text matrix", &paths.text_matrix, TextFeatureMatrix::load),
                                || load_sample(paths),
                            )
                        },
                        || optional("genre encoder", &paths.genre_encoder, GenreEncoder::load),
                    )
                },
            );

        store.vectorizer = vectorizer;
        store.user_features = user_features;
        store.movie_features = movie_features;
        store.sample_similarity = sample;
        store.genre_encoder = genre_encoder;
        store.text_matrix = text_matrix.and_then(|m| store.checked_text_matrix(m));

        info!(
            "Artifact store ready in {:.2?}: {} movies, artifacts [{}]",
            start.elapsed(),
            store.catalog().map(Catalog::len).unwrap_or(0),
            store.loaded_artifacts().join(", ")
        );
        store
    }

    fn checked_text_matrix(&self, matrix: TextFeatureMatrix) -> Option<TextFeatureMatrix> {
        let expected = self.catalog.as_ref().map(Catalog::source_rows).unwrap_or(0);
        if matrix.n_rows() != expected {
            warn!(
                "Ignoring text matrix: {} rows but the catalog file has {} records",
                matrix.n_rows(),
                expected
            );
            return None;
        }
        Some(matrix)
    }

    /// `None` means the catalog could not be loaded at all
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn sample_similarity(&self) -> Option<&SampleSimilarity> {
        self.sample_similarity.as_ref()
    }

    pub fn text_matrix(&self) -> Option<&TextFeatureMatrix> {
        self.text_matrix.as_ref()
    }

    pub fn vectorizer(&self) -> Option<&TextVectorizer> {
        self.vectorizer.as_ref()
    }

    pub fn user_features(&self) -> Option<&Array2<f32>> {
        self.user_features.as_ref()
    }

    pub fn movie_features(&self) -> Option<&Array2<f32>> {
        self.movie_features.as_ref()
    }

    pub fn genre_encoder(&self) -> Option<&GenreEncoder> {
        self.genre_encoder.as_ref()
    }

    /// Names of the artifacts that are present, for logs and `stats`
    pub fn loaded_artifacts(&self) -> Vec<&'static str> {
        [
            ("catalog", self.catalog.is_some()),
            ("text vectorizer", self.vectorizer.is_some()),
            ("user features", self.user_features.is_some()),
            ("movie features", self.movie_features.is_some()),
            ("text matrix", self.text_matrix.is_some()),
            ("sample similarity", self.sample_similarity.is_some()),
            ("genre encoder", self.genre_encoder.is_some()),
        ]
        .into_iter()
        .filter(|(_, present)| *present)
        .map(|(name, _)| name)
        .collect()
    }
}

/// Load one optional artifact, logging instead of failing
fn optional<T>(name: &str, path: &Path, load: impl FnOnce(&Path) -> Result<T>) -> Option<T> {
    if !path.is_file() {
        debug!("No {} at {}, skipping", name, path.display());
        return None;
    }
    match load(path) {
        Ok(artifact) => {
            debug!("Loaded {} from {}", name, path.display());
            Some(artifact)
        }
        Err(e) => {
            warn!("Failed to load {} from {}: {}", name, path.display(), e);
            None
        }
    }
}

/// The sample matrix is useless without its id mapping, so they load as a pair
fn load_sample(paths: &ArtifactPaths) -> Option<SampleSimilarity> {
    if !paths.sample_indices.is_file() {
        debug!("No sample indices at {}, skipping sample similarity", paths.sample_indices.display());
        return None;
    }
    optional("sample similarity", &paths.sample_similarity, |matrix_path| {
        SampleSimilarity::load(matrix_path, &paths.sample_indices)
    })
}
