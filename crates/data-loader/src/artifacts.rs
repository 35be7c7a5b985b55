//! Precomputed numeric artifacts produced by the offline training job.
//!
//! All artifacts are JSON documents. Each loader validates dimensions up
//! front so the request path can index without re-checking.

use crate::error::{DataLoadError, Result};
use crate::types::MovieId;
use ndarray::{Array2, ArrayView1};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).map_err(|_| DataLoadError::FileNotFound {
        path: path.display().to_string(),
    })?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Turn nested rows into a dense matrix, rejecting ragged input
pub fn dense_from_rows(rows: Vec<Vec<f32>>, artifact: &str) -> Result<Array2<f32>> {
    let n_rows = rows.len();
    let n_cols = rows.first().map(Vec::len).unwrap_or(0);
    if let Some(bad) = rows.iter().position(|row| row.len() != n_cols) {
        return Err(DataLoadError::shape(
            artifact,
            format!("row {} has {} columns, expected {}", bad, rows[bad].len(), n_cols),
        ));
    }
    let flat: Vec<f32> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((n_rows, n_cols), flat)
        .map_err(|e| DataLoadError::shape(artifact, e.to_string()))
}

/// Load a dense `[[f32]]` document
pub fn load_dense(path: &Path, artifact: &str) -> Result<Array2<f32>> {
    let rows: Vec<Vec<f32>> = read_json(path)?;
    dense_from_rows(rows, artifact)
}

// =============================================================================
// Sample similarity matrix
// =============================================================================

/// Pairwise similarity over a fixed sample of the catalog.
///
/// Row and column `i` both belong to `ids[i]`.
#[derive(Debug, Clone)]
pub struct SampleSimilarity {
    matrix: Array2<f32>,
    ids: Vec<MovieId>,
    rows: HashMap<MovieId, usize>,
}

impl SampleSimilarity {
    pub fn new(matrix: Array2<f32>, ids: Vec<MovieId>) -> Result<Self> {
        let (n_rows, n_cols) = matrix.dim();
        if n_rows != n_cols {
            return Err(DataLoadError::shape(
                "sample similarity",
                format!("matrix is {}x{}, expected square", n_rows, n_cols),
            ));
        }
        if ids.len() != n_rows {
            return Err(DataLoadError::shape(
                "sample similarity",
                format!("{} sample ids for a {}x{} matrix", ids.len(), n_rows, n_cols),
            ));
        }

        let mut rows = HashMap::with_capacity(ids.len());
        for (row, &id) in ids.iter().enumerate() {
            // First occurrence wins, like a positional lookup would
            rows.entry(id).or_insert(row);
        }
        Ok(Self { matrix, ids, rows })
    }

    /// Load the matrix and its id mapping; both must agree
    pub fn load(matrix_path: &Path, ids_path: &Path) -> Result<Self> {
        let matrix = load_dense(matrix_path, "sample similarity")?;
        let ids: Vec<MovieId> = read_json(ids_path)?;
        Self::new(matrix, ids)
    }

    /// Sample row of a movie, if it was part of the sample
    pub fn row_of(&self, id: MovieId) -> Option<usize> {
        self.rows.get(&id).copied()
    }

    pub fn scores(&self, row: usize) -> ArrayView1<'_, f32> {
        self.matrix.row(row)
    }

    pub fn id_at(&self, row: usize) -> MovieId {
        self.ids[row]
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

// =============================================================================
// Full text-feature matrix (CSR)
// =============================================================================

#[derive(Debug, Deserialize)]
struct CsrDocument {
    shape: [usize; 2],
    indptr: Vec<usize>,
    indices: Vec<usize>,
    data: Vec<f32>,
}

/// Sparse TF-IDF matrix with one row per catalog data record
#[derive(Debug, Clone)]
pub struct TextFeatureMatrix {
    n_cols: usize,
    indptr: Vec<usize>,
    indices: Vec<usize>,
    data: Vec<f32>,
    norms: Vec<f32>,
}

impl TextFeatureMatrix {
    /// Build from CSR parts, validating every invariant the row slicing relies on
    pub fn from_csr(
        shape: [usize; 2],
        indptr: Vec<usize>,
        indices: Vec<usize>,
        data: Vec<f32>,
    ) -> Result<Self> {
        let [n_rows, n_cols] = shape;
        let err = |reason: String| DataLoadError::shape("text matrix", reason);

        if indptr.len() != n_rows + 1 {
            return Err(err(format!(
                "indptr has {} entries for {} rows",
                indptr.len(),
                n_rows
            )));
        }
        if indptr.windows(2).any(|w| w[0] > w[1]) || indptr.first() != Some(&0) {
            return Err(err("indptr is not monotone from zero".to_string()));
        }
        let nnz = indptr[n_rows];
        if indices.len() != nnz || data.len() != nnz {
            return Err(err(format!(
                "expected {} stored values, found {} indices and {} data",
                nnz,
                indices.len(),
                data.len()
            )));
        }
        if let Some(&col) = indices.iter().find(|&&col| col >= n_cols) {
            return Err(err(format!("column {} out of range for {} columns", col, n_cols)));
        }

        let norms = indptr
            .windows(2)
            .map(|w| data[w[0]..w[1]].iter().map(|v| v * v).sum::<f32>().sqrt())
            .collect();

        Ok(Self {
            n_cols,
            indptr,
            indices,
            data,
            norms,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let doc: CsrDocument = read_json(path)?;
        Self::from_csr(doc.shape, doc.indptr, doc.indices, doc.data)
    }

    pub fn n_rows(&self) -> usize {
        self.norms.len()
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Cosine similarity of `row` against every row, in row order.
    ///
    /// Rows with no stored values have similarity 0. Returns `None` when
    /// `row` is out of range.
    pub fn cosine_similarities(&self, row: usize) -> Option<Vec<f32>> {
        if row >= self.n_rows() {
            return None;
        }

        let mut reference = vec![0.0f32; self.n_cols];
        let (start, end) = (self.indptr[row], self.indptr[row + 1]);
        for k in start..end {
            reference[self.indices[k]] = self.data[k];
        }
        let reference_norm = self.norms[row];

        let sims = self
            .indptr
            .windows(2)
            .zip(&self.norms)
            .map(|(w, &norm)| {
                if norm == 0.0 || reference_norm == 0.0 {
                    return 0.0;
                }
                let dot: f32 = (w[0]..w[1])
                    .map(|k| self.data[k] * reference[self.indices[k]])
                    .sum();
                dot / (norm * reference_norm)
            })
            .collect();
        Some(sims)
    }
}

// =============================================================================
// Text vectorizer and genre encoder
// =============================================================================

/// Vocabulary and IDF weights of the TF-IDF vectorizer.
///
/// Loaded so the store reports it, and so free-text queries can be vectorized
/// against the same columns as the text matrix.
#[derive(Debug, Clone, Deserialize)]
pub struct TextVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TextVectorizer {
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f32>) -> Result<Self> {
        if let Some((term, &col)) = vocabulary.iter().find(|(_, col)| **col >= idf.len()) {
            return Err(DataLoadError::shape(
                "text vectorizer",
                format!("term {:?} maps to column {} but idf has {}", term, col, idf.len()),
            ));
        }
        Ok(Self { vocabulary, idf })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw: TextVectorizer = read_json(path)?;
        Self::new(raw.vocabulary, raw.idf)
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// IDF weight of a lowercase term, if it is in the vocabulary
    pub fn idf(&self, term: &str) -> Option<f32> {
        self.vocabulary.get(term).map(|&col| self.idf[col])
    }
}

/// Multi-label genre encoder: the ordered class list the training job used
#[derive(Debug, Clone, Deserialize)]
pub struct GenreEncoder {
    classes: Vec<String>,
}

impl GenreEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    pub fn load(path: &Path) -> Result<Self> {
        read_json(path)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Multi-hot encoding of `genres` over the known classes
    pub fn encode<S: AsRef<str>>(&self, genres: &[S]) -> Vec<u8> {
        self.classes
            .iter()
            .map(|class| u8::from(genres.iter().any(|g| g.as_ref() == class)))
            .collect()
    }
}
