//! Content ranking: movies whose text resembles a reference movie.
//!
//! ## Algorithm
//! 1. Pick the reference uniformly at random from the candidates
//! 2. If the sample similarity matrix covers the reference, rank its row
//! 3. Otherwise compute cosine similarity against the full text matrix
//! 4. Take the `similar_pool` nearest neighbours (never the reference itself)
//! 5. Keep those that are also candidates, in similarity order, up to `limit`
//!
//! With neither artifact available the strategy fails with
//! `NoTextArtifacts` and the engine falls back to basic ranking.

use crate::error::StrategyError;
use crate::ranking::sort_descending_by;
use data_loader::{ArtifactStore, CatalogItem, MovieId};
use rand::Rng;
use std::collections::HashMap;
use tracing::debug;

pub fn rank<'a, R: Rng + ?Sized>(
    store: &ArtifactStore,
    candidates: &[&'a CatalogItem],
    limit: usize,
    similar_pool: usize,
    rng: &mut R,
) -> Result<Vec<&'a CatalogItem>, StrategyError> {
    if candidates.is_empty() {
        return Ok(Vec::new());
    }
    let reference = candidates[rng.random_range(0..candidates.len())];
    debug!("Content reference: {} ({})", reference.title, reference.id);

    rank_similar_to(store, reference, candidates, limit, similar_pool)
}

/// Rank candidates by similarity to a given reference movie
pub fn rank_similar_to<'a>(
    store: &ArtifactStore,
    reference: &CatalogItem,
    candidates: &[&'a CatalogItem],
    limit: usize,
    similar_pool: usize,
) -> Result<Vec<&'a CatalogItem>, StrategyError> {
    if let Some(sample) = store.sample_similarity()
        && let Some(row) = sample.row_of(reference.id)
    {
        let neighbours = nearest(sample.scores(row).iter().copied(), row, similar_pool)?;
        debug!("Sample matrix gave {} neighbours", neighbours.len());
        return Ok(keep_candidates(
            neighbours.into_iter().map(|col| sample.id_at(col)),
            candidates,
            limit,
        ));
    }

    let Some(matrix) = store.text_matrix() else {
        return Err(StrategyError::NoTextArtifacts);
    };
    let row = store
        .catalog()
        .and_then(|catalog| catalog.get(reference.id))
        .map(|item| item.source_row)
        .ok_or(StrategyError::ReferenceNotInCatalog(reference.id))?;
    let similarities = matrix
        .cosine_similarities(row)
        .ok_or(StrategyError::ReferenceNotInCatalog(reference.id))?;

    let neighbours = nearest(similarities, row, similar_pool)?;
    debug!("Text matrix gave {} neighbours", neighbours.len());
    Ok(keep_candidate_rows(neighbours, candidates, limit))
}

/// Positions of the `pool` highest scores, skipping `exclude`
fn nearest(
    scores: impl IntoIterator<Item = f32>,
    exclude: usize,
    pool: usize,
) -> Result<Vec<usize>, StrategyError> {
    let mut scored: Vec<(usize, f32)> = scores
        .into_iter()
        .enumerate()
        .filter(|(position, _)| *position != exclude)
        .collect();
    sort_descending_by(&mut scored, |(_, score)| Some(*score))?;
    Ok(scored.into_iter().take(pool).map(|(position, _)| position).collect())
}

/// Candidates whose id appears in `ids`, in `ids` order, each at most once
fn keep_candidates<'a>(
    ids: impl IntoIterator<Item = MovieId>,
    candidates: &[&'a CatalogItem],
    limit: usize,
) -> Vec<&'a CatalogItem> {
    let mut by_id: HashMap<MovieId, &'a CatalogItem> = HashMap::with_capacity(candidates.len());
    for &item in candidates {
        by_id.entry(item.id).or_insert(item);
    }
    ids.into_iter()
        .filter_map(|id| by_id.remove(&id))
        .take(limit)
        .collect()
}

/// Like `keep_candidates`, keyed by catalog file row
fn keep_candidate_rows<'a>(
    rows: Vec<usize>,
    candidates: &[&'a CatalogItem],
    limit: usize,
) -> Vec<&'a CatalogItem> {
    let mut by_row: HashMap<usize, &'a CatalogItem> = HashMap::with_capacity(candidates.len());
    for &item in candidates {
        by_row.entry(item.source_row).or_insert(item);
    }
    rows.into_iter()
        .filter_map(|row| by_row.remove(&row))
        .take(limit)
        .collect()
}
