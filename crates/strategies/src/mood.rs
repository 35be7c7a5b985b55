//! Mood ranking: keep genres that fit the mood, best rated first.

use crate::error::StrategyError;
use crate::ranking::sort_descending_by;
use data_loader::CatalogItem;
use pipeline::Mood;

/// Genres that suit a mood. Unrecognized moods get a broad default.
pub fn mood_genres(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Happy => &["Comedy", "Animation", "Family", "Adventure"],
        Mood::Sad => &["Drama", "Romance", "Music"],
        Mood::Excited => &["Action", "Adventure", "Science Fiction", "Fantasy"],
        Mood::Relaxed => &["Documentary", "History", "TV Movie"],
        Mood::Thoughtful => &["Drama", "History", "Documentary", "War"],
        Mood::Romantic => &["Romance", "Comedy", "Drama"],
        Mood::Unrecognized => &["Comedy", "Drama", "Action"],
    }
}

pub fn rank<'a>(
    candidates: &[&'a CatalogItem],
    mood: Mood,
    limit: usize,
) -> Result<Vec<&'a CatalogItem>, StrategyError> {
    let genres = mood_genres(mood);
    let mut matching: Vec<&CatalogItem> = candidates
        .iter()
        .copied()
        .filter(|item| item.genre_matches_any(genres))
        .collect();

    sort_descending_by(&mut matching, |item| item.rating)?;
    matching.truncate(limit);
    Ok(matching)
}
