//! Discovery ranking: surface movies that are good but easy to miss.
//!
//! Each kind keeps a slice of the candidates and orders it by a heuristic
//! score:
//! - hidden: popularity < 30, rating >= 7.0, score `(r - 7) / 3 + (1 - p / 30)`
//! - underrated: popularity < 50, rating >= 6.5, score `r / 10 * (1 - p / 100)`
//! - cult: released before 2010, rating >= 7.0, score `r / 10 * (1 - year / 2025)`
//! - awards: rating >= 8.0, ordered by rating
//!
//! Unknown values never pass a threshold.

use crate::error::StrategyError;
use crate::ranking::sort_descending_by;
use data_loader::CatalogItem;
use pipeline::DiscoveryKind;

const CULT_CUTOFF_YEAR: u16 = 2010;
const CULT_REFERENCE_YEAR: f32 = 2025.0;
const AWARDS_FLOOR: f32 = 8.0;

pub fn rank<'a>(
    candidates: &[&'a CatalogItem],
    kind: DiscoveryKind,
    limit: usize,
) -> Result<Vec<&'a CatalogItem>, StrategyError> {
    let mut ranked = match kind {
        DiscoveryKind::Unrecognized => candidates.to_vec(),
        _ => {
            let mut scored: Vec<(&CatalogItem, f32)> = candidates
                .iter()
                .filter_map(|&item| score(kind, item).map(|s| (item, s)))
                .collect();
            sort_descending_by(&mut scored, |(_, s)| Some(*s))?;
            scored.into_iter().map(|(item, _)| item).collect()
        }
    };
    ranked.truncate(limit);
    Ok(ranked)
}

/// Score of an item that qualifies for `kind`, or `None` if it does not
fn score(kind: DiscoveryKind, item: &CatalogItem) -> Option<f32> {
    match kind {
        DiscoveryKind::Hidden => {
            let (rating, popularity) = (item.rating?, item.popularity?);
            (popularity < 30.0 && rating >= 7.0)
                .then(|| (rating - 7.0) / 3.0 + (1.0 - popularity / 30.0))
        }
        DiscoveryKind::Underrated => {
            let (rating, popularity) = (item.rating?, item.popularity?);
            (popularity < 50.0 && rating >= 6.5)
                .then(|| rating / 10.0 * (1.0 - popularity / 100.0))
        }
        DiscoveryKind::Cult => {
            let (rating, year) = (item.rating?, item.year?);
            (year < CULT_CUTOFF_YEAR && rating >= 7.0)
                .then(|| rating / 10.0 * (1.0 - f32::from(year) / CULT_REFERENCE_YEAR))
        }
        DiscoveryKind::Awards => item.rating.filter(|r| *r >= AWARDS_FLOOR),
        DiscoveryKind::Unrecognized => None,
    }
}
