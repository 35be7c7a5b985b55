//! Filter for the requested popularity bracket.

use crate::preferences::PopularityBucket;
use crate::traits::Filter;
use data_loader::CatalogItem;

/// Splits the catalog at `PopularityBucket::THRESHOLD`.
///
/// "Popular" is strictly above the threshold, "lesser-known" is at or below
/// it, so every item with a known popularity lands in exactly one bracket.
pub struct PopularityFilter {
    bucket: PopularityBucket,
}

impl PopularityFilter {
    pub fn new(bucket: PopularityBucket) -> Self {
        Self { bucket }
    }
}

impl Filter for PopularityFilter {
    fn name(&self) -> &str {
        "PopularityFilter"
    }

    fn keep(&self, item: &CatalogItem) -> bool {
        match (self.bucket, item.popularity) {
            (PopularityBucket::Any, _) => true,
            (_, None) => false,
            (PopularityBucket::Popular, Some(p)) => p > PopularityBucket::THRESHOLD,
            (PopularityBucket::LesserKnown, Some(p)) => p <= PopularityBucket::THRESHOLD,
        }
    }
}
