//! Filter to ensure minimum quality threshold.
//!
//! Removes movies rated below a floor. Movies without a rating are removed
//! too, since they cannot show they clear it.

use crate::traits::Filter;
use data_loader::CatalogItem;

/// Removes candidates below a rating floor.
pub struct MinimumRatingFilter {
    min_rating: f32,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Inclusive floor on the 0-10 scale (7.0 for "high-rated")
    pub fn new(min_rating: f32) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn keep(&self, item: &CatalogItem) -> bool {
        item.rating.is_some_and(|rating| rating >= self.min_rating)
    }
}
