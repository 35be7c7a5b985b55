//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern, and the
//! `filter_catalog` entry point that narrows a catalog to a candidate set.

use crate::filters::{GenrePreferenceFilter, MinimumRatingFilter, PopularityFilter, TimePeriodFilter};
use crate::preferences::{GenreSelection, PopularityBucket, PreferenceRecord, RatingBucket, TimePeriod};
use crate::traits::Filter;
use data_loader::{Catalog, CatalogItem};
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TimePeriodFilter::new(TimePeriod::Classic))
///     .add_filter(MinimumRatingFilter::new(7.0));
///
/// let filtered = pipeline.apply(catalog.iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline a preference record asks for.
    ///
    /// Filters are added in a fixed order (time period, rating, popularity,
    /// genre). Preferences left at "any" add nothing.
    pub fn for_preferences(prefs: &PreferenceRecord) -> Self {
        let mut pipeline = Self::new();

        if prefs.time_period != TimePeriod::Any {
            pipeline = pipeline.add_filter(TimePeriodFilter::new(prefs.time_period));
        }
        if prefs.rating == RatingBucket::HighRated {
            pipeline = pipeline.add_filter(MinimumRatingFilter::new(RatingBucket::HIGH_RATED_FLOOR));
        }
        if prefs.popularity != PopularityBucket::Any {
            pipeline = pipeline.add_filter(PopularityFilter::new(prefs.popularity));
        }
        if let GenreSelection::Only(genres) = &prefs.genres {
            pipeline = pipeline.add_filter(GenrePreferenceFilter::new(genres.clone()));
        }
        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// ## Algorithm
    /// 1. Start with the input candidates
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    pub fn apply<'a>(&self, candidates: Vec<&'a CatalogItem>) -> Vec<&'a CatalogItem> {
        let mut current = candidates;
        for filter in &self.filters {
            debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Narrow the catalog to the items matching `prefs`, in catalog order.
///
/// Pure: the catalog is only read, and the same inputs always give the same
/// candidate set.
pub fn filter_catalog<'a>(catalog: &'a Catalog, prefs: &PreferenceRecord) -> Vec<&'a CatalogItem> {
    FilterPipeline::for_preferences(prefs).apply(catalog.iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::RecommendationMode;

    fn catalog() -> Catalog {
        Catalog::from_items(vec![
            CatalogItem::new(1, "Classic Drama")
                .with_year(1995)
                .with_rating(8.1)
                .with_popularity(12.0)
                .with_genres("Drama"),
            CatalogItem::new(2, "Modern Action")
                .with_year(2015)
                .with_rating(6.4)
                .with_popularity(80.0)
                .with_genres("Action|Thriller"),
            CatalogItem::new(3, "Recent Comedy")
                .with_year(2023)
                .with_rating(7.2)
                .with_popularity(45.0)
                .with_genres("Comedy|Family"),
        ])
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let catalog = catalog();

        let filtered = pipeline.apply(catalog.iter().collect());
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_any_preferences_add_no_filters() {
        let prefs = PreferenceRecord::new(RecommendationMode::Basic).with_genres(&["any"]);
        assert!(FilterPipeline::for_preferences(&prefs).is_empty());
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(TimePeriodFilter::new(TimePeriod::Classic));
        let catalog = catalog();

        let filtered = pipeline.apply(catalog.iter().collect());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let catalog = catalog();
        let prefs = PreferenceRecord::default()
            .with_rating(RatingBucket::HighRated)
            .with_popularity(PopularityBucket::Popular);

        assert_eq!(FilterPipeline::for_preferences(&prefs).len(), 2);
        let ids: Vec<_> = filter_catalog(&catalog, &prefs).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_filter_catalog_is_repeatable() {
        let catalog = catalog();
        let prefs = PreferenceRecord::default()
            .with_time_period(TimePeriod::Modern)
            .with_genres(&["Action", "Comedy"]);

        let first = filter_catalog(&catalog, &prefs);
        let second = filter_catalog(&catalog, &prefs);
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].id, 2);
    }
}
