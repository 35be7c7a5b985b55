//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate sets.

use data_loader::CatalogItem;

/// Core trait for filtering catalog items.
///
/// A filter is built from one preference and then applied as a plain
/// predicate, so filters hold their parameters and never see the request.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - `apply` takes ownership of the Vec and returns the survivors in the same
///   relative order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `item` survives this filter
    fn keep(&self, item: &CatalogItem) -> bool;

    /// Apply this filter to a set of candidates.
    fn apply<'a>(&self, candidates: Vec<&'a CatalogItem>) -> Vec<&'a CatalogItem> {
        candidates.into_iter().filter(|item| self.keep(item)).collect()
    }
}
