//! RecommendationEngine: dispatch a mode to its strategy.
//!
//! A strategy that fails hands over to basic ranking over the same
//! candidates. The caller always gets a list back, possibly empty.

use crate::config::EngineConfig;
use crate::error::StrategyError;
use crate::{basic, content, discovery, mood, regional};
use data_loader::{ArtifactStore, CatalogItem};
use pipeline::RecommendationMode;
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, warn};

/// Shares the artifact store (read-only, so no lock) with every request
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    store: Arc<ArtifactStore>,
    config: EngineConfig,
}

impl RecommendationEngine {
    pub fn new(store: Arc<ArtifactStore>) -> Self {
        Self {
            store,
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    /// Rank `candidates` for `mode` with the configured limit and the thread RNG
    pub fn recommend<'a>(
        &self,
        candidates: &[&'a CatalogItem],
        mode: &RecommendationMode,
    ) -> Vec<&'a CatalogItem> {
        self.recommend_with_rng(candidates, mode, self.config.limit, &mut rand::rng())
    }

    /// Rank `candidates` for `mode`.
    ///
    /// The result holds at most `min(limit, candidates.len())` items, every
    /// one of them drawn from `candidates`.
    pub fn recommend_with_rng<'a, R: Rng + ?Sized>(
        &self,
        candidates: &[&'a CatalogItem],
        mode: &RecommendationMode,
        limit: usize,
        rng: &mut R,
    ) -> Vec<&'a CatalogItem> {
        if candidates.is_empty() || limit == 0 {
            return Vec::new();
        }
        debug!("Ranking {} candidates with {} strategy", candidates.len(), mode.name());

        let ranked: Result<Vec<&CatalogItem>, StrategyError> = match mode {
            RecommendationMode::Content => {
                content::rank(&self.store, candidates, limit, self.config.similar_pool, rng)
            }
            RecommendationMode::Mood(kind) => mood::rank(candidates, *kind, limit),
            RecommendationMode::Discovery(kind) => discovery::rank(candidates, *kind, limit),
            RecommendationMode::Regional(target) => regional::rank(candidates, target, limit),
            RecommendationMode::Basic => return basic::rank(candidates, limit),
        };

        match ranked {
            Ok(items) => items,
            Err(e) => {
                warn!("{} strategy fell back to basic: {}", mode.name(), e);
                basic::rank(candidates, limit)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Catalog, Region};
    use pipeline::{DiscoveryKind, Mood, RegionTarget};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn engine(catalog: Catalog) -> RecommendationEngine {
        RecommendationEngine::new(Arc::new(ArtifactStore::from_catalog(catalog)))
    }

    fn sample_catalog() -> Catalog {
        Catalog::from_items(vec![
            CatalogItem::new(1, "Lagaan")
                .with_genres("Drama|Sport")
                .with_overview("A Hindi epic")
                .with_rating(8.1)
                .with_popularity(12.0),
            CatalogItem::new(2, "Toy Story")
                .with_genres("Animation|Comedy|Family")
                .with_rating(8.0)
                .with_popularity(95.0),
            CatalogItem::new(3, "Alien")
                .with_genres("Horror|Science Fiction")
                .with_rating(8.1)
                .with_popularity(60.0),
            CatalogItem::new(4, "Cats")
                .with_genres("Comedy|Fantasy")
                .with_rating(4.5)
                .with_popularity(20.0),
        ])
    }

    fn all_modes() -> Vec<RecommendationMode> {
        vec![
            RecommendationMode::Content,
            RecommendationMode::Mood(Mood::Happy),
            RecommendationMode::Discovery(DiscoveryKind::Hidden),
            RecommendationMode::Discovery(DiscoveryKind::Unrecognized),
            RecommendationMode::Regional(RegionTarget::Known(Region::Hollywood)),
            RecommendationMode::Basic,
        ]
    }

    #[test]
    fn test_empty_candidates_for_every_mode() {
        let engine = engine(sample_catalog());
        for mode in all_modes() {
            assert!(engine.recommend(&[], &mode).is_empty());
        }
    }

    #[test]
    fn test_length_and_membership_bounds() {
        let engine = engine(sample_catalog());
        let catalog = engine.store().catalog().unwrap();
        let candidates: Vec<_> = catalog.iter().take(3).collect();
        let mut rng = StdRng::seed_from_u64(42);

        for mode in all_modes() {
            for limit in [0, 1, 2, 6] {
                let ranked = engine.recommend_with_rng(&candidates, &mode, limit, &mut rng);
                assert!(ranked.len() <= limit.min(candidates.len()));
                assert!(ranked.iter().all(|r| candidates.iter().any(|c| c.id == r.id)));
            }
        }
    }

    #[test]
    fn test_content_without_artifacts_falls_back_to_basic() {
        let engine = engine(sample_catalog());
        let catalog = engine.store().catalog().unwrap();
        let candidates: Vec<_> = catalog.iter().collect();

        let ranked = engine.recommend(&candidates, &RecommendationMode::Content);
        let ids: Vec<_> = ranked.iter().map(|i| i.id).collect();
        // 8.1 tie broken by popularity
        assert_eq!(ids, vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_failed_strategy_falls_back_to_basic() {
        let catalog = Catalog::from_items(vec![
            CatalogItem::new(1, "A").with_genres("Comedy").with_rating(f32::NAN),
            CatalogItem::new(2, "B").with_genres("Drama").with_rating(6.0),
        ]);
        let engine = engine(catalog);
        let catalog = engine.store().catalog().unwrap();
        let candidates: Vec<_> = catalog.iter().collect();

        let ranked = engine.recommend(&candidates, &RecommendationMode::Mood(Mood::Happy));
        assert_eq!(ranked.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn test_regional_uses_classified_labels() {
        let engine = engine(sample_catalog());
        let catalog = engine.store().catalog().unwrap();
        let candidates: Vec<_> = catalog.iter().collect();

        let mode = RecommendationMode::Regional(RegionTarget::Known(Region::Bollywood));
        let ranked = engine.recommend(&candidates, &mode);
        assert_eq!(ranked.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_configured_limit() {
        let engine = engine(sample_catalog()).with_config(EngineConfig::default().with_limit(2));
        let catalog = engine.store().catalog().unwrap();
        let candidates: Vec<_> = catalog.iter().collect();

        assert_eq!(engine.recommend(&candidates, &RecommendationMode::Basic).len(), 2);
    }
}
