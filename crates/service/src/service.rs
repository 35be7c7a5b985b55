//! # Recommendation Service
//!
//! This module runs one request end to end:
//! 1. Check the catalog is loaded
//! 2. Parse the request into a preference record
//! 3. Filter the catalog down to candidates
//! 4. Rank the candidates with the requested strategy
//! 5. Format the picks for the client

use std::sync::Arc;
use std::time::Instant;

use rand::Rng;
use tracing::{info, instrument};

use data_loader::ArtifactStore;
use pipeline::filter_catalog;
use strategies::{EngineConfig, RecommendationEngine};

use crate::error::ServiceError;
use crate::format::{format_recommendations, Recommendation};
use crate::request::PreferenceRequest;

/// Entry point the routing layer calls.
///
/// Cheap to clone; every clone shares the same immutable artifact store.
#[derive(Debug, Clone)]
pub struct RecommendationService {
    engine: RecommendationEngine,
}

impl RecommendationService {
    pub fn new(store: Arc<ArtifactStore>) -> Self {
        Self {
            engine: RecommendationEngine::new(store),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.engine = self.engine.with_config(config);
        self
    }

    pub fn store(&self) -> &ArtifactStore {
        self.engine.store()
    }

    pub fn config(&self) -> &EngineConfig {
        self.engine.config()
    }

    /// Recommendations for a request, using the configured limit
    pub fn recommend(&self, request: &PreferenceRequest) -> Result<Vec<Recommendation>, ServiceError> {
        self.recommend_with_limit(request, self.engine.config().limit)
    }

    pub fn recommend_with_limit(
        &self,
        request: &PreferenceRequest,
        limit: usize,
    ) -> Result<Vec<Recommendation>, ServiceError> {
        self.recommend_with_rng(request, limit, &mut rand::rng())
    }

    /// Full request path with an explicit random source for the content
    /// strategy's reference pick
    #[instrument(
        skip(self, request, rng),
        fields(kind = %request.recommendation_type, sub_type = %request.sub_type)
    )]
    pub fn recommend_with_rng<R: Rng + ?Sized>(
        &self,
        request: &PreferenceRequest,
        limit: usize,
        rng: &mut R,
    ) -> Result<Vec<Recommendation>, ServiceError> {
        let start = Instant::now();
        let catalog = self
            .engine
            .store()
            .catalog()
            .ok_or(ServiceError::CatalogUnavailable)?;

        let prefs = request.to_preferences();
        let candidates = filter_catalog(catalog, &prefs);
        let picks = self
            .engine
            .recommend_with_rng(&candidates, &prefs.mode, limit, rng);

        info!(
            "{} recommendations from {} candidates ({} mode) in {:.2?}",
            picks.len(),
            candidates.len(),
            prefs.mode.name(),
            start.elapsed()
        );
        Ok(format_recommendations(&picks))
    }
}
