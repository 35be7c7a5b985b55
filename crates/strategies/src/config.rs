/// Knobs shared by every strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of results per request
    pub limit: usize,
    /// How many nearest neighbours the content strategy considers before
    /// intersecting with the candidates
    pub similar_pool: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            limit: 6,
            similar_pool: 20,
        }
    }
}

impl EngineConfig {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_similar_pool(mut self, similar_pool: usize) -> Self {
        self.similar_pool = similar_pool;
        self
    }
}
