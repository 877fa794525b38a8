use crate::strategies::Strategy;
use crate::LcsEngine;

pub struct LcsEngineBuilder {
    strategy: Strategy,
    size_limit: Option<usize>,
}

impl LcsEngineBuilder {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            size_limit: None,
        }
    }
    pub fn with_size_limit(mut self, limit: usize) -> Self {
        self.size_limit = Some(limit);
        self
    }
    /// Use the strategy's own advisory bound; a no-op for unbounded strategies.
    pub fn with_practical_limit(mut self) -> Self {
        self.size_limit = self.strategy.practical_limit();
        self
    }
    pub fn build(self) -> LcsEngine {
        match self.size_limit {
            Some(limit) => LcsEngine::with_size_limit(self.strategy, limit),
            None => LcsEngine::new(self.strategy),
        }
    }
}
