use crate::core::history::UsageHistory;
use crate::core::sampler::{Sampler, SystemSampler};
use crate::core::task::TaskCatalog;
use crate::core::EngineError;
use std::sync::Arc;

pub type BoxedSampler = Box<dyn Sampler + Send>;

/// Builds a fresh sampler for every evaluation so concurrent requests never
/// share sampling state.
pub type SamplerFactory = Arc<dyn Fn() -> Result<BoxedSampler, EngineError> + Send + Sync>;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<TaskCatalog>,
    pub history: Arc<UsageHistory>,
    sampler_factory: SamplerFactory,
}

impl ServerState {
    pub fn new(catalog: TaskCatalog, history: UsageHistory) -> Self {
        Self {
            catalog: Arc::new(catalog),
            history: Arc::new(history),
            sampler_factory: Arc::new(|| -> Result<BoxedSampler, EngineError> {
                Ok(Box::new(SystemSampler::new()?))
            }),
        }
    }

    pub fn with_sampler_factory(mut self, factory: SamplerFactory) -> Self {
        self.sampler_factory = factory;
        self
    }

    pub fn new_sampler(&self) -> Result<BoxedSampler, EngineError> {
        (self.sampler_factory)()
    }
}
