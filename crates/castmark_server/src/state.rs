//! Shared state for the HTTP handlers.

use castmark_interface::{ContentDriver, HistoryStore};
use castmark_run::Orchestrator;
use std::sync::Arc;

/// Everything the handlers need, cloned per request.
#[derive(Clone)]
pub struct AppState {
    driver: Arc<dyn ContentDriver>,
    history: Arc<dyn HistoryStore>,
    orchestrator: Orchestrator,
}

impl AppState {
    /// Build state over the given generation and persistence boundaries.
    pub fn new(driver: Arc<dyn ContentDriver>, history: Arc<dyn HistoryStore>) -> Self {
        let orchestrator = Orchestrator::new(Arc::clone(&driver), Arc::clone(&history));
        Self {
            driver,
            history,
            orchestrator,
        }
    }

    /// The generation driver.
    pub fn driver(&self) -> &Arc<dyn ContentDriver> {
        &self.driver
    }

    /// The history store.
    pub fn history(&self) -> &Arc<dyn HistoryStore> {
        &self.history
    }

    /// The run orchestrator.
    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }
}
