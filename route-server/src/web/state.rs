//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::CachedCatalog;
use crate::planner::PlannerConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Cached node catalog
    pub catalog: Arc<CachedCatalog>,

    /// Route planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: CachedCatalog, config: PlannerConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}
