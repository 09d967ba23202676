//! Central application state management
//!
//! All serving structures are wired here once at startup and shared
//! immutably with every handler. There is no module-global model state:
//! a service that failed to load its artifacts carries `model: None` and
//! every operation answers `ServiceUnavailable` until restart.

use crate::config::Config;
use crate::error::AppError;
use crate::services::{BookCatalog, RecommendationEngine};
use std::sync::Arc;

/// Immutable recommendation model context.
///
/// Owns the neighbor-search engine and the book metadata catalog built
/// from the exported artifacts. Nothing here mutates after construction,
/// so actix workers share it without locking.
#[derive(Debug)]
pub struct RecommendationContext {
    pub engine: RecommendationEngine,
    pub catalog: BookCatalog,
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    model: Option<Arc<RecommendationContext>>,
}

impl AppState {
    pub fn new(config: Config, model: Option<RecommendationContext>) -> Self {
        Self {
            config: Arc::new(config),
            model: model.map(Arc::new),
        }
    }

    /// State for a process whose artifacts failed to load.
    pub fn disabled(config: Config) -> Self {
        Self::new(config, None)
    }

    pub fn model_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// The serving context, or `ServiceUnavailable` when running disabled.
    pub fn model(&self) -> Result<&RecommendationContext, AppError> {
        self.model.as_deref().ok_or(AppError::ServiceUnavailable)
    }
}
