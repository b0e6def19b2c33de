//! Application state containing the upstream catalog client

use std::sync::Arc;

use crate::domain::MovieCatalog;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Upstream movie catalog
    pub catalog: Arc<dyn MovieCatalog>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        Self { catalog }
    }
}
