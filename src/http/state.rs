//! Application state for the HTTP server.

use std::sync::Arc;

use crate::catalog::PlaceRepository;
use crate::services::QueryCoordinator;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Coordinator wrapping the place repository
    pub coordinator: QueryCoordinator,
}

impl AppState {
    /// Create a new application state over the given repository.
    pub fn new(repository: Arc<dyn PlaceRepository>) -> Self {
        Self {
            coordinator: QueryCoordinator::new(repository),
        }
    }
}
