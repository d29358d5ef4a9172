//! Place catalog storage via the repository pattern.
//!
//! The catalog owns the place collection and answers structural queries.
//! Different storage backends hide behind the [`PlaceRepository`] trait so a
//! durable implementation can be swapped in without touching callers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, embedding callers)        │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services::query) - validation + search  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  PlaceRepository trait - abstract interface             │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────▼──────────────────────────────┐
//!     │           Memory Repository                   │
//!     │     (copy-on-write snapshot list)             │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! There is deliberately no process-global catalog: callers construct a
//! repository (directly or via [`RepositoryFactory`]) and pass it by
//! reference wherever it is needed.

pub mod config;
pub mod repository;

#[cfg(feature = "memory-repo")]
pub mod memory;

pub use config::{CatalogConfig, RepositoryKind, ServerSettings};
#[cfg(feature = "memory-repo")]
pub use memory::MemoryRepository;
pub use repository::{ErrorContext, PlaceRepository, RepositoryError, RepositoryResult};

use std::sync::Arc;

use crate::models::Place;

#[cfg(not(feature = "memory-repo"))]
compile_error!("Enable at least one repository backend feature.");

/// Repository factory for dependency injection.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance for the given kind.
    pub fn create(kind: RepositoryKind) -> RepositoryResult<Arc<dyn PlaceRepository>> {
        match kind {
            RepositoryKind::Memory => Ok(Self::create_memory(Vec::new())),
        }
    }

    /// Create an in-memory repository seeded with an initial place list.
    #[cfg(feature = "memory-repo")]
    pub fn create_memory(initial: Vec<Place>) -> Arc<dyn PlaceRepository> {
        Arc::new(MemoryRepository::with_places(initial))
    }
}
