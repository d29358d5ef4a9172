//! Repository trait and error types for place storage.
//!
//! The trait is the substitution seam between the query engine and whatever
//! owns durability. The in-memory backend is the only implementation today;
//! a durable one slots in behind the same trait without interface changes.

use async_trait::async_trait;
use std::fmt;

use crate::models::{Category, GeoPoint, Place, PlaceId, PlaceStatus};

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Structured context for repository errors.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "create", "update_status")
    pub operation: Option<String>,
    /// The entity ID if applicable
    pub entity_id: Option<String>,
    /// Additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    /// Set the entity ID.
    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    /// Set additional details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref id) = self.entity_id {
            parts.push(format!("id={}", id));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for repository operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum RepositoryError {
    /// Requested place was not found.
    #[error("Not found: {message} {context}")]
    NotFound {
        message: String,
        context: ErrorContext,
    },

    /// An id collision could not be resolved on insert.
    #[error("Conflict: {message} {context}")]
    Conflict {
        message: String,
        context: ErrorContext,
    },

    /// Configuration or initialization error.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Backend-specific failure (durable implementations only; the memory
    /// backend never produces this).
    #[error("Backend error: {message} {context}")]
    Backend {
        message: String,
        context: ErrorContext,
    },
}

impl RepositoryError {
    /// Not-found error for a place id within a named operation.
    pub fn place_not_found(operation: &str, id: PlaceId) -> Self {
        Self::NotFound {
            message: format!("Place {} not found", id),
            context: ErrorContext::new(operation).with_entity_id(id),
        }
    }
}

/// Repository trait for the place collection.
///
/// All query operations return results in stable insertion order and never
/// mutate state; mutations are serialized by the implementation. The trait
/// is async so a durable backend can block on I/O; the in-memory
/// implementation completes every call without suspension.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    // ==================== Mutations ====================

    /// Insert a new place and return its id.
    ///
    /// Regenerates the id on collision rather than overwrite an existing
    /// record. Schedules are stored as given; conflict checking happens in
    /// the service layer before a place reaches the repository.
    async fn create(&self, place: Place) -> RepositoryResult<PlaceId>;

    /// Replace the record with the given id wholesale, keeping its position.
    async fn update(&self, id: PlaceId, place: Place) -> RepositoryResult<()>;

    /// Transition the moderation status of a place.
    async fn update_status(&self, id: PlaceId, status: PlaceStatus) -> RepositoryResult<()>;

    /// Remove a place from the catalog.
    async fn delete(&self, id: PlaceId) -> RepositoryResult<()>;

    // ==================== Queries ====================

    /// Fetch a place by id.
    async fn find_by_id(&self, id: PlaceId) -> RepositoryResult<Option<Place>>;

    /// All places created by the given user, in insertion order.
    async fn find_by_creator(&self, creator_id: &str) -> RepositoryResult<Vec<Place>>;

    /// All places in the given category, in insertion order.
    async fn find_by_category(&self, category: Category) -> RepositoryResult<Vec<Place>>;

    /// Case-insensitive substring name match.
    ///
    /// Empty `text` matches nothing; "no query" is not "everything".
    async fn find_by_name_contains(&self, text: &str) -> RepositoryResult<Vec<Place>>;

    /// All places within `radius_km` of `center`, boundary inclusive.
    async fn find_within_radius(
        &self,
        center: GeoPoint,
        radius_km: f64,
    ) -> RepositoryResult<Vec<Place>>;

    /// Every place in the catalog, in insertion order.
    async fn list_all(&self) -> RepositoryResult<Vec<Place>>;

    /// Number of places in the catalog.
    async fn count(&self) -> RepositoryResult<usize>;
}
