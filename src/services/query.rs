//! Caller-facing query coordination.
//!
//! [`QueryCoordinator`] is the surface embedding callers actually invoke: it
//! validates schedule edits against a place's existing rows before they are
//! accepted, and composes the catalog's structural filters into one search
//! operation with AND semantics.

use std::sync::Arc;

use crate::catalog::{PlaceRepository, RepositoryError};
use crate::models::{Category, GeoPoint, Place, PlaceId, PlaceStatus, WeeklyInterval};
use crate::schedule::{self, ScheduleError};

/// Error type for query and mutation operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum QueryError {
    /// Referenced place does not exist.
    #[error("Place {0} not found")]
    NotFound(PlaceId),

    /// Candidate schedule failed validation.
    #[error("Schedule validation failed: {0}")]
    Schedule(#[from] ScheduleError),

    /// Underlying repository failure.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for QueryError {
    fn from(err: RepositoryError) -> Self {
        QueryError::Repository(err)
    }
}

/// Search request with optional, AND-composed filters.
///
/// An entirely empty filter matches nothing — browsing starts from a query
/// or a filter, never from the full catalog. A `center` without a
/// `radius_km` (or the reverse) leaves distance unconstrained.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    pub text: Option<String>,
    pub category: Option<Category>,
    pub center: Option<GeoPoint>,
    pub radius_km: Option<f64>,
}

impl SearchFilter {
    fn radius_constraint(&self) -> Option<(GeoPoint, f64)> {
        match (self.center, self.radius_km) {
            (Some(center), Some(radius)) => Some((center, radius)),
            _ => None,
        }
    }

    fn is_empty(&self) -> bool {
        self.text.is_none() && self.category.is_none() && self.radius_constraint().is_none()
    }
}

/// Composes the schedule validator and the place catalog for callers.
#[derive(Clone)]
pub struct QueryCoordinator {
    repository: Arc<dyn PlaceRepository>,
}

impl QueryCoordinator {
    /// Create a coordinator over the given repository.
    pub fn new(repository: Arc<dyn PlaceRepository>) -> Self {
        Self { repository }
    }

    /// Access the underlying repository.
    pub fn repository(&self) -> &Arc<dyn PlaceRepository> {
        &self.repository
    }

    // ==================== Read path ====================

    /// Search places with AND-composed text, category and radius filters.
    ///
    /// Filters apply in order text → category → radius; the first present
    /// filter fetches from the catalog, the rest narrow in memory. Results
    /// keep stable insertion order.
    pub async fn search(&self, filter: &SearchFilter) -> Result<Vec<Place>, QueryError> {
        if filter.is_empty() {
            log::debug!("Empty search filter, returning no results");
            return Ok(Vec::new());
        }

        let mut results = match &filter.text {
            Some(text) => self.repository.find_by_name_contains(text).await?,
            None => match filter.category {
                Some(category) => self.repository.find_by_category(category).await?,
                // radius_constraint is present here or the filter was empty
                None => match filter.radius_constraint() {
                    Some((center, radius)) => {
                        return Ok(self.repository.find_within_radius(center, radius).await?)
                    }
                    None => return Ok(Vec::new()),
                },
            },
        };

        if filter.text.is_some() {
            if let Some(category) = filter.category {
                results.retain(|p| p.category == category);
            }
        }
        if let Some((center, radius)) = filter.radius_constraint() {
            results.retain(|p| center.distance_km(&p.location) <= radius);
        }

        log::info!("Search returned {} places", results.len());
        Ok(results)
    }

    /// Fetch a single place.
    pub async fn get_place(&self, id: PlaceId) -> Result<Place, QueryError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(QueryError::NotFound(id))
    }

    /// All places created by a user.
    pub async fn places_by_creator(&self, creator_id: &str) -> Result<Vec<Place>, QueryError> {
        Ok(self.repository.find_by_creator(creator_id).await?)
    }

    // ==================== Schedule validation ====================

    /// Validate a candidate interval against a place's existing schedule.
    ///
    /// When the candidate is an edit of an existing row, `edited_index`
    /// names that row so it is excluded by identity — comparing the
    /// candidate against its own previous value would self-conflict.
    pub async fn validate_schedule_edit(
        &self,
        place_id: PlaceId,
        candidate: &WeeklyInterval,
        edited_index: Option<usize>,
    ) -> Result<(), QueryError> {
        let place = self.get_place(place_id).await?;
        let others: Vec<WeeklyInterval> = place
            .schedules
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != edited_index)
            .map(|(_, interval)| *interval)
            .collect();

        schedule::validate(candidate, &others)?;
        Ok(())
    }

    /// Check a full schedule set for internal consistency.
    ///
    /// Each row is validated against every other row; the first failure
    /// wins, in row order.
    fn validate_schedule_set(schedules: &[WeeklyInterval]) -> Result<(), ScheduleError> {
        for (i, candidate) in schedules.iter().enumerate() {
            let others: Vec<WeeklyInterval> = schedules
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, interval)| *interval)
                .collect();
            schedule::validate(candidate, &others)?;
        }
        Ok(())
    }

    // ==================== Write path ====================

    /// Validate and insert a new place.
    pub async fn create_place(&self, place: Place) -> Result<PlaceId, QueryError> {
        Self::validate_schedule_set(&place.schedules)?;
        let id = self.repository.create(place).await?;
        log::info!("Created place {}", id);
        Ok(id)
    }

    /// Validate and replace an existing place.
    pub async fn update_place(&self, id: PlaceId, place: Place) -> Result<(), QueryError> {
        Self::validate_schedule_set(&place.schedules)?;
        self.repository
            .update(id, place)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound { .. } => QueryError::NotFound(id),
                other => QueryError::Repository(other),
            })
    }

    /// Transition a place's moderation status.
    pub async fn set_status(&self, id: PlaceId, status: PlaceStatus) -> Result<(), QueryError> {
        self.repository
            .update_status(id, status)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound { .. } => QueryError::NotFound(id),
                other => QueryError::Repository(other),
            })
    }

    /// Remove a place from the catalog.
    pub async fn delete_place(&self, id: PlaceId) -> Result<(), QueryError> {
        self.repository.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound { .. } => QueryError::NotFound(id),
            other => QueryError::Repository(other),
        })
    }
}
