//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use super::dto::{
    HealthResponse, PlaceListResponse, PlaceRequest, SearchQuery, UpdateStatusRequest,
    ValidateScheduleRequest, ValidateScheduleResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{GeoPoint, Place, PlaceId};
use crate::services::{QueryError, SearchFilter};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint reporting the backend and its current size.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repository = match state.coordinator.repository().count().await {
        Ok(count) => format!("memory ({} places)", count),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository,
    }))
}

// =============================================================================
// Place Search and CRUD
// =============================================================================

/// GET /v1/places?text=&category=&lat=&lon=&radius_km=
///
/// Search the catalog. An empty query matches nothing.
pub async fn search_places(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> HandlerResult<PlaceListResponse> {
    let center = match (query.lat, query.lon) {
        (Some(lat), Some(lon)) => {
            Some(GeoPoint::new(lat, lon).map_err(AppError::BadRequest)?)
        }
        (None, None) => None,
        _ => {
            return Err(AppError::BadRequest(
                "lat and lon must be supplied together".to_string(),
            ))
        }
    };

    let filter = SearchFilter {
        text: query.text,
        category: query.category,
        center,
        radius_km: query.radius_km,
    };
    let places = state.coordinator.search(&filter).await?;
    let total = places.len();

    Ok(Json(PlaceListResponse { places, total }))
}

/// POST /v1/places
///
/// Create a place. The schedule set is validated before insertion; an
/// inconsistent set is a 400, not a stored record.
pub async fn create_place(
    State(state): State<AppState>,
    Json(request): Json<PlaceRequest>,
) -> Result<(StatusCode, Json<Place>), AppError> {
    let place = request.into_place().map_err(AppError::BadRequest)?;
    let id = state.coordinator.create_place(place).await?;
    info!("Created place {}", id);

    let created = state.coordinator.get_place(id).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /v1/places/{id}
pub async fn get_place(
    State(state): State<AppState>,
    Path(id): Path<PlaceId>,
) -> HandlerResult<Place> {
    let place = state.coordinator.get_place(id).await?;
    Ok(Json(place))
}

/// PUT /v1/places/{id}
///
/// Replace a place wholesale. Validates the new schedule set first.
pub async fn update_place(
    State(state): State<AppState>,
    Path(id): Path<PlaceId>,
    Json(request): Json<PlaceRequest>,
) -> HandlerResult<Place> {
    let place = request.into_place().map_err(AppError::BadRequest)?;
    state.coordinator.update_place(id, place).await?;

    let updated = state.coordinator.get_place(id).await?;
    Ok(Json(updated))
}

/// DELETE /v1/places/{id}
pub async fn delete_place(
    State(state): State<AppState>,
    Path(id): Path<PlaceId>,
) -> Result<StatusCode, AppError> {
    state.coordinator.delete_place(id).await?;
    info!("Deleted place {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /v1/places/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<PlaceId>,
    Json(request): Json<UpdateStatusRequest>,
) -> HandlerResult<Place> {
    state.coordinator.set_status(id, request.status).await?;

    let updated = state.coordinator.get_place(id).await?;
    Ok(Json(updated))
}

// =============================================================================
// Schedule Validation
// =============================================================================

/// POST /v1/places/{id}/schedule/validate
///
/// Validate a candidate opening-hours row against the place's existing
/// schedule. The verdict is always a 200; only a missing place is an HTTP
/// error.
pub async fn validate_schedule(
    State(state): State<AppState>,
    Path(id): Path<PlaceId>,
    Json(request): Json<ValidateScheduleRequest>,
) -> HandlerResult<ValidateScheduleResponse> {
    let verdict = state
        .coordinator
        .validate_schedule_edit(id, &request.interval, request.edited_index)
        .await;

    match verdict {
        Ok(()) => Ok(Json(ValidateScheduleResponse::ok())),
        Err(QueryError::Schedule(e)) => Ok(Json(ValidateScheduleResponse::failed(e))),
        Err(other) => Err(other.into()),
    }
}
