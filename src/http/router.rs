//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Place search and CRUD
        .route("/places", get(handlers::search_places))
        .route("/places", post(handlers::create_place))
        .route("/places/{id}", get(handlers::get_place))
        .route("/places/{id}", put(handlers::update_place))
        .route("/places/{id}", delete(handlers::delete_place))
        .route("/places/{id}/status", patch(handlers::update_status))
        // Schedule validation
        .route(
            "/places/{id}/schedule/validate",
            post(handlers::validate_schedule),
        );

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
